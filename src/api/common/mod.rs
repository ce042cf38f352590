//
//  crowdin-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Crowdin Client
//!
//! This module provides the types shared by the request funnel and every
//! service: the error taxonomy, the response wrapper, the `{"data": ...}`
//! envelopes, pagination, query encoding and request validation.
//!
//! # Overview
//!
//! - [`Error`] - Unified error type for all client operations
//! - [`Response`] - Status, headers and pagination of a received response
//! - [`ApiResponse`] / [`ListResponse`] - Single-item and list envelopes
//! - [`ErrorResponse`] - Decoded Crowdin error bodies
//! - [`Validate`] / [`UpdateRequest`] - Pre-flight validation and PATCH operations
//! - [`QueryOptions`] / [`ListOptions`] - List query encoding
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_client::api::common::Error;
//!
//! match client.projects().get(42).await {
//!     Ok((project, _)) => println!("{}", project.name),
//!     Err(e) if e.is_not_found() => println!("no such project"),
//!     Err(Error::Decode { source, .. }) => println!("garbled response: {}", source),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod error_response;
mod pagination;
mod query;
mod validate;

pub use error_response::*;
pub use pagination::*;
pub use query::*;
pub use validate::*;

pub(crate) use pagination::parse_pagination;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all Crowdin client operations.
///
/// # Variants
///
/// | Variant | Raised | Response attached |
/// |---------|--------|-------------------|
/// | `Config` | client construction | no |
/// | `Validation` | pre-flight body/options checks | no |
/// | `InvalidPath` | URL resolution | no |
/// | `Encode` | JSON encoding of the request body | no |
/// | `InvalidHeader` | header override | no |
/// | `Transport` | DNS, connect, timeout, body read | no |
/// | `Api` | 4xx/5xx response | yes |
/// | `Decode` | malformed success body | yes |
/// | `MissingBody` | 204 where a resource was expected | yes |
///
/// Nothing before `Transport` ever touches the network.
#[derive(Error, Debug)]
pub enum Error {
    /// The client could not be constructed from the given settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request body or list option failed local validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request path is not a valid URL reference.
    #[error("Invalid path {path:?}: {source}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A header override produced an invalid header name or value.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The underlying transport failed; passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Crowdin answered with a 4xx/5xx status.
    #[error("{error}")]
    Api {
        /// The decoded error body.
        error: ErrorResponse,
        /// The response the error came with.
        response: Box<Response>,
    },

    /// A success response carried a body that could not be decoded.
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
        /// The response the body came with.
        response: Box<Response>,
    },

    /// A success response had no content where a resource was expected.
    #[error("Response had no content (status {})", .response.status.as_u16())]
    MissingBody {
        /// The empty response.
        response: Box<Response>,
    },
}

impl Error {
    /// Returns the response wrapper if an HTTP response was received.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Api { response, .. }
            | Self::Decode { response, .. }
            | Self::MissingBody { response } => Some(&**response),
            _ => None,
        }
    }

    /// Returns the HTTP status code if an HTTP response was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Returns the decoded error body of a 4xx/5xx response.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether Crowdin answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Whether the request was rejected locally before being sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Metadata of a received HTTP response.
///
/// Returned next to every decoded result, and attached to errors raised
/// after a response arrived, so callers can inspect status and headers even
/// on failure.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,

    /// Response headers.
    pub headers: HeaderMap,

    /// Pagination block of a list response, if the body had one.
    pub pagination: Option<Pagination>,
}

impl Response {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            status,
            headers,
            pagination: None,
        }
    }
}

/// Single-item envelope: `{"data": T}`.
///
/// # Example
///
/// ```rust
/// use crowdin_client::api::common::ApiResponse;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Project {
///     id: u64,
///     name: String,
/// }
///
/// let json = r#"{"data": {"id": 1, "name": "Website"}}"#;
/// let response: ApiResponse<Project> = serde_json::from_str(json).unwrap();
/// assert_eq!(response.data.name, "Website");
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The wrapped resource.
    pub data: T,
}

/// List envelope: `{"data": [{"data": T}, ...], "pagination": {...}}`.
///
/// The pagination block is read separately by the client and ends up on
/// [`Response::pagination`]; this type only models the items.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// The wrapped items, in server order.
    #[serde(default = "Vec::new")]
    pub data: Vec<ApiResponse<T>>,
}

impl<T> ListResponse<T> {
    /// Flattens the envelope into the bare items, preserving order.
    pub fn into_items(self) -> Vec<T> {
        self.data.into_iter().map(|item| item.data).collect()
    }
}
