//
//  crowdin-client
//  api/services/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Crowdin API v2 service façades.
//!
//! Each service borrows the [`CrowdinClient`](super::CrowdinClient) and maps
//! one method to one request:
//!
//! 1. format the resource identifiers into the path
//! 2. validate and encode list options into the query string
//! 3. call the client with the right verb and body
//! 4. unwrap the `{"data": ...}` envelope into the return type
//!
//! # Module Organization
//!
//! - [`projects`] - Project CRUD
//! - [`branches`] - Branches of a project
//! - [`storages`] - Raw file uploads referenced by other endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_client::api::services::AddBranchRequest;
//!
//! let request = AddBranchRequest {
//!     name: "develop".to_string(),
//!     ..Default::default()
//! };
//! let (branch, _) = client.branches().add(42, &request).await?;
//! ```

pub mod branches;
pub mod projects;
pub mod storages;

pub use branches::*;
pub use projects::*;
pub use storages::*;

use crate::api::common::{ApiResponse, Error, ListResponse, QueryOptions, Response, Result};

/// Appends validated list options to `path`.
pub(crate) fn list_path<O: QueryOptions>(path: &str, options: Option<&O>) -> Result<String> {
    match options {
        Some(options) => {
            options.validate()?;
            Ok(options.apply(path))
        }
        None => Ok(path.to_string()),
    }
}

/// Unwraps a single-item envelope.
///
/// A `204 No Content` where a resource was expected is reported as
/// [`Error::MissingBody`].
pub(crate) fn unwrap_data<T>(
    (body, response): (Option<ApiResponse<T>>, Response),
) -> Result<(T, Response)> {
    match body {
        Some(envelope) => Ok((envelope.data, response)),
        None => Err(Error::MissingBody {
            response: Box::new(response),
        }),
    }
}

/// Flattens a list envelope. An empty or absent body yields an empty list.
pub(crate) fn unwrap_list<T>(
    (body, response): (Option<ListResponse<T>>, Response),
) -> (Vec<T>, Response) {
    let items = body.map(ListResponse::into_items).unwrap_or_default();
    (items, response)
}
