//
//  crowdin-client
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Crowdin API Responses
//!
//! Collection endpoints return an offset-based pagination block next to the
//! data array:
//!
//! ```json
//! {
//!     "data": [{"data": {"id": 2}}, {"data": {"id": 4}}],
//!     "pagination": {"offset": 10, "limit": 25}
//! }
//! ```
//!
//! The client extracts this block on a best-effort basis for every successful
//! `GET` and `POST` response and exposes it on the
//! [`Response`](super::Response) wrapper. A body without a `pagination` key is
//! not an error; the wrapper simply carries no pagination.
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_client::api::services::ProjectListOptions;
//!
//! let mut options = ProjectListOptions::default();
//! options.list.limit = Some(25);
//!
//! loop {
//!     let (projects, response) = client.projects().list(Some(&options)).await?;
//!     if projects.is_empty() {
//!         break;
//!     }
//!     // ... process projects
//!     options.list.offset = response.pagination.map(|p| p.next_offset());
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Offset-based pagination block of a Crowdin list response.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `offset` | `u64` | Index of the first item of the page |
/// | `limit` | `u64` | Requested page size |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Index of the first item in the current page (0-indexed).
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of items per page, as requested.
    #[serde(default)]
    pub limit: u64,
}

impl Pagination {
    /// Returns the offset to request for the page following this one.
    ///
    /// Saturates at `u64::MAX` rather than overflowing on hostile values.
    pub fn next_offset(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }
}

/// The slice of a response body the pagination parser looks at.
#[derive(Deserialize)]
struct PaginationEnvelope {
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// Extracts the pagination block from a raw response body.
///
/// Returns `Ok(None)` when the body is valid JSON without a `pagination` key,
/// and an error only when the body is not parseable at all.
pub(crate) fn parse_pagination(body: &[u8]) -> Result<Option<Pagination>, serde_json::Error> {
    let envelope: PaginationEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.pagination)
}
