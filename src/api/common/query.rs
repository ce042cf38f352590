//
//  crowdin-client
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query-string encoding for list endpoints.
//!
//! List options are plain structs whose unset fields are `None`. Encoding
//! keeps only the set fields, sorts them by key and form-urlencodes them, so
//! two equal option values always produce byte-identical query strings. An
//! options value with nothing set encodes to the empty string, and
//! [`QueryOptions::apply`] then leaves the path untouched (no stray `?`).

use url::form_urlencoded;

use super::validate::{Validate, ValidationError};

/// Largest page size accepted by Crowdin list endpoints.
pub const MAX_LIMIT: u32 = 500;

/// Conversion of an options struct into query parameters.
pub trait QueryOptions: Validate {
    /// Returns the key/value pairs of every field that is set.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    /// Encodes the set fields as a query string, sorted by key.
    fn encode(&self) -> String {
        let mut pairs = self.query_pairs();
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Appends the encoded query to `path`, if there is one.
    fn apply(&self, path: &str) -> String {
        let query = self.encode();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

/// Paging and ordering options shared by every list endpoint.
///
/// # Fields
///
/// * `order_by` - Sort expression, e.g. `"createdAt desc,name"`
/// * `offset` - Index of the first item to return
/// * `limit` - Page size, between 1 and [`MAX_LIMIT`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Sort expression, e.g. `"createdAt desc,name"`.
    pub order_by: Option<String>,

    /// Index of the first item to return.
    pub offset: Option<u64>,

    /// Maximum number of items to return.
    pub limit: Option<u32>,
}

impl Validate for ListOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.limit {
            Some(limit) if limit == 0 || limit > MAX_LIMIT => Err(ValidationError::new(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            ))),
            _ => Ok(()),
        }
    }
}

impl QueryOptions for ListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_by) = self.order_by.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("orderBy", order_by.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
