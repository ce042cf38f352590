//
//  crowdin-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! Crowdin authenticates every request with a personal access token (or an
//! OAuth access token) sent as a bearer token:
//!
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! Where the token comes from (environment, keychain, config file) is the
//! application's concern; this module only validates it and injects it.
//!
//! ## Example
//!
//! ```rust
//! use crowdin_client::auth::AccessToken;
//!
//! let token = AccessToken::new("my-personal-access-token").unwrap();
//! let mut headers = reqwest::header::HeaderMap::new();
//! token.apply_to_headers(&mut headers);
//! assert!(headers.contains_key(reqwest::header::AUTHORIZATION));
//! ```

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::api::common::{Error, Result};

/// A validated bearer token.
///
/// The `Authorization` header value is built once, at construction, and
/// marked sensitive so it never shows up in `Debug` output of requests.
#[derive(Clone)]
pub struct AccessToken {
    header: HeaderValue,
}

impl AccessToken {
    /// Validates `token` and prepares its `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty or blank, or contains
    /// characters that cannot appear in an HTTP header.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return Err(Error::Config("access token is required".to_string()));
        }

        let mut header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("access token contains invalid characters".to_string()))?;
        header.set_sensitive(true);

        Ok(Self { header })
    }

    /// Inserts the `Authorization` header, replacing any existing one.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) {
        headers.insert(AUTHORIZATION, self.header.clone());
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
