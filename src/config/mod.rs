//
//  crowdin-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Client Configuration
//!
//! Settings that decide where the client sends its requests and how it
//! identifies itself. All configuration is passed programmatically; the
//! struct derives `serde` traits so applications can embed it in their own
//! configuration files.
//!
//! ## Crowdin vs Crowdin Enterprise
//!
//! | Deployment | Base URL |
//! |------------|----------|
//! | Crowdin | `https://api.crowdin.com/` |
//! | Crowdin Enterprise | `https://{organization}.api.crowdin.com/` |
//!
//! Setting [`ClientConfig::organization`] switches to the Enterprise host.
//! The rewrite happens once, when the client is built.
//!
//! ## Usage
//!
//! ```rust
//! use crowdin_client::config::ClientConfig;
//!
//! let config = ClientConfig {
//!     organization: Some("demo".to_string()),
//!     ..Default::default()
//! };
//!
//! let base = config.effective_base_url().unwrap();
//! assert_eq!(base.as_str(), "https://demo.api.crowdin.com/");
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::common::{Error, Result};

/// The public Crowdin API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/";

/// Returns the default `User-Agent`, e.g. `crowdin-client/0.1.0`.
pub fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Settings of a [`CrowdinClient`](crate::api::CrowdinClient).
///
/// # Fields
///
/// * `base_url` - Scheme and host of the API, e.g. `https://api.crowdin.com/`
/// * `organization` - Crowdin Enterprise organization name, if any
/// * `user_agent` - Value of the `User-Agent` header sent with every request
///
/// # Notes
///
/// - All fields use `#[serde(default)]` so partial configuration files work
/// - The access token is deliberately not part of this struct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Crowdin Enterprise organization name.
    #[serde(default)]
    pub organization: Option<String>,

    /// Value of the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            organization: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Parses the base URL and applies the organization host rewrite.
    ///
    /// # Returns
    ///
    /// The URL relative API paths are resolved against. Without an
    /// organization it is `base_url` unchanged; with one, the host becomes
    /// `{organization}.{host}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL does not parse, cannot serve
    /// as a base (e.g. `mailto:`), has no host, or if the organization is
    /// blank or produces an invalid host.
    pub fn effective_base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;

        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL {:?} cannot be used as a base",
                self.base_url
            )));
        }

        let Some(organization) = self.organization.as_deref() else {
            return Ok(url);
        };

        let organization = organization.trim();
        if organization.is_empty() {
            return Err(Error::Config("organization cannot be empty".to_string()));
        }

        let host = url
            .host_str()
            .ok_or_else(|| Error::Config(format!("base URL {:?} has no host", self.base_url)))?;
        let host = format!("{}.{}", organization, host);

        url.set_host(Some(&host))
            .map_err(|e| Error::Config(format!("invalid organization {:?}: {}", organization, e)))?;

        Ok(url)
    }
}
