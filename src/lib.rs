//
//  crowdin-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Crowdin Client Library
//!
//! The core of a REST client for the Crowdin and Crowdin Enterprise
//! localization APIs (v2).
//!
//! ## Overview
//!
//! Every call flows through one request funnel on [`CrowdinClient`]:
//!
//! 1. resolve the path against the base URL
//! 2. encode the body, validating it first
//! 3. attach the user agent, the bearer token and any header overrides
//! 4. send, then classify the response
//! 5. map 4xx/5xx bodies to typed errors and decode success bodies
//!
//! Resource-specific calls are thin façades over this funnel.
//!
//! ## Module Structure
//!
//! - [`api`]: The client, request funnel, shared types and service façades
//! - [`auth`]: Bearer token handling
//! - [`config`]: Client settings and base URL resolution
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use crowdin_client::CrowdinClient;
//!
//! let client = CrowdinClient::builder("personal-access-token")
//!     .organization("acme")
//!     .build()?;
//!
//! let (project, response) = client.projects().get(42).await?;
//! println!("{} ({})", project.name, response.status);
//! ```
//!
//! ## Crowdin vs Crowdin Enterprise
//!
//! | Setting | Crowdin | Crowdin Enterprise |
//! |---------|---------|--------------------|
//! | Base URL | `https://api.crowdin.com/` | `https://{org}.api.crowdin.com/` |
//! | Organization | unset | required |
//! | Project groups | No | Yes |

/// HTTP client, request funnel and service façades.
pub mod api;

/// Bearer token handling.
pub mod auth;

/// Client settings and base URL resolution.
pub mod config;

pub use api::{CrowdinClient, Error, Result};
pub use config::ClientConfig;

/// Crate name, sent as the product part of the default `User-Agent`.
pub const APP_NAME: &str = "crowdin-client";

/// Crate version, sent as the version part of the default `User-Agent`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
