//
//  crowdin-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! ## Architecture
//!
//! - [`client`]: Client construction and the generic request funnel
//! - [`common`]: Shared types (errors, envelopes, pagination, validation)
//! - [`services`]: Resource façades (projects, branches, storages)
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`]. Errors raised after a response was
//! received carry it, so status and headers stay inspectable:
//!
//! ```rust,ignore
//! if let Err(e) = client.projects().delete(42).await {
//!     if let Some(response) = e.response() {
//!         eprintln!("status {}", response.status);
//!     }
//! }
//! ```

/// Client construction and the generic request funnel.
pub mod client;

/// Types shared by the funnel and the services.
pub mod common;

/// Resource-specific service façades.
pub mod services;

pub use client::{with_header, ClientBuilder, CrowdinClient, HeaderOption, GRAPHQL_PATH};
pub use common::{ApiResponse, Error, ErrorResponse, ListResponse, Pagination, Response, Result};
