//
//  crowdin-client
//  api/services/storages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Crowdin Storage API
//!
//! Storage holds raw uploads. Other endpoints (files, glossaries, TMs)
//! reference an upload by its storage id instead of taking the bytes inline.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST      /api/v2/storages
//! GET/DELETE    /api/v2/storages/{storageId}
//! ```
//!
//! Uploads are sent as the raw request body. The file name travels
//! URL-encoded in the `Crowdin-API-FileName` header.
//!
//! ## Example
//!
//! ```rust,ignore
//! let bytes = std::fs::read("strings.json")?;
//! let (storage, _) = client.storages().add("strings.json", bytes).await?;
//! println!("uploaded as storage {}", storage.id);
//! ```

use reqwest::Body;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use super::{list_path, unwrap_data, unwrap_list};
use crate::api::client::{with_header, CrowdinClient};
use crate::api::common::{
    ApiResponse, ListOptions, ListResponse, Response, Result, ValidationError,
};

/// Header carrying the name of an uploaded file.
pub const FILE_NAME_HEADER: &str = "Crowdin-API-FileName";

/// An uploaded file.
///
/// # Fields
///
/// * `id` - Storage identifier other endpoints take as `storageId`
/// * `file_name` - Name the file was uploaded under, decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    /// Storage identifier.
    pub id: u64,

    /// Original file name.
    #[serde(default)]
    pub file_name: String,
}

/// Storage operations. Obtained from [`CrowdinClient::storages`].
#[derive(Debug, Clone, Copy)]
pub struct StoragesService<'a> {
    client: &'a CrowdinClient,
}

impl<'a> StoragesService<'a> {
    pub(crate) fn new(client: &'a CrowdinClient) -> Self {
        Self { client }
    }

    /// Lists uploads.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<(Vec<Storage>, Response)> {
        let path = list_path("/api/v2/storages", options)?;
        let result = self.client.get::<ListResponse<Storage>>(&path).await?;
        Ok(unwrap_list(result))
    }

    /// Gets one upload.
    pub async fn get(&self, storage_id: u64) -> Result<(Storage, Response)> {
        let path = format!("/api/v2/storages/{}", storage_id);
        let result = self.client.get::<ApiResponse<Storage>>(&path).await?;
        unwrap_data(result)
    }

    /// Uploads `body` under `file_name`.
    pub async fn add(
        &self,
        file_name: &str,
        body: impl Into<Body>,
    ) -> Result<(Storage, Response)> {
        if file_name.trim().is_empty() {
            return Err(ValidationError::new("fileName is required").into());
        }

        let encoded: String = form_urlencoded::byte_serialize(file_name.as_bytes()).collect();
        let headers = [with_header(FILE_NAME_HEADER, encoded)];
        let result = self
            .client
            .upload::<ApiResponse<Storage>>("/api/v2/storages", body, &headers)
            .await?;
        unwrap_data(result)
    }

    /// Deletes an upload.
    pub async fn delete(&self, storage_id: u64) -> Result<Response> {
        let path = format!("/api/v2/storages/{}", storage_id);
        self.client.delete(&path).await
    }
}
