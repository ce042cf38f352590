//
//  crowdin-client
//  api/services/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Crowdin Projects API
//!
//! Projects are the top-level container of source files, strings and
//! translations. In Crowdin Enterprise they can additionally be organized
//! in groups.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST            /api/v2/projects
//! GET/PATCH/DELETE    /api/v2/projects/{projectId}
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use crowdin_client::api::common::UpdateRequest;
//! use crowdin_client::api::services::AddProjectRequest;
//!
//! let request = AddProjectRequest {
//!     name: "Website".to_string(),
//!     source_language_id: "en".to_string(),
//!     target_language_ids: vec!["de".to_string(), "uk".to_string()],
//!     ..Default::default()
//! };
//! let (project, _) = client.projects().add(&request).await?;
//!
//! let ops = [UpdateRequest::replace("/description", "Marketing site")];
//! let (project, _) = client.projects().edit(project.id, &ops).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{list_path, unwrap_data, unwrap_list};
use crate::api::client::CrowdinClient;
use crate::api::common::{
    ApiResponse, ListOptions, ListResponse, QueryOptions, Response, Result, UpdateRequest,
    Validate, ValidationError,
};

/// A Crowdin project.
///
/// # Fields
///
/// * `id` - Numeric project identifier used in every nested path
/// * `name` - Display name
/// * `identifier` - URL slug of the project
/// * `source_language_id` - Crowdin language code of the source strings
/// * `target_language_ids` - Language codes translations are made into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Numeric project identifier.
    pub id: u64,

    /// Owner of the project.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Enterprise group the project belongs to.
    #[serde(default)]
    pub group_id: Option<u64>,

    /// Display name.
    pub name: String,

    /// URL slug.
    #[serde(default)]
    pub identifier: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Source language code, e.g. `en`.
    pub source_language_id: String,

    /// Target language codes.
    #[serde(default)]
    pub target_language_ids: Vec<String>,

    /// `open` or `private`.
    #[serde(default)]
    pub visibility: Option<String>,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Time of the last activity in the project.
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v2/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProjectRequest {
    /// Display name. Required.
    pub name: String,

    /// Source language code. Required.
    pub source_language_id: String,

    /// URL slug; generated from the name when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Target language codes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_language_ids: Vec<String>,

    /// `open` or `private`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Enterprise group to create the project in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
}

impl Validate for AddProjectRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name is required"));
        }
        if self.source_language_id.trim().is_empty() {
            return Err(ValidationError::new("sourceLanguageId is required"));
        }
        if let Some(visibility) = self.visibility.as_deref() {
            if visibility != "open" && visibility != "private" {
                return Err(ValidationError::new(
                    "visibility must be either \"open\" or \"private\"",
                ));
            }
        }
        Ok(())
    }
}

/// Query options of `GET /api/v2/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListOptions {
    /// Paging and ordering.
    pub list: ListOptions,

    /// Only projects owned by this user.
    pub user_id: Option<u64>,

    /// Only projects the caller manages.
    pub has_manager_access: Option<bool>,

    /// Only projects of this Enterprise group.
    pub group_id: Option<u64>,
}

impl Validate for ProjectListOptions {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.list.validate()
    }
}

impl QueryOptions for ProjectListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.query_pairs();
        if let Some(user_id) = self.user_id {
            pairs.push(("userId", user_id.to_string()));
        }
        if let Some(has_manager_access) = self.has_manager_access {
            pairs.push(("hasManagerAccess", u8::from(has_manager_access).to_string()));
        }
        if let Some(group_id) = self.group_id {
            pairs.push(("groupId", group_id.to_string()));
        }
        pairs
    }
}

/// Project operations. Obtained from [`CrowdinClient::projects`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectsService<'a> {
    client: &'a CrowdinClient,
}

impl<'a> ProjectsService<'a> {
    pub(crate) fn new(client: &'a CrowdinClient) -> Self {
        Self { client }
    }

    /// Lists projects, in server order.
    pub async fn list(
        &self,
        options: Option<&ProjectListOptions>,
    ) -> Result<(Vec<Project>, Response)> {
        let path = list_path("/api/v2/projects", options)?;
        let result = self.client.get::<ListResponse<Project>>(&path).await?;
        Ok(unwrap_list(result))
    }

    /// Gets one project.
    pub async fn get(&self, project_id: u64) -> Result<(Project, Response)> {
        let path = format!("/api/v2/projects/{}", project_id);
        let result = self.client.get::<ApiResponse<Project>>(&path).await?;
        unwrap_data(result)
    }

    /// Creates a project.
    pub async fn add(&self, request: &AddProjectRequest) -> Result<(Project, Response)> {
        let result = self
            .client
            .post::<ApiResponse<Project>, _>("/api/v2/projects", Some(request))
            .await?;
        unwrap_data(result)
    }

    /// Applies update operations to a project.
    pub async fn edit(
        &self,
        project_id: u64,
        ops: &[UpdateRequest],
    ) -> Result<(Project, Response)> {
        let path = format!("/api/v2/projects/{}", project_id);
        let result = self.client.patch::<ApiResponse<Project>>(&path, ops).await?;
        unwrap_data(result)
    }

    /// Deletes a project.
    pub async fn delete(&self, project_id: u64) -> Result<Response> {
        let path = format!("/api/v2/projects/{}", project_id);
        self.client.delete(&path).await
    }
}
