//
//  crowdin-client
//  api/services/branches.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Crowdin Branches API
//!
//! Branches version the source files of a project, typically mirroring the
//! branches of the repository the strings come from.
//!
//! ## API Endpoints
//!
//! ```text
//! GET/POST            /api/v2/projects/{projectId}/branches
//! GET/PATCH/DELETE    /api/v2/projects/{projectId}/branches/{branchId}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{list_path, unwrap_data, unwrap_list};
use crate::api::client::CrowdinClient;
use crate::api::common::{
    ApiResponse, ListOptions, ListResponse, QueryOptions, Response, Result, UpdateRequest,
    Validate, ValidationError,
};

/// Characters Crowdin rejects in branch names.
const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Translation priority of a branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchPriority {
    /// Translated after everything else.
    Low,
    /// Default priority.
    #[default]
    Normal,
    /// Translated first.
    High,
}

/// A branch of a project.
///
/// # Fields
///
/// * `id` - Numeric branch identifier
/// * `project_id` - Project the branch belongs to
/// * `name` - Branch name, unique within the project
/// * `export_pattern` - Path pattern translations of this branch export to
/// * `priority` - Translation priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Numeric branch identifier.
    pub id: u64,

    /// Owning project.
    pub project_id: u64,

    /// Branch name.
    pub name: String,

    /// Display title.
    #[serde(default)]
    pub title: Option<String>,

    /// Export path pattern, e.g. `%three_letters_code%`.
    #[serde(default)]
    pub export_pattern: Option<String>,

    /// Translation priority.
    #[serde(default)]
    pub priority: Option<BranchPriority>,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/v2/projects/{projectId}/branches`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBranchRequest {
    /// Branch name. Required; must not contain `\ / : * ? " < > |`.
    pub name: String,

    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Export path pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,

    /// Translation priority; the server defaults to `normal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<BranchPriority>,
}

impl Validate for AddBranchRequest {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name is required"));
        }
        if self.name.contains(FORBIDDEN_NAME_CHARS) {
            return Err(ValidationError::new(
                r#"name must not contain any of \ / : * ? " < > |"#,
            ));
        }
        Ok(())
    }
}

/// Query options of `GET /api/v2/projects/{projectId}/branches`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchListOptions {
    /// Paging and ordering.
    pub list: ListOptions,

    /// Only the branch with this exact name.
    pub name: Option<String>,
}

impl Validate for BranchListOptions {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.list.validate()
    }
}

impl QueryOptions for BranchListOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.list.query_pairs();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        pairs
    }
}

/// Branch operations. Obtained from [`CrowdinClient::branches`].
#[derive(Debug, Clone, Copy)]
pub struct BranchesService<'a> {
    client: &'a CrowdinClient,
}

impl<'a> BranchesService<'a> {
    pub(crate) fn new(client: &'a CrowdinClient) -> Self {
        Self { client }
    }

    /// Lists the branches of a project.
    pub async fn list(
        &self,
        project_id: u64,
        options: Option<&BranchListOptions>,
    ) -> Result<(Vec<Branch>, Response)> {
        let path = list_path(&format!("/api/v2/projects/{}/branches", project_id), options)?;
        let result = self.client.get::<ListResponse<Branch>>(&path).await?;
        Ok(unwrap_list(result))
    }

    /// Gets one branch.
    pub async fn get(&self, project_id: u64, branch_id: u64) -> Result<(Branch, Response)> {
        let path = format!("/api/v2/projects/{}/branches/{}", project_id, branch_id);
        let result = self.client.get::<ApiResponse<Branch>>(&path).await?;
        unwrap_data(result)
    }

    /// Creates a branch.
    pub async fn add(
        &self,
        project_id: u64,
        request: &AddBranchRequest,
    ) -> Result<(Branch, Response)> {
        let path = format!("/api/v2/projects/{}/branches", project_id);
        let result = self
            .client
            .post::<ApiResponse<Branch>, _>(&path, Some(request))
            .await?;
        unwrap_data(result)
    }

    /// Applies update operations to a branch.
    pub async fn edit(
        &self,
        project_id: u64,
        branch_id: u64,
        ops: &[UpdateRequest],
    ) -> Result<(Branch, Response)> {
        let path = format!("/api/v2/projects/{}/branches/{}", project_id, branch_id);
        let result = self.client.patch::<ApiResponse<Branch>>(&path, ops).await?;
        unwrap_data(result)
    }

    /// Deletes a branch.
    pub async fn delete(&self, project_id: u64, branch_id: u64) -> Result<Response> {
        let path = format!("/api/v2/projects/{}/branches/{}", project_id, branch_id);
        self.client.delete(&path).await
    }
}
