//
//  crowdin-client
//  api/common/validate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client-side request validation and JSON-Patch style update operations.
//!
//! Every mutating request body goes through [`Validate`] before the request is
//! built. A failed validation never reaches the network: the caller gets a
//! [`ValidationError`] describing the first rule that was violated.
//!
//! # Update Operations
//!
//! Almost every "edit" endpoint of the Crowdin API takes a JSON array of
//! operations:
//!
//! ```json
//! [
//!     {"op": "replace", "path": "/name", "value": "New name"},
//!     {"op": "remove", "path": "/description"}
//! ]
//! ```
//!
//! These are modelled by [`UpdateRequest`] and [`PatchOp`].
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_client::api::common::{UpdateRequest, Validate};
//!
//! let ops = vec![
//!     UpdateRequest::replace("/name", "Website"),
//!     UpdateRequest::remove("/description"),
//! ];
//!
//! for op in &ops {
//!     op.validate()?;
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated validation rule.
///
/// Validation is fail-fast: the error describes exactly one rule, the first
/// one found to be violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human-readable description of the violated rule.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Self-validation capability for request bodies and list options.
///
/// The default implementation accepts everything, so types without local
/// rules opt in with an empty `impl Validate for T {}`.
pub trait Validate {
    /// Checks the value, returning the first violated rule.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for serde_json::Value {}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

/// Operation kind of an [`UpdateRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Replace the value at `path`.
    Replace,
    /// Assert the value at `path` equals `value`.
    Test,
    /// Add `value` at `path`.
    Add,
    /// Remove the value at `path`.
    Remove,
}

impl PatchOp {
    /// Whether the operation requires a `value` member.
    pub fn requires_value(self) -> bool {
        !matches!(self, Self::Remove)
    }
}

/// One JSON-Patch style update operation used as a PATCH body element.
///
/// # Fields
///
/// * `op` - The operation kind
/// * `path` - RFC 6901 JSON pointer into the resource (e.g. `/name`)
/// * `value` - The operand; any JSON value (string, number, bool, object)
///
/// # Example
///
/// ```rust,ignore
/// use crowdin_client::api::common::UpdateRequest;
///
/// let op = UpdateRequest::replace("/isHidden", true);
/// assert_eq!(
///     serde_json::to_string(&op)?,
///     r#"{"op":"replace","path":"/isHidden","value":true}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// The operation kind.
    pub op: PatchOp,

    /// JSON pointer to the target member.
    pub path: String,

    /// Operand of the operation. Omitted from the wire when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl UpdateRequest {
    /// Builds a `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(PatchOp::Replace, path, value)
    }

    /// Builds an `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(PatchOp::Add, path, value)
    }

    /// Builds a `test` operation.
    pub fn test(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(PatchOp::Test, path, value)
    }

    /// Builds a `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
        }
    }

    fn with_value(op: PatchOp, path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op,
            path: path.into(),
            value: Some(value.into()),
        }
    }
}

impl Validate for UpdateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.path.is_empty() {
            return Err(ValidationError::new("path is required"));
        }
        if !self.path.starts_with('/') {
            return Err(ValidationError::new(format!(
                "path {:?} must be a JSON pointer starting with '/'",
                self.path
            )));
        }
        if self.op.requires_value() && self.value.is_none() {
            return Err(ValidationError::new("value is required"));
        }
        Ok(())
    }
}

/// Validates a PATCH body made of update operations.
///
/// The sequence must be non-empty; elements are checked in order and the
/// first failure is returned.
pub fn validate_update_requests(ops: &[UpdateRequest]) -> Result<(), ValidationError> {
    if ops.is_empty() {
        return Err(ValidationError::new("body cannot be empty or nil"));
    }
    ops.iter().try_for_each(|op| op.validate())
}
