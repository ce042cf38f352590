//
//  crowdin-client
//  api/common/error_response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Decoding of Crowdin error response bodies.
//!
//! Crowdin answers a failed request with one of three body shapes, selected
//! by status code and endpoint:
//!
//! | Status | Endpoint | Shape |
//! |--------|----------|-------|
//! | 400 | GraphQL | `{"errors": [{"message": "...", "locations": [{"line": 1, "column": 2}]}]}` |
//! | 400 | REST | `{"errors": [{"error": {"key": "name", "errors": [{"code": "isEmpty", "message": "..."}]}}]}` |
//! | other 4xx/5xx | any | `{"error": {"code": 404, "message": "Project Not Found"}}` |
//!
//! A body that does not match the selected shape decodes to
//! [`ErrorResponse::Status`], which only carries the status code.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A decoded Crowdin error response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorResponse {
    /// Generic `{code, message}` error.
    Simple(SimpleError),
    /// Per-field validation failures of a REST request (HTTP 400).
    Validation(ValidationErrors),
    /// Errors reported by the GraphQL endpoint (HTTP 400).
    GraphQL(GraphQLErrors),
    /// The body did not match the expected shape.
    Status(u16),
}

impl ErrorResponse {
    /// Classifies an error body by status code and endpoint.
    ///
    /// # Parameters
    ///
    /// * `status` - HTTP status code, expected to be in `400..=599`
    /// * `body` - The raw response body
    /// * `graphql` - Whether the request targeted the GraphQL endpoint
    pub fn decode(status: u16, body: &[u8], graphql: bool) -> Self {
        let decoded = match (status, graphql) {
            (400, true) => serde_json::from_slice::<GraphQLErrors>(body)
                .ok()
                .filter(|e| !e.errors.is_empty())
                .map(Self::GraphQL),
            (400, false) => serde_json::from_slice::<ValidationErrors>(body)
                .ok()
                .filter(|e| !e.errors.is_empty())
                .map(|mut e| {
                    e.status = status;
                    Self::Validation(e)
                }),
            _ => serde_json::from_slice::<SimpleErrorBody>(body)
                .ok()
                .map(|b| Self::Simple(b.error)),
        };

        decoded.unwrap_or(Self::Status(status))
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(e) => fmt::Display::fmt(e, f),
            Self::Validation(e) => fmt::Display::fmt(e, f),
            Self::GraphQL(e) => fmt::Display::fmt(e, f),
            Self::Status(status) => write!(f, "server returned status {}", status),
        }
    }
}

/// `{"error": {...}}` wrapper around [`SimpleError`].
#[derive(Deserialize)]
struct SimpleErrorBody {
    error: SimpleError,
}

/// A plain error with a numeric code and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleError {
    /// Error code, usually the HTTP status.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}

/// Validation failures returned for a 400 on a REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// HTTP status of the response; not part of the body.
    #[serde(skip)]
    pub status: u16,

    /// One entry per offending field, in server order.
    pub errors: Vec<FieldErrorEntry>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Validation failed: ", self.status)?;

        let mut parts = Vec::new();
        for entry in &self.errors {
            let key = &entry.error.key;
            if entry.error.errors.is_empty() {
                parts.push(key.clone());
            }
            for detail in &entry.error.errors {
                parts.push(format!("{}: {} ({})", key, detail.message, detail.code));
            }
        }
        f.write_str(&parts.join("; "))
    }
}

/// `{"error": {...}}` element of a validation error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorEntry {
    /// The field and its failures.
    pub error: FieldError,
}

/// All validation failures of one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub key: String,
    /// The rules the field broke.
    #[serde(default)]
    pub errors: Vec<FieldErrorDetail>,
}

/// One broken validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorDetail {
    /// Machine-readable rule name, e.g. `isEmpty`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Errors returned by the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLErrors {
    /// The reported errors, in server order.
    pub errors: Vec<GraphQLError>,
}

impl fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

/// One GraphQL error with its source locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLError {
    /// Human-readable message.
    pub message: String,
    /// Positions in the query the error refers to.
    #[serde(default)]
    pub locations: Vec<GraphQLLocation>,
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Locations: [", self.message)?;
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{{Line:{} Column:{}}}", location.line, location.column)?;
        }
        f.write_str("]")
    }
}

/// Line/column position inside a GraphQL query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let body = br#"{"error":{"code":404,"message":"Project Not Found"}}"#;
        let error = ErrorResponse::decode(404, body, false);
        assert!(matches!(error, ErrorResponse::Simple(_)));
        assert_eq!(error.to_string(), "404 Project Not Found");
    }

    #[test]
    fn test_simple_error_on_graphql_path() {
        let body = br#"{"error":{"code":401,"message":"Unauthorized"}}"#;
        let error = ErrorResponse::decode(401, body, true);
        assert_eq!(error.to_string(), "401 Unauthorized");
    }

    #[test]
    fn test_graphql_error() {
        let body = br#"{"errors":[{"message":"m","locations":[{"line":7,"column":8}]}]}"#;
        let error = ErrorResponse::decode(400, body, true);
        assert!(matches!(error, ErrorResponse::GraphQL(_)));
        assert_eq!(error.to_string(), "m, Locations: [{Line:7 Column:8}]");
    }

    #[test]
    fn test_graphql_error_multiple() {
        let body = br#"{"errors":[
            {"message":"a","locations":[{"line":1,"column":2},{"line":3,"column":4}]},
            {"message":"b","locations":[]}
        ]}"#;
        let error = ErrorResponse::decode(400, body, true);
        assert_eq!(
            error.to_string(),
            "a, Locations: [{Line:1 Column:2} {Line:3 Column:4}]; b, Locations: []"
        );
    }

    #[test]
    fn test_validation_error() {
        let body = br#"{"errors":[
            {"error":{"key":"name","errors":[{"code":"isEmpty","message":"Value is required"}]}},
            {"error":{"key":"sourceLanguageId","errors":[{"code":"notInArray","message":"Unknown language"}]}}
        ]}"#;
        let error = ErrorResponse::decode(400, body, false);
        match &error {
            ErrorResponse::Validation(v) => {
                assert_eq!(v.status, 400);
                assert_eq!(v.errors.len(), 2);
                assert_eq!(v.errors[0].error.key, "name");
            }
            other => panic!("unexpected shape: {:?}", other),
        }
        assert_eq!(
            error.to_string(),
            "400 Validation failed: name: Value is required (isEmpty); \
             sourceLanguageId: Unknown language (notInArray)"
        );
    }

    #[test]
    fn test_validation_error_without_details_keeps_keys() {
        let body = br#"{"errors":[
            {"error":{"key":"name","errors":[]}},
            {"error":{"key":"identifier"}}
        ]}"#;
        let error = ErrorResponse::decode(400, body, false);
        assert_eq!(
            error.to_string(),
            "400 Validation failed: name; identifier"
        );
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let error = ErrorResponse::decode(502, b"<html>Bad Gateway</html>", false);
        assert_eq!(error, ErrorResponse::Status(502));
        assert_eq!(error.to_string(), "server returned status 502");

        let error = ErrorResponse::decode(400, br#"{"unexpected":true}"#, false);
        assert_eq!(error, ErrorResponse::Status(400));

        let error = ErrorResponse::decode(400, b"", true);
        assert_eq!(error, ErrorResponse::Status(400));
    }
}
