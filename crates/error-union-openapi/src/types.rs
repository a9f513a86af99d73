//! Typed OpenAPI structures.
//!
//! A subset of OpenAPI 3.0: just enough to place rendered error responses on an
//! operation and collect their component schemas.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An OpenAPI path with its operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenApiPath {
    /// The path pattern (e.g., "/users/{id}").
    pub path: String,
    /// HTTP method (lowercase: "get", "post", etc.).
    pub method: String,
    /// The operation definition.
    pub operation: OpenApiOperation,
}

/// An OpenAPI operation (endpoint).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiOperation {
    /// Short summary of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Unique operation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Response definitions keyed by status code, in insertion order.
    #[serde(default)]
    pub responses: IndexMap<String, OpenApiResponse>,
    /// Additional fields not explicitly modeled.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One response of an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OpenApiResponse {
    pub description: String,
    /// Media type -> media type object (`{"schema": ...}`).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, Value>,
}

/// An OpenAPI schema definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenApiSchema {
    /// Schema name (used as key in components/schemas).
    pub name: String,
    /// The schema definition.
    pub schema: Value,
}

impl OpenApiPath {
    /// Create a new path.
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into().to_lowercase(),
            operation: OpenApiOperation::default(),
        }
    }

    /// Set the operation for this path.
    pub fn with_operation(mut self, operation: OpenApiOperation) -> Self {
        self.operation = operation;
        self
    }
}

impl OpenApiOperation {
    /// Create a new operation with a summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: Some(summary.into()),
            ..Default::default()
        }
    }

    /// Set the operation ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Add a response. A later response for the same status replaces the earlier one.
    pub fn with_response(mut self, status: impl Into<String>, response: OpenApiResponse) -> Self {
        self.responses.insert(status.into(), response);
        self
    }
}

impl OpenApiResponse {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: IndexMap::new(),
        }
    }

    /// Attach a body schema for a media type.
    pub fn with_content(mut self, media_type: impl Into<String>, schema: Value) -> Self {
        self.content
            .insert(media_type.into(), serde_json::json!({ "schema": schema }));
        self
    }
}

impl OpenApiSchema {
    /// Create a new schema.
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}
