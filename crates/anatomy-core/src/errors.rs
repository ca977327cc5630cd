//! Error types for reading component metadata documents.
//!
//! Anatomy data itself never fails to load: malformed anatomy degrades to an
//! empty element list. Only the enclosing document can be rejected.

use thiserror::Error;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while reading a metadata document.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document is not valid JSON, or a section has the wrong shape.
    #[error("invalid metadata document: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value is not an object.
    #[error("expected an object at the top level, found {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
