//! Error types for schema export.

use anatomy_core::ModelError;
use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting component metadata.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Format name not recognized.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Anatomy view name not recognized.
    #[error("Unknown anatomy view: {0}")]
    UnknownView(String),

    /// No writer registered under the requested name.
    #[error("No writer registered for format: {0}")]
    NoWriter(String),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input document could not be read.
    #[error(transparent)]
    Model(#[from] ModelError),
}
