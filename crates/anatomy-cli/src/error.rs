//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

use anatomy_core::ModelError;
use anatomy_export::ExportError;

/// Errors reported by the anatomy CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Missing configuration file: {0}")]
    MissingConfig(PathBuf),

    #[error("Component not found: {0}")]
    UnknownComponent(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
