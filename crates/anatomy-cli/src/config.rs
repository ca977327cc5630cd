//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from the
//! explicit path, the local project directory, or the platform config
//! directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use anatomy_export::ExportOptions;

use crate::error::CliError;

/// Settings read from `config.toml`.
///
/// ```toml
/// [export]
/// format = "typescript"
/// anatomy_view = "tree"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default export options.
    pub export: ExportOptions,
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (anatomy/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("anatomy/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "anatomy", "anatomy") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CliError::MissingConfig(PathBuf::from(path)));
    }

    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_export::{AnatomyView, SchemaFormat};
    use tempfile::tempdir;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\nformat = \"jsdoc\"\nanatomy_view = \"tree\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.export.format, SchemaFormat::JsDoc);
        assert_eq!(config.export.anatomy_view, AnatomyView::Tree);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\nformat = \"json\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.export.format, SchemaFormat::Json);
        assert_eq!(config.export.anatomy_view, AnatomyView::Yaml);
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::MissingConfig(_))
        ));
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[export]\nformat = \"xml\"\n").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(CliError::ConfigParse(_))));
    }
}
