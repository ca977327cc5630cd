//! Schema writers.
//!
//! Each writer turns a [`ComponentSet`] into the text of one schema language.

mod jsdoc;
mod json;
mod typescript;
mod yaml;

pub use jsdoc::JsDocWriter;
pub use json::JsonWriter;
pub use typescript::TypeScriptWriter;
pub use yaml::{write_yaml, YamlWriter};

use crate::error::{ExportError, Result};
use anatomy_core::ComponentSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trait for schema writers.
///
/// Implement this trait to add a new output format.
pub trait SchemaWriter: Send + Sync {
    /// Canonical format name (e.g., "yaml").
    fn name(&self) -> &'static str;

    /// Other names the format is known by.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    /// Write every component in the set.
    fn write(&self, components: &ComponentSet) -> Result<String>;
}

/// Built-in output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    #[default]
    #[serde(alias = "yml")]
    Yaml,
    Json,
    #[serde(alias = "ts")]
    TypeScript,
    #[serde(alias = "js")]
    JsDoc,
}

impl SchemaFormat {
    /// All built-in formats.
    pub const ALL: [SchemaFormat; 4] = [Self::Yaml, Self::Json, Self::TypeScript, Self::JsDoc];

    /// Registry name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::TypeScript => "typescript",
            Self::JsDoc => "jsdoc",
        }
    }

    /// File extension of the format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::TypeScript => "ts",
            Self::JsDoc => "js",
        }
    }
}

impl std::fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "jsdoc" | "js" => Ok(Self::JsDoc),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Join per-component blocks into a document ending in a newline.
pub(crate) fn finish_document(blocks: Vec<String>) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("YAML".parse::<SchemaFormat>().unwrap(), SchemaFormat::Yaml);
        assert_eq!("yml".parse::<SchemaFormat>().unwrap(), SchemaFormat::Yaml);
        assert_eq!("ts".parse::<SchemaFormat>().unwrap(), SchemaFormat::TypeScript);
        assert_eq!("js".parse::<SchemaFormat>().unwrap(), SchemaFormat::JsDoc);
        assert!(matches!(
            "xml".parse::<SchemaFormat>(),
            Err(ExportError::UnknownFormat(name)) if name == "xml"
        ));
    }

    #[test]
    fn test_format_serde_names() {
        let format: SchemaFormat = serde_json::from_str("\"ts\"").unwrap();
        assert_eq!(format, SchemaFormat::TypeScript);
        assert_eq!(serde_json::to_string(&SchemaFormat::JsDoc).unwrap(), "\"jsdoc\"");
    }

    #[test]
    fn test_extensions() {
        let extensions: Vec<&str> = SchemaFormat::ALL.iter().map(SchemaFormat::extension).collect();
        assert_eq!(extensions, ["yaml", "json", "ts", "js"]);
    }
}
