//! Export pipeline.
//!
//! Applies the anatomy view, picks the writer for the requested format and
//! produces either one document or one file per component.

use crate::error::{ExportError, Result};
use crate::formats::{SchemaFormat, SchemaWriter};
use crate::registry::WriterRegistry;
use anatomy_core::{Anatomy, ComponentMetadata, ComponentSet};
use anatomy_tree::render_anatomy;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// How anatomy appears in the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnatomyView {
    /// Structured element data, as supplied.
    #[default]
    Yaml,
    /// Box-drawing tree text in place of the structured data.
    Tree,
}

impl AnatomyView {
    /// View name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Tree => "tree",
        }
    }
}

impl std::fmt::Display for AnatomyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnatomyView {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yaml" | "yml" | "structured" => Ok(Self::Yaml),
            "tree" => Ok(Self::Tree),
            _ => Err(ExportError::UnknownView(s.to_string())),
        }
    }
}

/// Options for one export call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output format.
    pub format: SchemaFormat,
    /// Anatomy view.
    pub anatomy_view: AnatomyView,
}

impl ExportOptions {
    /// Create default export options (YAML format, YAML anatomy view).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the anatomy view.
    pub fn with_anatomy_view(mut self, view: AnatomyView) -> Self {
        self.anatomy_view = view;
        self
    }
}

/// A generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Replace non-empty anatomy with its rendered tree when the view asks for it.
pub fn apply_view(metadata: &mut ComponentMetadata, view: AnatomyView) {
    if view == AnatomyView::Tree && !metadata.anatomy.is_empty() {
        metadata.anatomy = Anatomy::Rendered(render_anatomy(&metadata.anatomy));
    }
}

/// Copy of the components with the anatomy view applied.
pub fn prepare(components: &ComponentSet, view: AnatomyView) -> ComponentSet {
    let mut prepared = components.clone();
    if view == AnatomyView::Tree {
        for (name, metadata) in prepared.iter_mut() {
            debug!(component = name.as_str(); "Rendering anatomy tree");
            apply_view(metadata, view);
        }
    }
    prepared
}

/// File stem for a component name: anything other than ASCII letters,
/// digits, `-` and `_` becomes `_`.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "component".to_string()
    } else {
        stem
    }
}

/// Export driver over a writer registry.
pub struct Exporter {
    registry: WriterRegistry,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter {
    /// Create an exporter with the built-in writers.
    pub fn new() -> Self {
        Self::with_registry(WriterRegistry::with_defaults())
    }

    /// Create an exporter over a custom registry.
    pub fn with_registry(registry: WriterRegistry) -> Self {
        Self { registry }
    }

    /// The writer registry.
    pub fn registry(&self) -> &WriterRegistry {
        &self.registry
    }

    fn writer(&self, format: SchemaFormat) -> Result<&dyn SchemaWriter> {
        self.registry
            .get(format.name())
            .ok_or_else(|| ExportError::NoWriter(format.name().into()))
    }

    /// Export every component into one document.
    pub fn export(&self, components: &ComponentSet, options: &ExportOptions) -> Result<String> {
        let prepared = prepare(components, options.anatomy_view);
        self.writer(options.format)?.write(&prepared)
    }

    /// Export a single component.
    pub fn export_component(
        &self,
        name: &str,
        metadata: &ComponentMetadata,
        options: &ExportOptions,
    ) -> Result<String> {
        self.export(&ComponentSet::single(name, metadata.clone()), options)
    }

    /// Export one file per component.
    ///
    /// File names come from [`file_stem`] plus the writer's extension;
    /// colliding stems get a numeric suffix.
    pub fn export_files(
        &self,
        components: &ComponentSet,
        options: &ExportOptions,
    ) -> Result<Vec<GeneratedFile>> {
        let writer = self.writer(options.format)?;
        let prepared = prepare(components, options.anatomy_view);
        let mut used: HashMap<String, usize> = HashMap::new();
        let mut files = Vec::with_capacity(prepared.len());

        for (name, metadata) in &prepared {
            let base = file_stem(name);
            let count = used.entry(base.clone()).or_insert(0);
            *count += 1;
            let stem = if *count == 1 {
                base
            } else {
                format!("{base}-{count}")
            };

            let content = writer.write(&ComponentSet::single(name.clone(), metadata.clone()))?;
            let path = format!("{stem}.{}", writer.extension());
            debug!(component = name.as_str(), path = path.as_str(); "Generated file");
            files.push(GeneratedFile { path, content });
        }

        Ok(files)
    }
}

/// Export every component into one document with the built-in writers.
pub fn export(components: &ComponentSet, options: &ExportOptions) -> Result<String> {
    Exporter::new().export(components, options)
}

/// Export a single component with the built-in writers.
pub fn export_component(
    name: &str,
    metadata: &ComponentMetadata,
    options: &ExportOptions,
) -> Result<String> {
    Exporter::new().export_component(name, metadata, options)
}

/// Export one file per component with the built-in writers.
pub fn export_files(
    components: &ComponentSet,
    options: &ExportOptions,
) -> Result<Vec<GeneratedFile>> {
    Exporter::new().export_files(components, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labelled_frame() -> ComponentMetadata {
        ComponentMetadata::new().with_anatomy(Anatomy::from_value(&json!({
            "Frame": { "type": "FRAME", "path": "Frame" },
            "Label": { "type": "TEXT", "path": "Frame > Label" }
        })))
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("tree".parse::<AnatomyView>().unwrap(), AnatomyView::Tree);
        assert_eq!("YAML".parse::<AnatomyView>().unwrap(), AnatomyView::Yaml);
        assert!(matches!(
            "graph".parse::<AnatomyView>(),
            Err(ExportError::UnknownView(_))
        ));
    }

    #[test]
    fn test_default_options() {
        let options = ExportOptions::new();
        assert_eq!(options.format, SchemaFormat::Yaml);
        assert_eq!(options.anatomy_view, AnatomyView::Yaml);

        let options: ExportOptions = serde_json::from_value(json!({ "format": "ts" })).unwrap();
        assert_eq!(options.format, SchemaFormat::TypeScript);
        assert_eq!(options.anatomy_view, AnatomyView::Yaml);
    }

    #[test]
    fn test_tree_view_substitutes_anatomy() {
        let mut metadata = labelled_frame();
        apply_view(&mut metadata, AnatomyView::Tree);
        assert_eq!(
            metadata.anatomy,
            Anatomy::Rendered("Frame\n  type: FRAME\n└─ Label (TEXT)".into())
        );
    }

    #[test]
    fn test_tree_view_leaves_empty_anatomy() {
        let mut metadata = ComponentMetadata::new();
        apply_view(&mut metadata, AnatomyView::Tree);
        assert_eq!(metadata.anatomy, Anatomy::Empty);
    }

    #[test]
    fn test_yaml_view_keeps_structure() {
        let set = ComponentSet::single("Badge", labelled_frame());
        let prepared = prepare(&set, AnatomyView::Yaml);
        assert_eq!(prepared, set);
    }

    #[test]
    fn test_export_tree_view_yaml() {
        let output = export_component(
            "Badge",
            &labelled_frame(),
            &ExportOptions::new().with_anatomy_view(AnatomyView::Tree),
        )
        .unwrap();
        assert_eq!(
            output,
            "Badge:\n  anatomy: |-\n    Frame\n      type: FRAME\n    └─ Label (TEXT)\n"
        );
    }

    #[test]
    fn test_export_tree_view_json() {
        let output = export_component(
            "Badge",
            &labelled_frame(),
            &ExportOptions::new()
                .with_format(SchemaFormat::Json)
                .with_anatomy_view(AnatomyView::Tree),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["Badge"]["anatomy"], "Frame\n  type: FRAME\n└─ Label (TEXT)");
    }

    #[test]
    fn test_file_stems() {
        assert_eq!(file_stem("Primary Button"), "Primary_Button");
        assert_eq!(file_stem("Icon/Arrow-Left"), "Icon_Arrow-Left");
        assert_eq!(file_stem("   "), "component");
    }

    #[test]
    fn test_export_files() {
        let set: ComponentSet = [
            ("Icon/Left".to_string(), labelled_frame()),
            ("Icon Left".to_string(), labelled_frame()),
            ("Card".to_string(), labelled_frame()),
        ]
        .into_iter()
        .collect();

        let files = export_files(&set, &ExportOptions::new().with_format(SchemaFormat::TypeScript))
            .unwrap();
        let paths: Vec<&str> = files.iter().map(|file| file.path.as_str()).collect();
        assert_eq!(paths, ["Icon_Left.ts", "Icon_Left-2.ts", "Card.ts"]);
        assert!(files[1].content.starts_with("export interface IconLeftAnatomy {"));
    }
}
