//! TypeScript interface writer.
//!
//! Emits up to four `export interface` blocks per component:
//! `{Name}Props`, `{Name}Anatomy`, `{Name}Styles` and `{Name}Tokens`.

use super::{finish_document, SchemaWriter};
use crate::error::Result;
use crate::outline::{AnatomyOutline, ComponentOutline};
use crate::scalar::{property_key, string_literal};
use anatomy_core::ComponentSet;

/// Writer for TypeScript interface declarations.
pub struct TypeScriptWriter;

impl TypeScriptWriter {
    /// Create a new TypeScript writer.
    pub fn new() -> Self {
        Self
    }

    /// Interface blocks of one component, empty sections skipped.
    fn component_blocks(&self, outline: &ComponentOutline) -> Vec<String> {
        let name = &outline.type_name;
        let mut blocks = Vec::new();

        if !outline.props.is_empty() {
            let mut lines = vec![format!("export interface {}Props {{", name)];
            for (prop, mapped) in &outline.props {
                lines.push(format!("  {}: {};", property_key(prop), mapped.typescript()));
            }
            lines.push("}".to_string());
            blocks.push(lines.join("\n"));
        }

        match &outline.anatomy {
            AnatomyOutline::None => {}
            AnatomyOutline::Elements(entries) => {
                let mut lines = vec![format!("export interface {}Anatomy {{", name)];
                for entry in entries {
                    let element_type = if entry.element_type.is_empty() {
                        "string".to_string()
                    } else {
                        string_literal(&entry.element_type)
                    };
                    lines.push(format!(
                        "  {}: {}; // {}",
                        property_key(&entry.name),
                        element_type,
                        entry.path_list()
                    ));
                }
                lines.push("}".to_string());
                blocks.push(lines.join("\n"));
            }
            AnatomyOutline::Rendered(text) => {
                let mut lines = vec![format!("// {}Anatomy", name)];
                lines.extend(text.split('\n').map(|line| {
                    if line.is_empty() {
                        "//".to_string()
                    } else {
                        format!("// {}", line)
                    }
                }));
                blocks.push(lines.join("\n"));
            }
        }

        if !outline.styles.is_empty() {
            let mut lines = vec![format!("export interface {}Styles {{", name)];
            for (element, attributes) in &outline.styles {
                lines.push(format!("  {}: {{", property_key(element)));
                for (attribute, style_type) in attributes {
                    lines.push(format!(
                        "    {}?: {};",
                        property_key(attribute),
                        style_type.typescript()
                    ));
                }
                lines.push("  };".to_string());
            }
            lines.push("}".to_string());
            blocks.push(lines.join("\n"));
        }

        if !outline.tokens.is_empty() {
            let mut lines = vec![format!("export interface {}Tokens {{", name)];
            for (element, bindings) in &outline.tokens {
                lines.push(format!("  {}: {{", property_key(element)));
                for (key, reference) in bindings {
                    lines.push(format!(
                        "    {}: {};",
                        property_key(key),
                        string_literal(reference)
                    ));
                }
                lines.push("  };".to_string());
            }
            lines.push("}".to_string());
            blocks.push(lines.join("\n"));
        }

        blocks
    }
}

impl Default for TypeScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaWriter for TypeScriptWriter {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn aliases(&self) -> &[&'static str] {
        &["ts"]
    }

    fn extension(&self) -> &'static str {
        "ts"
    }

    fn write(&self, components: &ComponentSet) -> Result<String> {
        let blocks = components
            .iter()
            .flat_map(|(name, metadata)| self.component_blocks(&ComponentOutline::new(name, metadata)))
            .collect();
        Ok(finish_document(blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_core::{Anatomy, ComponentMetadata, ElementStyle, PropDescriptor, PropKind};
    use serde_json::json;

    fn button() -> ComponentMetadata {
        let mut metadata = ComponentMetadata::new().with_anatomy(Anatomy::from_value(&json!({
            "Frame": { "type": "FRAME", "path": "Frame" },
            "Label": { "type": "TEXT", "path": "Frame > Label" }
        })));
        metadata.add_prop("size", PropDescriptor::enumeration(["sm", "md", "lg"]));
        metadata.add_prop("disabled", PropDescriptor::new(PropKind::Boolean));
        metadata.add_prop("icon", PropDescriptor::new(PropKind::Instance));
        metadata.add_style(
            "Frame",
            ElementStyle::new()
                .with("fills", json!([{ "type": "SOLID" }]))
                .with("cornerRadius", json!(8)),
        );
        metadata.add_token("Frame", "fill", "color/bg/primary");
        metadata
    }

    #[test]
    fn test_all_blocks() {
        let output = TypeScriptWriter::new()
            .write(&ComponentSet::single("Primary Button", button()))
            .unwrap();

        insta::assert_snapshot!(output.trim_end(), @r#"
        export interface PrimaryButtonProps {
          size: "sm" | "md" | "lg";
          disabled: boolean;
          icon: unknown;
        }

        export interface PrimaryButtonAnatomy {
          Frame: "FRAME"; // Frame
          Label: "TEXT"; // Frame > Label
        }

        export interface PrimaryButtonStyles {
          Frame: {
            fills?: Record<string, unknown>[];
            cornerRadius?: number;
          };
        }

        export interface PrimaryButtonTokens {
          Frame: {
            fill: "color/bg/primary";
          };
        }
        "#);
    }

    #[test]
    fn test_repeated_element_lists_every_path() {
        let anatomy = Anatomy::from_value(&json!([
            { "name": "Frame", "type": "FRAME", "path": "Frame" },
            { "name": "Icon", "type": "VECTOR", "path": "Frame > Icon" },
            { "name": "Slot", "type": "FRAME", "path": "Frame > Slot" },
            { "name": "Icon", "type": "VECTOR", "path": "Frame > Slot > Icon" }
        ]));
        let output = TypeScriptWriter::new()
            .write(&ComponentSet::single("Tile", ComponentMetadata::new().with_anatomy(anatomy)))
            .unwrap();
        assert!(output.contains("  Icon: \"VECTOR\"; // Frame > Icon, Frame > Slot > Icon\n"));
    }

    #[test]
    fn test_styles_keep_element_order() {
        let metadata: ComponentMetadata = serde_json::from_value(json!({
            "elementStyles": { "Frame": { "cornerRadius": 4, "fills": null, "width": 10 } }
        }))
        .unwrap();
        let output = TypeScriptWriter::new()
            .write(&ComponentSet::single("Card", metadata))
            .unwrap();
        let corner = output.find("cornerRadius?").unwrap();
        let fills = output.find("fills?").unwrap();
        let width = output.find("width?").unwrap();
        assert!(corner < fills && fills < width);
    }

    #[test]
    fn test_empty_sections_skipped() {
        let mut metadata = ComponentMetadata::new();
        metadata.add_prop("label", PropDescriptor::new(PropKind::String));
        let output = TypeScriptWriter::new()
            .write(&ComponentSet::single("Chip", metadata))
            .unwrap();
        assert_eq!(output, "export interface ChipProps {\n  label: string;\n}\n");
    }

    #[test]
    fn test_rendered_anatomy_as_comment() {
        let metadata =
            ComponentMetadata::new().with_anatomy(Anatomy::Rendered("Frame\n\n└─ Label".into()));
        let output = TypeScriptWriter::new()
            .write(&ComponentSet::single("Card", metadata))
            .unwrap();
        assert_eq!(output, "// CardAnatomy\n// Frame\n//\n// └─ Label\n");
    }

    #[test]
    fn test_quoted_keys_and_untyped_props() {
        let mut metadata = ComponentMetadata::new();
        metadata.add_prop("Show Icon", PropDescriptor::default());
        let output = TypeScriptWriter::new()
            .write(&ComponentSet::single("Tag", metadata))
            .unwrap();
        assert!(output.contains("  \"Show Icon\": any;"));
    }

    #[test]
    fn test_components_separated_by_blank_line() {
        let mut first = ComponentMetadata::new();
        first.add_prop("a", PropDescriptor::new(PropKind::Number));
        let mut second = ComponentMetadata::new();
        second.add_prop("b", PropDescriptor::new(PropKind::Number));
        let set: ComponentSet = [("A".to_string(), first), ("B".to_string(), second)]
            .into_iter()
            .collect();

        let output = TypeScriptWriter::new().write(&set).unwrap();
        assert_eq!(
            output,
            "export interface AProps {\n  a: number;\n}\n\nexport interface BProps {\n  b: number;\n}\n"
        );
    }
}
