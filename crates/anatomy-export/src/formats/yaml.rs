//! Nested-text (YAML) writer.
//!
//! A recursive block writer over `serde_json::Value`: objects become indented
//! mappings, arrays become `- ` sequences, and leaves go through
//! [`crate::scalar`]. Multi-line strings that survive a literal block scalar
//! are written as `|-` blocks so rendered trees stay readable.

use super::SchemaWriter;
use crate::error::Result;
use crate::scalar::{yaml_scalar, yaml_string};
use anatomy_core::ComponentSet;
use serde_json::{Map, Value};

/// Spaces per nesting level.
const INDENT: usize = 2;

/// Writer for the nested-text format.
pub struct YamlWriter;

impl YamlWriter {
    /// Create a new YAML writer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaWriter for YamlWriter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn aliases(&self) -> &[&'static str] {
        &["yml"]
    }

    fn extension(&self) -> &'static str {
        "yaml"
    }

    fn write(&self, components: &ComponentSet) -> Result<String> {
        let value = serde_json::to_value(components)?;
        Ok(write_yaml(&value))
    }
}

/// Serialize a value as block YAML ending in a newline.
pub fn write_yaml(value: &Value) -> String {
    let mut lines = Vec::new();
    match value {
        Value::String(text) if fits_block_scalar(text) => {
            lines.push("|-".to_string());
            push_block(text, INDENT, &mut lines);
        }
        _ if is_block(value) => write_block(value, 0, &mut lines),
        scalar => lines.push(yaml_scalar(scalar)),
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Non-empty collections are written as blocks, everything else inline.
fn is_block(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn write_block(value: &Value, indent: usize, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => write_mapping(map, indent, lines),
        Value::Array(items) => write_sequence(items, indent, lines),
        _ => {}
    }
}

fn write_mapping(map: &Map<String, Value>, indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        let key = yaml_string(key);
        match value {
            _ if is_block(value) => {
                lines.push(format!("{pad}{key}:"));
                write_block(value, indent + INDENT, lines);
            }
            Value::String(text) if fits_block_scalar(text) => {
                lines.push(format!("{pad}{key}: |-"));
                push_block(text, indent + INDENT, lines);
            }
            scalar => lines.push(format!("{pad}{key}: {}", yaml_scalar(scalar))),
        }
    }
}

fn write_sequence(items: &[Value], indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    for item in items {
        match item {
            _ if is_block(item) => {
                // Write the item one level deeper, then put the marker on its
                // first line.
                let first = lines.len();
                write_block(item, indent + INDENT, lines);
                if let Some(line) = lines.get_mut(first) {
                    line.replace_range(..indent + INDENT, &format!("{pad}- "));
                }
            }
            Value::String(text) if fits_block_scalar(text) => {
                lines.push(format!("{pad}- |-"));
                push_block(text, indent + INDENT, lines);
            }
            scalar => lines.push(format!("{pad}- {}", yaml_scalar(scalar))),
        }
    }
}

/// Whether a string reads back exactly from a `|-` literal block.
fn fits_block_scalar(text: &str) -> bool {
    text.contains('\n')
        && !text.ends_with('\n')
        && !text.starts_with(&[' ', '\t', '\n'][..])
        && text.chars().all(|c| c == '\n' || c == '\t' || !c.is_control())
}

fn push_block(text: &str, indent: usize, lines: &mut Vec<String>) {
    let pad = " ".repeat(indent);
    for line in text.split('\n') {
        if line.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{pad}{line}"));
        }
    }
}
