//! Interchange (JSON) writer.

use super::SchemaWriter;
use crate::error::Result;
use anatomy_core::ComponentSet;

/// Writer for the interchange format: a direct structural dump with
/// two-space pretty printing.
pub struct JsonWriter;

impl JsonWriter {
    /// Create a new JSON writer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaWriter for JsonWriter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, components: &ComponentSet) -> Result<String> {
        let mut output = serde_json::to_string_pretty(components)?;
        output.push('\n');
        Ok(output)
    }
}
