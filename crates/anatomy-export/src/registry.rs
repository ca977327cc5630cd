//! Writer registry.

use crate::error::{ExportError, Result};
use crate::formats::{JsDocWriter, JsonWriter, SchemaWriter, TypeScriptWriter, YamlWriter};
use anatomy_core::ComponentSet;
use indexmap::IndexMap;
use log::debug;

/// Registry of schema writers.
///
/// Writers are looked up by name or alias, case-insensitively. Registering a
/// writer under an existing name replaces the earlier one.
pub struct WriterRegistry {
    writers: IndexMap<String, Box<dyn SchemaWriter>>,
    aliases: IndexMap<String, String>,
    extension_to_writer: IndexMap<String, String>,
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl WriterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            writers: IndexMap::new(),
            aliases: IndexMap::new(),
            extension_to_writer: IndexMap::new(),
        }
    }

    /// Create a registry with the four built-in writers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(YamlWriter::new());
        registry.register(JsonWriter::new());
        registry.register(TypeScriptWriter::new());
        registry.register(JsDocWriter::new());
        registry
    }

    /// Register a writer.
    pub fn register<W: SchemaWriter + 'static>(&mut self, writer: W) {
        let name = writer.name().to_lowercase();

        for alias in writer.aliases() {
            self.aliases.insert(alias.to_lowercase(), name.clone());
        }
        self.extension_to_writer
            .insert(writer.extension().to_lowercase(), name.clone());

        self.writers.insert(name, Box::new(writer));
    }

    /// Get a writer by name or alias.
    pub fn get(&self, format: &str) -> Option<&dyn SchemaWriter> {
        let key = format.trim().to_lowercase();
        let name = self.aliases.get(&key).unwrap_or(&key);
        self.writers.get(name).map(|writer| writer.as_ref())
    }

    /// Get a writer by file extension.
    pub fn writer_for_extension(&self, ext: &str) -> Option<&dyn SchemaWriter> {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        let format = self.extension_to_writer.get(&ext_lower)?;
        self.get(format)
    }

    /// Registered format names, in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.writers.keys().map(String::as_str)
    }

    /// Write components in the named format.
    pub fn write(&self, components: &ComponentSet, format: &str) -> Result<String> {
        let writer = self
            .get(format)
            .ok_or_else(|| ExportError::NoWriter(format.into()))?;
        debug!(format = writer.name(), components = components.len(); "Writing components");
        writer.write(components)
    }
}
