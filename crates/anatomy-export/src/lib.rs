//! Schema export for design component metadata.
//!
//! Turns a [`ComponentSet`](anatomy_core::ComponentSet) into one of four
//! textual schema languages:
//! - YAML nested text
//! - JSON interchange
//! - TypeScript interface declarations
//! - JSDoc typedef blocks
//!
//! All typed outputs share one property type mapping ([`MappedType`]).
//!
//! # Example
//!
//! ```
//! use anatomy_core::{ComponentMetadata, ComponentSet, PropDescriptor};
//! use anatomy_export::{export, ExportOptions, SchemaFormat};
//!
//! let mut button = ComponentMetadata::new();
//! button.add_prop("size", PropDescriptor::enumeration(["sm", "md", "lg"]));
//!
//! let options = ExportOptions::new().with_format(SchemaFormat::TypeScript);
//! let output = export(&ComponentSet::single("Button", button), &options).unwrap();
//! assert!(output.contains(r#"size: "sm" | "md" | "lg";"#));
//! ```

pub mod error;
pub mod formats;
pub mod outline;
pub mod pipeline;
pub mod registry;
pub mod scalar;
pub mod types;

pub use error::{ExportError, Result};
pub use formats::{JsDocWriter, JsonWriter, SchemaFormat, SchemaWriter, TypeScriptWriter, YamlWriter};
pub use outline::ComponentOutline;
pub use pipeline::{
    export, export_component, export_files, AnatomyView, ExportOptions, Exporter, GeneratedFile,
};
pub use registry::WriterRegistry;
pub use types::{MappedType, StyleType};
