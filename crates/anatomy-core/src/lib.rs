//! Core types for design component metadata exports.
//!
//! This crate provides the foundational types used across the anatomy crates:
//! - Element records and the [`Anatomy`] union over the accepted wire shapes
//! - Component metadata (props, anatomy, element styles, tokens)
//! - Path utilities
//! - The anatomy normalizer producing canonical element order

pub mod anatomy;
pub mod component;
pub mod errors;
pub mod normalize;
pub mod path;

pub use anatomy::{Anatomy, ElementRecord, FlatElement};
pub use component::{
    ComponentMetadata, ComponentSet, ElementStyle, ElementTokens, PropDescriptor, PropKind,
};
pub use errors::{ModelError, Result};
pub use normalize::{merged_elements, normalize, normalize_value, normalize_variants};
pub use path::PATH_SEPARATOR;
