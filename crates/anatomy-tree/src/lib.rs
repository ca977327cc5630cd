//! Anatomy trees for component metadata.
//!
//! Builds a forest from canonical element records, groups variants that share
//! one structure, and renders both as box-drawing text.
//!
//! # Example
//!
//! ```
//! use anatomy_core::Anatomy;
//! use anatomy_tree::render_anatomy;
//! use serde_json::json;
//!
//! let anatomy = Anatomy::from_value(&json!({
//!     "Frame": { "type": "FRAME", "path": "Frame" },
//!     "Label": { "type": "TEXT", "path": "Frame > Label" }
//! }));
//! assert_eq!(render_anatomy(&anatomy), "Frame\n  type: FRAME\n└─ Label (TEXT)");
//! ```

pub mod render;
pub mod tree;
pub mod variants;

pub use render::{render_anatomy, render_forest, render_groups, render_variants};
pub use tree::{build_forest, DepthFirst, Forest, TreeNode};
pub use variants::{group_variants, StructuralKey, VariantGroup, VariantGroups};
