//! Box-drawing tree rendering.
//!
//! ```text
//! Button
//!   type: COMPONENT
//! ├─ Content (FRAME)
//! │  └─ Label (TEXT)
//! └─ Badge (FRAME)
//! ```

use crate::tree::{build_forest, Forest, TreeNode};
use crate::variants::{group_variants, VariantGroup, VariantGroups};
use anatomy_core::{normalize, normalize_variants, Anatomy, ElementRecord};
use indexmap::IndexMap;

/// Connector for a child that has later siblings.
pub const BRANCH: &str = "├─ ";
/// Connector for the last child.
pub const LAST_BRANCH: &str = "└─ ";
/// Prefix extension below a child that has later siblings.
pub const CONTINUATION: &str = "│  ";
/// Prefix extension below the last child.
pub const GAP: &str = "   ";
/// Glyph of the rule between variant groups.
pub const RULE_CHAR: char = '─';
/// Width of the rule between variant groups.
pub const RULE_WIDTH: usize = 60;

/// Render every root, separated by one blank line.
pub fn render_forest(forest: &Forest) -> String {
    forest
        .roots
        .iter()
        .map(render_root)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_root(root: &TreeNode) -> String {
    let mut lines = vec![root.name().to_string()];
    if !root.element_type().is_empty() {
        lines.push(format!("  type: {}", root.element_type()));
    }
    render_children(&root.children, "", &mut lines);
    lines.join("\n")
}

fn render_children(children: &[TreeNode], prefix: &str, lines: &mut Vec<String>) {
    let last = children.len().saturating_sub(1);
    for (index, child) in children.iter().enumerate() {
        let is_last = index == last;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        let mut line = format!("{prefix}{connector}{}", child.name());
        if !child.element_type().is_empty() {
            line.push_str(&format!(" ({})", child.element_type()));
        }
        lines.push(line);

        let extension = if is_last { GAP } else { CONTINUATION };
        render_children(&child.children, &format!("{prefix}{extension}"), lines);
    }
}

/// Header line naming a group's members.
pub fn group_header(group: &VariantGroup) -> String {
    match group.variants.as_slice() {
        [single] => format!("[Variant: {single}]"),
        members => format!("[Variants: {}]", members.join(", ")),
    }
}

/// Horizontal rule between groups.
pub fn rule() -> String {
    std::iter::repeat(RULE_CHAR).take(RULE_WIDTH).collect()
}

/// Render grouped variants.
///
/// A uniform grouping renders its one tree without a header. Otherwise each
/// group gets a header line and the tree of its first member, and groups are
/// separated by a horizontal rule.
pub fn render_groups(
    groups: &VariantGroups,
    variants: &IndexMap<String, Vec<ElementRecord>>,
) -> String {
    let tree_of = |group: &VariantGroup| {
        let records = variants
            .get(group.representative())
            .cloned()
            .unwrap_or_default();
        render_forest(&build_forest(records))
    };

    if groups.is_uniform() {
        return groups.iter().map(tree_of).collect();
    }

    let separator = format!("\n\n{}\n", rule());
    groups
        .iter()
        .map(|group| {
            let tree = tree_of(group);
            let header = group_header(group);
            if tree.is_empty() {
                header
            } else {
                format!("{header}\n\n{tree}")
            }
        })
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Render per-variant sequences, grouping identical structures.
pub fn render_variants(variants: &IndexMap<String, Vec<ElementRecord>>) -> String {
    render_groups(&group_variants(variants), variants)
}

/// Render any anatomy as tree text.
///
/// Absent anatomy renders as an empty string and already-rendered text is
/// returned unchanged.
pub fn render_anatomy(anatomy: &Anatomy) -> String {
    match anatomy {
        Anatomy::Empty => String::new(),
        Anatomy::Rendered(text) => text.clone(),
        Anatomy::Flat(_) | Anatomy::Sequence(_) => render_forest(&build_forest(normalize(anatomy))),
        Anatomy::Variants(_) => render_variants(&normalize_variants(anatomy)),
    }
}
