//! Anatomy tree construction.
//!
//! The forest is built in a single pass over canonical records: each record's
//! parent must already have been seen. Records whose parent path was never
//! seen are kept as extra roots instead of being dropped.

use anatomy_core::{normalize, Anatomy, ElementRecord};
use log::debug;
use std::collections::HashMap;

/// A node in the anatomy tree. Children are owned exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The element this node stands for.
    pub record: ElementRecord,
    /// Child nodes in canonical order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node.
    pub fn new(record: ElementRecord) -> Self {
        Self {
            record,
            children: Vec::new(),
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Element type tag.
    pub fn element_type(&self) -> &str {
        &self.record.element_type
    }

    /// Canonical path.
    pub fn path(&self) -> &str {
        &self.record.path
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        DepthFirst::new(&self.children).count()
    }
}

/// Ordered roots of an anatomy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    /// Root nodes in canonical order.
    pub roots: Vec<TreeNode>,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the forest of a single-shape anatomy.
    pub fn from_anatomy(anatomy: &Anatomy) -> Self {
        build_forest(normalize(anatomy))
    }

    /// Whether there are no roots.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels; zero for an empty forest.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.roots.iter().map(|root| (root, 1)).collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Pre-order depth-first traversal.
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst::new(&self.roots)
    }
}

impl From<Vec<ElementRecord>> for Forest {
    fn from(records: Vec<ElementRecord>) -> Self {
        build_forest(records)
    }
}

/// Pre-order depth-first iterator over tree nodes.
pub struct DepthFirst<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> DepthFirst<'a> {
    fn new(nodes: &'a [TreeNode]) -> Self {
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Build a forest from canonical records.
///
/// Every record becomes exactly one node. A parent is resolved against the
/// most recent earlier record with that path, so duplicate-named siblings
/// stay distinct nodes and no node can be its own ancestor.
pub fn build_forest(records: Vec<ElementRecord>) -> Forest {
    let parents = resolve_parents(&records);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();
    for (index, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent) => children[*parent].push(index),
            None => roots.push(index),
        }
    }

    // Parents always precede children, so building back to front finds every
    // child already assembled.
    let mut built: Vec<Option<TreeNode>> = (0..records.len()).map(|_| None).collect();
    for (index, record) in records.into_iter().enumerate().rev() {
        let kids = children[index]
            .iter()
            .filter_map(|child| built[*child].take())
            .collect();
        built[index] = Some(TreeNode {
            record,
            children: kids,
        });
    }

    Forest {
        roots: roots
            .into_iter()
            .filter_map(|root| built[root].take())
            .collect(),
    }
}

/// Index of each record's parent, `None` for roots and orphans.
fn resolve_parents(records: &[ElementRecord]) -> Vec<Option<usize>> {
    let mut by_path: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let parent = if record.parent_path.is_empty() {
                None
            } else {
                let found = by_path.get(record.parent_path.as_str()).copied();
                if found.is_none() {
                    debug!(
                        path = record.path.as_str(),
                        parent_path = record.parent_path.as_str();
                        "Parent not found, keeping element as a root"
                    );
                }
                found
            };
            by_path.insert(record.path.as_str(), index);
            parent
        })
        .collect()
}
