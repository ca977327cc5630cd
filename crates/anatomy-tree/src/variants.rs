//! Grouping of variants that share one anatomy structure.

use anatomy_core::ElementRecord;
use indexmap::IndexMap;
use log::debug;

/// The structural identity of one element: name, type and path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuralKey {
    pub name: String,
    pub element_type: String,
    pub path: String,
}

impl From<&ElementRecord> for StructuralKey {
    fn from(record: &ElementRecord) -> Self {
        Self {
            name: record.name.clone(),
            element_type: record.element_type.clone(),
            path: record.path.clone(),
        }
    }
}

/// Structural keys of a canonical sequence, in order.
pub fn structure_of(records: &[ElementRecord]) -> Vec<StructuralKey> {
    records.iter().map(StructuralKey::from).collect()
}

/// Stable textual signature of a structure: a JSON array of
/// `[name, type, path]` triples.
pub fn signature(structure: &[StructuralKey]) -> String {
    let triples: Vec<[&str; 3]> = structure
        .iter()
        .map(|key| [key.name.as_str(), key.element_type.as_str(), key.path.as_str()])
        .collect();
    serde_json::to_string(&triples).unwrap_or_default()
}

/// Variants whose anatomy is structurally identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    /// Signature shared by every member.
    pub signature: String,
    /// Member variant names in first-seen order.
    pub variants: Vec<String>,
    structure: Vec<StructuralKey>,
}

impl VariantGroup {
    fn new(variant: &str, structure: Vec<StructuralKey>) -> Self {
        Self {
            signature: signature(&structure),
            variants: vec![variant.to_string()],
            structure,
        }
    }

    /// The first member, whose anatomy stands in for the group.
    pub fn representative(&self) -> &str {
        self.variants.first().map(String::as_str).unwrap_or_default()
    }

    /// Shared structure.
    pub fn structure(&self) -> &[StructuralKey] {
        &self.structure
    }

    /// Whether `variant` belongs to this group.
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.iter().any(|member| member == variant)
    }

    /// Number of member variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Groups in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantGroups {
    groups: Vec<VariantGroup>,
}

impl VariantGroups {
    /// Whether every variant shares one structure.
    pub fn is_uniform(&self) -> bool {
        self.groups.len() == 1
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, VariantGroup> {
        self.groups.iter()
    }

    /// The group a variant belongs to.
    pub fn group_of(&self, variant: &str) -> Option<&VariantGroup> {
        self.groups.iter().find(|group| group.contains(variant))
    }

    /// Groups as a slice.
    pub fn as_slice(&self) -> &[VariantGroup] {
        &self.groups
    }
}

impl<'a> IntoIterator for &'a VariantGroups {
    type Item = &'a VariantGroup;
    type IntoIter = std::slice::Iter<'a, VariantGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition variants into groups of identical structure.
///
/// Each variant is compared against the first member of every existing group
/// and joins the first match; otherwise it opens a new group. Group order and
/// member order follow the input order.
pub fn group_variants(variants: &IndexMap<String, Vec<ElementRecord>>) -> VariantGroups {
    let mut groups: Vec<VariantGroup> = Vec::new();

    for (variant, records) in variants {
        let structure = structure_of(records);
        match groups.iter_mut().find(|group| group.structure == structure) {
            Some(group) => group.variants.push(variant.clone()),
            None => {
                debug!(
                    variant = variant.as_str(),
                    elements = structure.len();
                    "New anatomy structure"
                );
                groups.push(VariantGroup::new(variant, structure));
            }
        }
    }

    VariantGroups { groups }
}
