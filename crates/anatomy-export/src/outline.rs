//! Typed outline of one component.
//!
//! The TypeScript and JSDoc writers render the same four blocks. The outline
//! resolves names, types and ordering once so the writers only handle syntax.

use crate::types::{MappedType, StyleType};
use anatomy_core::{merged_elements, Anatomy, ComponentMetadata};
use indexmap::IndexMap;

/// Everything a typed writer needs to know about a component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentOutline {
    /// Component name with whitespace stripped.
    pub type_name: String,
    /// Property name and mapped type, in declaration order.
    pub props: Vec<(String, MappedType)>,
    /// Anatomy entries.
    pub anatomy: AnatomyOutline,
    /// Element name and its present style attributes.
    pub styles: Vec<(String, Vec<(String, StyleType)>)>,
    /// Element name and its token bindings.
    pub tokens: Vec<(String, Vec<(String, String)>)>,
}

/// Anatomy part of an outline.
#[derive(Debug, Clone, PartialEq)]
pub enum AnatomyOutline {
    /// No anatomy block.
    None,
    /// One entry per distinct element name, in first-seen order.
    Elements(Vec<AnatomyEntry>),
    /// Tree text kept as a comment block.
    Rendered(String),
}

/// One field of the anatomy block.
///
/// The type is taken from the first element seen under the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnatomyEntry {
    pub name: String,
    pub element_type: String,
    /// Every path the name occurs at.
    pub paths: Vec<String>,
}

impl AnatomyEntry {
    /// Paths joined for a one-line description.
    pub fn path_list(&self) -> String {
        self.paths.join(", ")
    }
}

impl ComponentOutline {
    /// Build the outline of a component.
    pub fn new(name: &str, metadata: &ComponentMetadata) -> Self {
        Self {
            type_name: type_name(name),
            props: metadata
                .props
                .iter()
                .map(|(prop, descriptor)| (prop.clone(), MappedType::of(descriptor)))
                .collect(),
            anatomy: AnatomyOutline::new(&metadata.anatomy),
            styles: metadata
                .element_styles
                .iter()
                .filter_map(|(element, style)| {
                    let attributes: Vec<(String, StyleType)> = style
                        .present()
                        .into_iter()
                        .map(|(attribute, value)| (attribute.to_string(), StyleType::infer(value)))
                        .collect();
                    (!attributes.is_empty()).then(|| (element.clone(), attributes))
                })
                .collect(),
            tokens: metadata
                .tokens
                .iter()
                .filter(|(_, bindings)| !bindings.is_empty())
                .map(|(element, bindings)| {
                    let bindings = bindings
                        .iter()
                        .map(|(key, reference)| (key.clone(), reference.clone()))
                        .collect();
                    (element.clone(), bindings)
                })
                .collect(),
        }
    }

    /// Whether no block would be written.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
            && self.anatomy == AnatomyOutline::None
            && self.styles.is_empty()
            && self.tokens.is_empty()
    }
}

impl AnatomyOutline {
    fn new(anatomy: &Anatomy) -> Self {
        match anatomy {
            Anatomy::Rendered(text) if text.is_empty() => Self::None,
            Anatomy::Rendered(text) => Self::Rendered(text.clone()),
            _ => {
                let mut entries: IndexMap<String, AnatomyEntry> = IndexMap::new();
                for record in merged_elements(anatomy) {
                    entries
                        .entry(record.name.clone())
                        .or_insert_with(|| AnatomyEntry {
                            name: record.name,
                            element_type: record.element_type,
                            paths: Vec::new(),
                        })
                        .paths
                        .push(record.path);
                }
                if entries.is_empty() {
                    Self::None
                } else {
                    Self::Elements(entries.into_values().collect())
                }
            }
        }
    }
}

/// Component name as used in block names: whitespace removed.
pub fn type_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}
