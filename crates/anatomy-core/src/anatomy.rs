//! Anatomy data: the child-element structure of a component.
//!
//! The extractor delivers anatomy in one of two wire shapes, a flat mapping
//! keyed by element name or an ordered sequence of records, and multi-shape
//! components wrap either shape in a mapping keyed by variant name.
//! [`Anatomy`] captures all of them in one tagged union so the rest of the
//! pipeline never inspects raw JSON.

use crate::path::{self, path_from_value};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One element of a component's anatomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    /// Element name. Not unique across the structure.
    pub name: String,
    /// Element kind, e.g. `FRAME` or `TEXT`.
    #[serde(rename = "type", default)]
    pub element_type: String,
    /// Canonical path from the root, joined by `" > "`.
    pub path: String,
    /// Path of the parent element; empty for roots.
    #[serde(default)]
    pub parent_path: String,
    /// Any other attributes carried by the record.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ElementRecord {
    /// Create a record, deriving the parent path from `path`.
    pub fn new(
        name: impl Into<String>,
        element_type: impl Into<String>,
        path: impl AsRef<str>,
    ) -> Self {
        let path = path::normalize_path(path.as_ref());
        Self {
            name: name.into(),
            element_type: element_type.into(),
            parent_path: path::parent_path(&path),
            path,
            extra: IndexMap::new(),
        }
    }

    /// Override the parent path.
    pub fn with_parent(mut self, parent_path: impl AsRef<str>) -> Self {
        self.parent_path = path::normalize_path(parent_path.as_ref());
        self
    }

    /// Whether this record has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_path.is_empty()
    }

    /// Number of path segments.
    pub fn depth(&self) -> usize {
        path::depth(&self.path)
    }

    /// Decode one item of an explicit sequence.
    ///
    /// Non-object items yield `None`. A missing `path` falls back to the name,
    /// a missing `parentPath` is derived from the path.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let path = object.get("path").and_then(path_from_value).unwrap_or_default();
        let name = match object.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => path::split_path(&path).last().cloned().unwrap_or_default(),
        };
        let path = if path.is_empty() { name.clone() } else { path };
        let parent_path = match object.get("parentPath") {
            Some(parent) => path_from_value(parent).unwrap_or_default(),
            None => path::parent_path(&path),
        };

        Some(Self {
            name,
            element_type: string_field(object, "type"),
            path,
            parent_path,
            extra: extra_fields(object, &["name", "type", "path", "parentPath"]),
        })
    }
}

/// Value of a flat-mapping entry; the element name is the mapping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatElement {
    /// Element kind.
    #[serde(rename = "type", default)]
    pub element_type: String,
    /// Chevron-joined path.
    #[serde(default)]
    pub path: String,
    /// Any other attributes carried by the entry.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl FlatElement {
    /// Create an entry.
    pub fn new(element_type: impl Into<String>, path: impl AsRef<str>) -> Self {
        Self {
            element_type: element_type.into(),
            path: path::normalize_path(path.as_ref()),
            extra: IndexMap::new(),
        }
    }

    fn from_value(name: &str, value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::new("", name);
        };
        let path = object
            .get("path")
            .and_then(path_from_value)
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| name.to_string());

        Self {
            element_type: string_field(object, "type"),
            path,
            extra: extra_fields(object, &["type", "path"]),
        }
    }
}

/// Anatomy of a component in any accepted shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Anatomy {
    /// No anatomy, or anatomy that is not object-like.
    #[default]
    Empty,
    /// Legacy shape: element name to `{ type, path }`.
    Flat(IndexMap<String, FlatElement>),
    /// Ordered records in document order.
    Sequence(Vec<ElementRecord>),
    /// Variant name to that variant's anatomy (flat or sequence).
    Variants(IndexMap<String, Anatomy>),
    /// Anatomy already rendered as tree text.
    Rendered(String),
}

impl Anatomy {
    /// Classify a raw JSON value.
    ///
    /// Never fails: anything unrecognized becomes [`Anatomy::Empty`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Rendered(text.clone()),
            Value::Array(items) => {
                Self::Sequence(items.iter().filter_map(ElementRecord::from_value).collect())
            }
            Value::Object(map) if map.is_empty() => Self::Empty,
            Value::Object(map) if !is_variant_mapping(map) => Self::Flat(
                map.iter()
                    .map(|(name, entry)| (name.clone(), FlatElement::from_value(name, entry)))
                    .collect(),
            ),
            Value::Object(map) => Self::Variants(
                map.iter()
                    .map(|(variant, anatomy)| {
                        let anatomy = match Self::from_value(anatomy) {
                            shape @ (Self::Flat(_) | Self::Sequence(_)) => shape,
                            _ => {
                                debug!(variant = variant.as_str(); "Variant anatomy has no element shape");
                                Self::Empty
                            }
                        };
                        (variant.clone(), anatomy)
                    })
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::Empty,
        }
    }

    /// Whether there are no elements to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Flat(entries) => entries.is_empty(),
            Self::Sequence(records) => records.is_empty(),
            Self::Variants(variants) => variants.values().all(Anatomy::is_empty),
            Self::Rendered(text) => text.is_empty(),
        }
    }

    /// Whether the anatomy field was absent altogether.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the anatomy has per-variant shapes.
    pub fn is_multi_variant(&self) -> bool {
        matches!(self, Self::Variants(_))
    }

    /// Convert back to JSON.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl<'de> Deserialize<'de> for Anatomy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl From<Vec<ElementRecord>> for Anatomy {
    fn from(records: Vec<ElementRecord>) -> Self {
        Self::Sequence(records)
    }
}

/// An entry is element-like if it carries a string `type` or a usable `path`.
fn looks_like_element(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let has_type = object.get("type").map_or(false, Value::is_string);
    let has_path = object
        .get("path")
        .map_or(false, |path| path.is_string() || path.is_array());
    has_type || has_path
}

/// A mapping is per-variant only when none of its values is an element entry
/// and at least one holds a whole element structure. Malformed entries in an
/// otherwise flat mapping leave it flat.
fn is_variant_mapping(map: &Map<String, Value>) -> bool {
    !map.values().any(looks_like_element) && map.values().any(looks_like_structure)
}

/// An element sequence, or a mapping with at least one element entry.
fn looks_like_structure(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(entries) => entries.values().any(looks_like_element),
        _ => false,
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn extra_fields(object: &Map<String, Value>, known: &[&str]) -> IndexMap<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
