//! Component metadata records.

use crate::anatomy::Anatomy;
use crate::errors::{json_type_name, ModelError, Result};
use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Declared kind of a component property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Boolean,
    String,
    Enum,
    Instance,
    Number,
    /// Missing or unrecognized kind.
    Unspecified,
}

impl PropKind {
    /// Parse a declared kind, accepting the design tool's native names.
    pub fn parse(declared: &str) -> Self {
        match declared.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" => Self::Boolean,
            "string" | "text" => Self::String,
            "enum" | "variant" => Self::Enum,
            "instance" | "instance_swap" => Self::Instance,
            "number" | "float" | "int" | "integer" => Self::Number,
            _ => Self::Unspecified,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Enum => "enum",
            Self::Instance => "instance",
            Self::Number => "number",
            Self::Unspecified => "unspecified",
        }
    }
}

impl std::fmt::Display for PropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of one component property.
///
/// Fields are kept verbatim and in input order so interchange dumps reproduce
/// the input; [`PropDescriptor::kind`] and [`PropDescriptor::enum_values`]
/// interpret them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropDescriptor {
    fields: IndexMap<String, Value>,
}

impl PropDescriptor {
    /// Create a descriptor with a declared kind.
    pub fn new(kind: PropKind) -> Self {
        Self::default().with("type", Value::from(kind.as_str()))
    }

    /// Create an enum descriptor with its allowed values.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(|value| Value::String(value.into())).collect();
        Self::new(PropKind::Enum).with("values", Value::Array(values))
    }

    /// Builder form setting one descriptor field.
    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// Raw field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Declared kind text, as supplied.
    pub fn declared(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    /// Interpreted kind.
    pub fn kind(&self) -> PropKind {
        self.declared().map_or(PropKind::Unspecified, PropKind::parse)
    }

    /// Text of the allowed values, empty when none are listed.
    ///
    /// Numbers and booleans are listed by their JSON text; other items are
    /// skipped.
    pub fn enum_values(&self) -> Vec<String> {
        let Some(Value::Array(values)) = self.get("values") else {
            return Vec::new();
        };
        values
            .iter()
            .filter_map(|value| match value {
                Value::String(text) => Some(text.clone()),
                Value::Number(number) => Some(number.to_string()),
                Value::Bool(flag) => Some(flag.to_string()),
                _ => None,
            })
            .collect()
    }
}

/// Style attributes captured for one element, in input order.
///
/// Values are kept as supplied, `null` included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementStyle {
    attributes: IndexMap<String, Value>,
}

impl ElementStyle {
    /// Create an empty style record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute by its wire name. A replaced attribute keeps its position.
    pub fn set(&mut self, attribute: impl Into<String>, value: Value) {
        self.attributes.insert(attribute.into(), value);
    }

    /// Builder form of [`ElementStyle::set`].
    pub fn with(mut self, attribute: impl Into<String>, value: Value) -> Self {
        self.set(attribute, value);
        self
    }

    /// Look up one attribute.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    /// Attributes in input order.
    pub fn present(&self) -> Vec<(&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect()
    }

    /// Whether no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Token bindings of one element: token key to token reference.
pub type ElementTokens = IndexMap<String, String>;

/// Full metadata record for one component.
///
/// Dumps write top-level fields in the order they were read. Sections added
/// after parsing follow, and only when they hold data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentMetadata {
    /// Property name to descriptor.
    pub props: IndexMap<String, PropDescriptor>,
    /// Child-element structure.
    pub anatomy: Anatomy,
    /// Element name to style attributes.
    pub element_styles: IndexMap<String, ElementStyle>,
    /// Element name to token bindings.
    pub tokens: IndexMap<String, ElementTokens>,
    /// Other top-level fields (name, description, ...).
    pub extra: IndexMap<String, Value>,
    /// Top-level keys as read.
    key_order: Vec<String>,
}

/// Top-level keys that identify a bare component record.
const SECTION_KEYS: [&str; 4] = ["props", "anatomy", "elementStyles", "tokens"];

impl<'de> Deserialize<'de> for ComponentMetadata {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(D::Error::custom)
    }
}

impl Serialize for ComponentMetadata {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let keys = self.output_keys();
        let mut map = serializer.serialize_map(Some(keys.len()))?;
        for key in keys {
            match key {
                "props" => map.serialize_entry(key, &self.props)?,
                "anatomy" => map.serialize_entry(key, &self.anatomy)?,
                "elementStyles" => map.serialize_entry(key, &self.element_styles)?,
                "tokens" => map.serialize_entry(key, &self.tokens)?,
                _ => {
                    if let Some(value) = self.extra.get(key) {
                        map.serialize_entry(key, value)?;
                    }
                }
            }
        }
        map.end()
    }
}

/// Decode one section; `null` reads as an empty section.
fn section<T>(value: Value) -> serde_json::Result<T>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        Ok(T::default())
    } else {
        serde_json::from_value(value)
    }
}

impl ComponentMetadata {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    pub fn add_prop(&mut self, name: impl Into<String>, descriptor: PropDescriptor) {
        self.props.insert(name.into(), descriptor);
    }

    /// Add style attributes for an element.
    pub fn add_style(&mut self, element: impl Into<String>, style: ElementStyle) {
        self.element_styles.insert(element.into(), style);
    }

    /// Bind a token on an element.
    pub fn add_token(
        &mut self,
        element: impl Into<String>,
        key: impl Into<String>,
        reference: impl Into<String>,
    ) {
        self.tokens
            .entry(element.into())
            .or_default()
            .insert(key.into(), reference.into());
    }

    /// Builder form setting the anatomy.
    pub fn with_anatomy(mut self, anatomy: impl Into<Anatomy>) -> Self {
        self.anatomy = anatomy.into();
        self
    }

    /// Whether every section is empty.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
            && self.anatomy.is_empty()
            && self.element_styles.is_empty()
            && self.tokens.is_empty()
    }

    fn from_map(map: Map<String, Value>) -> serde_json::Result<Self> {
        let mut metadata = Self {
            key_order: map.keys().cloned().collect(),
            ..Self::default()
        };
        for (key, value) in map {
            match key.as_str() {
                "props" => metadata.props = section(value)?,
                "anatomy" => metadata.anatomy = Anatomy::from_value(&value),
                "elementStyles" => metadata.element_styles = section(value)?,
                "tokens" => metadata.tokens = section(value)?,
                _ => {
                    metadata.extra.insert(key, value);
                }
            }
        }
        Ok(metadata)
    }

    /// Whether a top-level key belongs in a dump.
    fn has_key(&self, key: &str) -> bool {
        let read = self.key_order.iter().any(|seen| seen == key);
        match key {
            "props" => read || !self.props.is_empty(),
            "anatomy" => read || !self.anatomy.is_absent(),
            "elementStyles" => read || !self.element_styles.is_empty(),
            "tokens" => read || !self.tokens.is_empty(),
            _ => self.extra.contains_key(key),
        }
    }

    /// Keys to dump: those read, in input order, then any added since.
    fn output_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .key_order
            .iter()
            .map(String::as_str)
            .filter(|key| self.has_key(key))
            .collect();
        let added = SECTION_KEYS
            .iter()
            .copied()
            .chain(self.extra.keys().map(String::as_str));
        for key in added {
            if self.has_key(key) && !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// `name` field of the record, if it carries one.
    pub fn declared_name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// Ordered collection of components keyed by component name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentSet {
    components: IndexMap<String, ComponentMetadata>,
}

impl ComponentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing one component.
    pub fn single(name: impl Into<String>, metadata: ComponentMetadata) -> Self {
        let mut set = Self::new();
        set.insert(name, metadata);
        set
    }

    /// Add or replace a component.
    pub fn insert(&mut self, name: impl Into<String>, metadata: ComponentMetadata) {
        self.components.insert(name.into(), metadata);
    }

    /// Look up a component by name.
    pub fn get(&self, name: &str) -> Option<&ComponentMetadata> {
        self.components.get(name)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ComponentMetadata> {
        self.components.get_mut(name)
    }

    /// Iterate components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ComponentMetadata)> {
        self.components.iter()
    }

    /// Iterate components mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut ComponentMetadata)> {
        self.components.iter_mut()
    }

    /// Component names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Parse a metadata document.
    ///
    /// The document is either a mapping of component name to record, or a
    /// single bare record. A bare record is named by its `name` field, or by
    /// `fallback_name` when it has none.
    pub fn from_json_str(source: &str, fallback_name: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value, fallback_name)
    }

    /// Build a set from an already parsed document. See [`ComponentSet::from_json_str`].
    pub fn from_value(value: Value, fallback_name: &str) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::NotAnObject {
                found: json_type_name(&value),
            });
        };

        if SECTION_KEYS.iter().any(|key| map.contains_key(*key)) {
            let metadata: ComponentMetadata = serde_json::from_value(Value::Object(map))?;
            let name = metadata
                .declared_name()
                .unwrap_or(fallback_name)
                .to_string();
            return Ok(Self::single(name, metadata));
        }

        let components = map
            .into_iter()
            .map(|(name, record)| -> Result<(String, ComponentMetadata)> {
                Ok((name, serde_json::from_value(record)?))
            })
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(Self { components })
    }
}

impl FromIterator<(String, ComponentMetadata)> for ComponentSet {
    fn from_iter<T: IntoIterator<Item = (String, ComponentMetadata)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = (&'a String, &'a ComponentMetadata);
    type IntoIter = indexmap::map::Iter<'a, String, ComponentMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
