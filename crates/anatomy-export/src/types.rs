//! The shared type mapping.
//!
//! Every typed writer goes through [`MappedType`] for props and [`StyleType`]
//! for style attributes, so the formats can never disagree on a field's type.
//!
//! | mapped type | TypeScript            | JSDoc                  |
//! |-------------|-----------------------|------------------------|
//! | boolean     | `boolean`             | `{boolean}`            |
//! | string      | `string`              | `{string}`             |
//! | union       | `"sm" \| "md"`        | `{("sm"\|"md")}`       |
//! | reference   | `unknown`             | `{Object}`             |
//! | number      | `number`              | `{number}`             |
//! | untyped     | `any`                 | `{*}`                  |

use crate::scalar::string_literal;
use anatomy_core::{PropDescriptor, PropKind};
use serde_json::Value;

/// Mapped type of a component property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappedType {
    Boolean,
    String,
    /// Union of string literals.
    Union(Vec<String>),
    /// Opaque reference to another component.
    Reference,
    Number,
    /// Open placeholder for missing or unknown kinds.
    Untyped,
}

impl MappedType {
    /// Map a property descriptor.
    ///
    /// An enum without listed values degrades to a plain string.
    pub fn of(descriptor: &PropDescriptor) -> Self {
        match descriptor.kind() {
            PropKind::Boolean => Self::Boolean,
            PropKind::String => Self::String,
            PropKind::Enum => {
                let values = descriptor.enum_values();
                if values.is_empty() {
                    Self::String
                } else {
                    Self::Union(values)
                }
            }
            PropKind::Instance => Self::Reference,
            PropKind::Number => Self::Number,
            PropKind::Unspecified => Self::Untyped,
        }
    }

    /// TypeScript type expression.
    pub fn typescript(&self) -> String {
        match self {
            Self::Boolean => "boolean".to_string(),
            Self::String => "string".to_string(),
            Self::Union(values) => literal_list(values, " | "),
            Self::Reference => "unknown".to_string(),
            Self::Number => "number".to_string(),
            Self::Untyped => "any".to_string(),
        }
    }

    /// JSDoc type expression, braces included.
    pub fn jsdoc(&self) -> String {
        let inner = match self {
            Self::Boolean => "boolean".to_string(),
            Self::String => "string".to_string(),
            Self::Union(values) => format!("({})", literal_list(values, "|")),
            Self::Reference => "Object".to_string(),
            Self::Number => "number".to_string(),
            Self::Untyped => "*".to_string(),
        };
        format!("{{{inner}}}")
    }
}

fn literal_list(values: &[String], separator: &str) -> String {
    values
        .iter()
        .map(|value| string_literal(value))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Type inferred from a style attribute's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleType {
    String,
    Number,
    Boolean,
    /// Array whose items all share one type.
    ArrayOf(Box<StyleType>),
    /// Empty array, or items of differing types.
    MixedArray,
    Object,
    /// `null`.
    Unknown,
}

impl StyleType {
    /// Infer the type of a value.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Null => Self::Unknown,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Object(_) => Self::Object,
            Value::Array(items) => {
                let mut types = items.iter().map(Self::infer);
                let Some(first) = types.next() else {
                    return Self::MixedArray;
                };
                if types.all(|item| item == first) {
                    Self::ArrayOf(Box::new(first))
                } else {
                    Self::MixedArray
                }
            }
        }
    }

    /// TypeScript type expression.
    pub fn typescript(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::ArrayOf(item) => format!("{}[]", item.typescript()),
            Self::MixedArray => "unknown[]".to_string(),
            Self::Object => "Record<string, unknown>".to_string(),
            Self::Unknown => "unknown".to_string(),
        }
    }

    /// JSDoc type expression, braces included.
    pub fn jsdoc(&self) -> String {
        format!("{{{}}}", self.jsdoc_inner())
    }

    fn jsdoc_inner(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::ArrayOf(item) => format!("{}[]", item.jsdoc_inner()),
            Self::MixedArray => "Array".to_string(),
            Self::Object => "Object".to_string(),
            Self::Unknown => "*".to_string(),
        }
    }
}
