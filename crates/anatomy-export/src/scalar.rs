//! Scalar literal formatting.
//!
//! Leaves of every text format go through here: YAML plain or double-quoted
//! scalars, and the JSON-style string literals shared by the TypeScript and
//! JSDoc writers.

use serde_json::Value;

/// Characters that may not start a plain YAML scalar.
const INDICATORS: [char; 19] = [
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Words a YAML reader would not keep as strings.
const RESERVED_WORDS: [&str; 12] = [
    "true", "false", "yes", "no", "on", "off", "y", "n", "null", "~", ".inf", ".nan",
];

/// Format a value as an inline YAML scalar.
///
/// Empty collections become `[]` and `{}`. Non-empty collections are written
/// as blocks by the nested-text writer and only reach here as flow JSON.
pub fn yaml_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => yaml_string(text),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        other => other.to_string(),
    }
}

/// Format a string as a YAML scalar, quoting only when needed.
pub fn yaml_string(text: &str) -> String {
    if needs_quotes(text) {
        double_quoted(text)
    } else {
        text.to_string()
    }
}

/// Whether a string must be quoted to read back as the same string.
pub fn needs_quotes(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return true;
    };

    INDICATORS.contains(&first)
        || text.starts_with(' ')
        || text.ends_with(' ')
        || text.chars().any(|c| c == ':' || c == '#' || c.is_control())
        || looks_like_keyword(text)
        || looks_like_number(text)
}

fn looks_like_keyword(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

fn looks_like_number(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.parse::<f64>().is_ok()
        || lower.starts_with("0x")
        || lower.starts_with("0o")
        || lower.starts_with("0b")
}

/// Double-quote a string, escaping backslashes, quotes and control characters.
pub fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// JSON-style string literal, as used for TypeScript and JSDoc literal types.
pub fn string_literal(text: &str) -> String {
    Value::from(text).to_string()
}

/// Whether a string is a plain JavaScript identifier.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Object key for a typed declaration, quoted unless it is an identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_strings_unquoted() {
        assert_eq!(yaml_string("Frame > Label"), "Frame > Label");
        assert_eq!(yaml_string("color/bg/primary"), "color/bg/primary");
        assert_eq!(yaml_string("Size=Small, State=Hover"), "Size=Small, State=Hover");
    }

    #[test]
    fn test_reserved_characters_quoted() {
        assert_eq!(yaml_string("a: b"), "\"a: b\"");
        assert_eq!(yaml_string("#fff"), "\"#fff\"");
        assert_eq!(yaml_string(" padded "), "\" padded \"");
        assert_eq!(yaml_string("two\nlines"), "\"two\\nlines\"");
        assert_eq!(yaml_string("say \"hi\": now"), "\"say \\\"hi\\\": now\"");
    }

    #[test]
    fn test_ambiguous_strings_quoted() {
        for text in ["", "true", "No", "null", "~", "42", "1.5", "-3", "0x1F", "*ref", "- item"] {
            assert!(needs_quotes(text), "{text:?} should be quoted");
        }
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(yaml_scalar(&json!(null)), "null");
        assert_eq!(yaml_scalar(&json!(true)), "true");
        assert_eq!(yaml_scalar(&json!(16)), "16");
        assert_eq!(yaml_scalar(&json!(1.5)), "1.5");
        assert_eq!(yaml_scalar(&json!([])), "[]");
        assert_eq!(yaml_scalar(&json!({})), "{}");
    }

    #[test]
    fn test_control_characters_escaped() {
        assert_eq!(double_quoted("a\u{7}b"), "\"a\\u0007b\"");
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("Label"));
        assert!(is_identifier("_private$1"));
        assert!(!is_identifier("Icon Left"));
        assert!(!is_identifier("2x"));
        assert_eq!(property_key("Icon Left"), "\"Icon Left\"");
        assert_eq!(property_key("fills"), "fills");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("sm"), "\"sm\"");
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
    }
}
