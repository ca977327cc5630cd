//! Nested-text output must read back as the same data.

use anatomy_export::formats::write_yaml;
use proptest::prelude::*;
use serde_json::{Map, Value};

const LINE: &str = "[a-zA-Z0-9:#,'\"&*!|%@`?{}\\[\\]/=<>-][a-zA-Z0-9 :#,'\"&*!|%@`?{}\\[\\]/=<>-]{0,12}";

/// Single-line text, sometimes padded with spaces.
fn single_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::string::string_regex(LINE).unwrap(),
        1 => "[a-z]{0,4}".prop_map(|word| format!(" {word} ")),
        1 => Just(String::new()),
    ]
}

/// Text that may span several lines, such as a rendered tree.
fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => single_line(),
        1 => prop::collection::vec(proptest::string::string_regex(LINE).unwrap(), 2..5)
            .prop_map(|lines| lines.join("\n")),
        1 => prop::collection::vec(proptest::string::string_regex(LINE).unwrap(), 2..4)
            .prop_map(|lines| format!("{}\n", lines.join("\n"))),
    ]
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => text().prop_map(Value::from),
        1 => any::<bool>().prop_map(Value::from),
        1 => any::<i32>().prop_map(Value::from),
        1 => Just(Value::Null),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((single_line(), inner), 0..4).prop_map(|entries| {
                Value::Object(entries.into_iter().collect::<Map<String, Value>>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn strings_read_back(value in text()) {
        let document = Value::Object(Map::from_iter([("value".to_string(), Value::from(value))]));
        let parsed: Value = serde_yaml::from_str(&write_yaml(&document)).unwrap();
        prop_assert_eq!(parsed, document);
    }

    #[test]
    fn documents_read_back(document in document()) {
        let parsed: Value = serde_yaml::from_str(&write_yaml(&document)).unwrap();
        prop_assert_eq!(parsed, document);
    }
}
