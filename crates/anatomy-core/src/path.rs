//! Element path utilities.
//!
//! A path is the ancestry of an element from its root. Its canonical string
//! form joins the segments with [`PATH_SEPARATOR`].

use serde_json::Value;
use smallvec::SmallVec;

/// Separator between segments of a canonical path string.
pub const PATH_SEPARATOR: &str = " > ";

/// Path segments, root first.
pub type Segments = SmallVec<[String; 4]>;

/// Split a chevron-joined path into trimmed, non-empty segments.
pub fn split_path(path: &str) -> Segments {
    path.split('>')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join segments into a canonical path string.
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<&str>>()
        .join(PATH_SEPARATOR)
}

/// Re-join a path string so separators are spaced canonically.
pub fn normalize_path(path: &str) -> String {
    join_segments(split_path(path).as_slice())
}

/// Path of the immediate parent, or an empty string for a root path.
pub fn parent_path(path: &str) -> String {
    let segments = split_path(path);
    match segments.len() {
        0 | 1 => String::new(),
        n => join_segments(&segments[..n - 1]),
    }
}

/// Number of segments in a path.
pub fn depth(path: &str) -> usize {
    split_path(path).len()
}

/// Read a path given either as a string or as an array of names.
///
/// Returns `None` for any other JSON shape.
pub fn path_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(path) => Some(normalize_path(path)),
        Value::Array(items) => {
            let segments: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .collect();
            Some(join_segments(segments.as_slice()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_and_join() {
        let segments = split_path("Frame>Content >  Label");
        assert_eq!(segments.as_slice(), ["Frame", "Content", "Label"]);
        assert_eq!(join_segments(segments.as_slice()), "Frame > Content > Label");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("Frame > Label"), "Frame");
        assert_eq!(parent_path("Frame"), "");
        assert_eq!(parent_path(""), "");
    }

    #[test]
    fn test_path_from_array() {
        let value = json!(["Frame", " Icon "]);
        assert_eq!(path_from_value(&value).as_deref(), Some("Frame > Icon"));
        assert_eq!(path_from_value(&json!(3)), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth("A > B > C"), 3);
        assert_eq!(depth(""), 0);
    }
}
