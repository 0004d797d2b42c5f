//! Recovery of file lists from serialized clipboard payloads.
//!
//! File-drop records arrive either as a JSON string array or as a plain
//! newline/semicolon-joined list; both the classifier and the copy path
//! share these helpers.

use serde_json::Value;

use super::preview::cleanup_preview;

/// Parses a JSON-array-shaped string into cleaned entries. Anything that is
/// not a JSON array yields an empty list.
pub fn parse_json_string_array(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => cleanup_preview(s),
                other => cleanup_preview(&other.to_string()),
            })
            .filter(|entry| !entry.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Splits a plain payload on newlines and semicolons into cleaned entries.
pub fn split_file_list(content: &str) -> Vec<String> {
    content
        .split(['\n', '\r', ';'])
        .map(cleanup_preview)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Recovers a file list from a payload: JSON array first, plain split as the
/// fallback. Used by the system-clipboard copy path for `files` records.
pub fn recover_file_list(content: &str) -> Vec<String> {
    let parsed = parse_json_string_array(content);
    if !parsed.is_empty() {
        return parsed;
    }
    split_file_list(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_arrays() {
        let entries = parse_json_string_array(r#"["/tmp/a.txt", "/tmp/b.txt"]"#);
        assert_eq!(entries, vec!["/tmp/a.txt", "/tmp/b.txt"]);
    }

    #[test]
    fn non_arrays_yield_nothing() {
        assert!(parse_json_string_array(r#"{"a":1}"#).is_empty());
        assert!(parse_json_string_array("/tmp/a.txt").is_empty());
        assert!(parse_json_string_array("[not json").is_empty());
    }

    #[test]
    fn splits_on_newlines_and_semicolons() {
        let entries = split_file_list("/a/b.txt\r\n/c/d.txt;;/e/f.txt");
        assert_eq!(entries, vec!["/a/b.txt", "/c/d.txt", "/e/f.txt"]);
    }

    #[test]
    fn recovery_prefers_json_shape() {
        assert_eq!(recover_file_list(r#"["/x"]"#), vec!["/x"]);
        assert_eq!(recover_file_list("/x\n/y"), vec!["/x", "/y"]);
    }
}
