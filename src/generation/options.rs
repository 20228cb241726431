//! Options parser
//!
//! Decision options arrive from the UI layer as a loosely-typed string
//! expected to hold a JSON array. Every malformed input degrades to an
//! empty list; this function is total and never errors.

use serde_json::Value;

/// Parse an optional JSON-array string into a list of option strings.
///
/// Non-array payloads, invalid JSON, and missing input all yield an empty
/// list. Non-string elements inside a valid array are skipped, preserving
/// the order of the string elements that remain.
pub fn parse_options(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(s) => s,
        None => return Vec::new(),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
