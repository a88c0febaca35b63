//! Dot-path lookups into serialized records.

use serde_json::Value;

/// Resolves a dot-separated path (`"owner.address.city"`) against `value`.
///
/// Objects are indexed by key and arrays by numeric segment. Returns `None`
/// as soon as the current value is `null`, missing, or a scalar; a `null`
/// at the leaf is returned as `Some(Value::Null)`.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Display form of a resolved value. `None` for absent, `null`, and empty strings.
pub fn display_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| display_value(Some(item)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other @ Value::Object(_) => Some(other.to_string()),
    }
}
