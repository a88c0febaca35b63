use serde::Serialize;
use serde_json::Value;

use crate::records::{display_value, PLACEHOLDER};
use crate::ui::mvi::UiState;

/// Title plus label/value rows shown by the detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailContent {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl DetailContent {
    /// One row per top-level field of the serialized record.
    pub fn from_record<T: Serialize>(title: impl Into<String>, record: &T) -> Self {
        let rows = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map
                .iter()
                .map(|(key, value)| (humanize(key), describe(value)))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// `sales_manager_client_accesses` -> `Sales manager client accesses`.
fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) if items.iter().any(Value::is_object) => {
            let names: Vec<String> = items.iter().map(name_of).collect();
            if names.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                names.join(", ")
            }
        }
        other => display_value(Some(other))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }
}

fn name_of(item: &Value) -> String {
    ["name", "employee_name", "filename", "email"]
        .iter()
        .find_map(|key| item.get(*key).and_then(|v| display_value(Some(v))))
        .unwrap_or_else(|| item.to_string())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailDialogState {
    #[default]
    Hidden,
    Visible {
        content: DetailContent,
        scroll_offset: usize,
    },
}

impl UiState for DetailDialogState {}

impl DetailDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
