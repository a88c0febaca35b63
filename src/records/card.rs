//! Card composition: projects one record into a [`CardView`].

use ratatui::text::Span;
use serde::Serialize;
use serde_json::Value;

use crate::records::descriptor::{CardAction, Extractors, FieldDescriptor, MetaPill};
use crate::records::path::{display_value, resolve_path};

/// Shown in place of absent or empty values.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initials(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: Option<String>,
    pub value: String,
    pub line_limit: usize,
    /// Hairline separator drawn above the row.
    pub divider: bool,
}

/// Render-ready projection of a single record.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub key: String,
    pub avatar: Avatar,
    pub title: String,
    pub subtitle: Option<String>,
    pub meta: Option<MetaPill>,
    pub custom_meta: Option<Vec<Span<'static>>>,
    pub accessibility_label: String,
    pub rows: Vec<FieldRow>,
    pub actions: Vec<CardAction>,
}

/// First letter of the first word plus first letter of the last word, uppercased.
pub fn initials(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let words: Vec<&str> = text.split_whitespace().collect();
    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn compose_card<T: Serialize>(
    record: &T,
    extractors: &Extractors<T>,
    fields: &[FieldDescriptor<T>],
    actions: &[CardAction],
) -> CardView {
    let title = extractors.title(record);
    let subtitle = extractors.subtitle_of(record).filter(|s| !s.is_empty());
    let meta = extractors.meta_pill_of(record);

    let accessibility_label = [
        Some(title.as_str()),
        subtitle.as_deref(),
        meta.as_ref().map(|pill| pill.text.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    CardView {
        key: extractors.id(record),
        avatar: resolve_avatar(record, extractors),
        title,
        subtitle,
        meta,
        custom_meta: extractors.custom_meta_of(record),
        accessibility_label,
        rows: field_rows(record, fields),
        actions: actions.to_vec(),
    }
}

/// Projects every record, preserving input order.
pub fn render_list<T: Serialize>(
    records: &[T],
    extractors: &Extractors<T>,
    fields: &[FieldDescriptor<T>],
    actions: &[CardAction],
) -> Vec<CardView> {
    records
        .iter()
        .map(|record| compose_card(record, extractors, fields, actions))
        .collect()
}

fn resolve_avatar<T>(record: &T, extractors: &Extractors<T>) -> Avatar {
    if let Some(url) = extractors.avatar_url_of(record).filter(|u| !u.is_empty()) {
        return Avatar::Image(url);
    }
    match extractors.avatar_text_of(record) {
        Some(text) => {
            let letters = initials(Some(&text));
            if letters.is_empty() {
                Avatar::Placeholder
            } else {
                Avatar::Initials(letters)
            }
        }
        None => Avatar::Placeholder,
    }
}

fn field_rows<T: Serialize>(record: &T, fields: &[FieldDescriptor<T>]) -> Vec<FieldRow> {
    if fields.is_empty() {
        return Vec::new();
    }
    // A record that cannot be represented as JSON resolves every path to absent.
    let value = serde_json::to_value(record).unwrap_or(Value::Null);

    let mut rows = Vec::with_capacity(fields.len());
    for field in fields {
        if field.is_hidden(record) {
            continue;
        }
        let raw = resolve_path(&value, &field.key);
        let rendered = match &field.render {
            Some(render) => render(raw, record),
            None => display_value(raw).unwrap_or_else(|| PLACEHOLDER.to_string()),
        };
        rows.push(FieldRow {
            label: field.label.clone(),
            value: rendered,
            line_limit: field.line_limit,
            divider: !rows.is_empty(),
        });
    }
    rows
}
