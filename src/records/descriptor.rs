//! Declarative descriptors a screen hands to the card renderer.

use ratatui::text::Span;
use serde_json::Value;

use crate::records::tone::Tone;

type RenderFn<T> = Box<dyn Fn(Option<&Value>, &T) -> String>;
type HiddenFn<T> = Box<dyn Fn(&T) -> bool>;
type TextFn<T> = Box<dyn Fn(&T) -> String>;
type OptTextFn<T> = Box<dyn Fn(&T) -> Option<String>>;
type PillFn<T> = Box<dyn Fn(&T) -> Option<MetaPill>>;
type CustomMetaFn<T> = Box<dyn Fn(&T) -> Vec<Span<'static>>>;

/// How one attribute of a record is projected into a label/value row.
pub struct FieldDescriptor<T> {
    /// Property name or dot-path into the serialized record.
    pub key: String,
    pub label: Option<String>,
    pub render: Option<RenderFn<T>>,
    /// Maximum number of lines the value may wrap to.
    pub line_limit: usize,
    pub hidden: Option<HiddenFn<T>>,
}

impl<T> FieldDescriptor<T> {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            render: None,
            line_limit: 1,
            hidden: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &T) -> String + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn line_limit(mut self, lines: usize) -> Self {
        self.line_limit = lines.max(1);
        self
    }

    pub fn hidden<F>(mut self, hidden: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.hidden = Some(Box::new(hidden));
        self
    }

    pub fn is_hidden(&self, record: &T) -> bool {
        self.hidden.as_ref().is_some_and(|hidden| hidden(record))
    }
}

/// Short status label shown next to a card title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaPill {
    pub text: String,
    pub tone: Tone,
}

impl MetaPill {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Per record-type bundle of projections. Id and title are mandatory.
pub struct Extractors<T> {
    pub get_id: TextFn<T>,
    pub get_title: TextFn<T>,
    pub get_subtitle: Option<OptTextFn<T>>,
    pub get_avatar_text: Option<OptTextFn<T>>,
    pub get_avatar_url: Option<OptTextFn<T>>,
    pub get_meta_pill: Option<PillFn<T>>,
    pub get_custom_meta: Option<CustomMetaFn<T>>,
}

impl<T> Extractors<T> {
    pub fn new<I, N>(get_id: I, get_title: N) -> Self
    where
        I: Fn(&T) -> String + 'static,
        N: Fn(&T) -> String + 'static,
    {
        Self {
            get_id: Box::new(get_id),
            get_title: Box::new(get_title),
            get_subtitle: None,
            get_avatar_text: None,
            get_avatar_url: None,
            get_meta_pill: None,
            get_custom_meta: None,
        }
    }

    pub fn subtitle<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<String> + 'static,
    {
        self.get_subtitle = Some(Box::new(f));
        self
    }

    pub fn avatar_text<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<String> + 'static,
    {
        self.get_avatar_text = Some(Box::new(f));
        self
    }

    pub fn avatar_url<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<String> + 'static,
    {
        self.get_avatar_url = Some(Box::new(f));
        self
    }

    pub fn meta_pill<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<MetaPill> + 'static,
    {
        self.get_meta_pill = Some(Box::new(f));
        self
    }

    pub fn custom_meta<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Vec<Span<'static>> + 'static,
    {
        self.get_custom_meta = Some(Box::new(f));
        self
    }

    pub fn id(&self, record: &T) -> String {
        (self.get_id)(record)
    }

    pub fn title(&self, record: &T) -> String {
        (self.get_title)(record)
    }

    pub fn subtitle_of(&self, record: &T) -> Option<String> {
        self.get_subtitle.as_ref().and_then(|f| f(record))
    }

    pub fn avatar_text_of(&self, record: &T) -> Option<String> {
        self.get_avatar_text.as_ref().and_then(|f| f(record))
    }

    pub fn avatar_url_of(&self, record: &T) -> Option<String> {
        self.get_avatar_url.as_ref().and_then(|f| f(record))
    }

    pub fn meta_pill_of(&self, record: &T) -> Option<MetaPill> {
        self.get_meta_pill.as_ref().and_then(|f| f(record))
    }

    pub fn custom_meta_of(&self, record: &T) -> Option<Vec<Span<'static>>> {
        self.get_custom_meta.as_ref().map(|f| f(record))
    }
}

/// A user-triggerable action surfaced on every card. The renderer only
/// dispatches it; the owning screen decides what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub key: String,
    pub label: String,
    pub hotkey: Option<char>,
}

impl CardAction {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            hotkey: None,
        }
    }

    pub fn with_hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey);
        self
    }
}
