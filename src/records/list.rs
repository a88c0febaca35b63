//! Scrollable list of cards with selection, action dispatch, and refresh.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, StatefulWidget, Widget};
use serde::Serialize;

use crate::records::card::{compose_card, Avatar, CardView};
use crate::records::descriptor::{CardAction, Extractors, FieldDescriptor};
use crate::ui::theme::{
    ACCENT, CARD_BORDER, DIVIDER, HEADER_TEXT, MUTED_TEXT, SELECTED_BORDER, SPINNER_FRAMES,
};

/// Narrowest an action button may render, in cells.
pub const MIN_ACTION_WIDTH: usize = 8;
const ITEM_GAP: u16 = 1;
const DEFAULT_EMPTY: &str = "No records";

type KeyFn<'a, T> = Box<dyn Fn(&T) -> String + 'a>;
type ItemPressFn<'a, T> = Box<dyn FnMut(&T) + 'a>;
type ActionPressFn<'a, T> = Box<dyn FnMut(&CardAction, &T) + 'a>;
type RefreshFn<'a> = Box<dyn FnMut() + 'a>;

/// Selection and scroll position of a [`CardList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardListState {
    selected: usize,
    selected_key: Option<String>,
    focused_action: Option<usize>,
    offset: usize,
}

impl CardListState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    pub fn focused_action(&self) -> Option<usize> {
        self.focused_action
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Re-anchors the selection after the record list changed. The
    /// previously selected record keeps the selection when still present.
    pub fn sync(&mut self, keys: &[String]) {
        if keys.is_empty() {
            *self = Self::default();
            return;
        }
        if let Some(index) = self
            .selected_key
            .as_ref()
            .and_then(|key| keys.iter().position(|k| k == key))
        {
            self.selected = index;
        } else {
            self.selected = self.selected.min(keys.len() - 1);
            self.focused_action = None;
        }
        self.selected_key = Some(keys[self.selected].clone());
        self.offset = self.offset.min(self.selected);
    }

    pub fn select_next(&mut self, keys: &[String]) {
        if self.selected + 1 < keys.len() {
            self.select(self.selected + 1, keys);
        }
    }

    pub fn select_previous(&mut self, keys: &[String]) {
        if self.selected > 0 {
            self.select(self.selected - 1, keys);
        }
    }

    fn select(&mut self, index: usize, keys: &[String]) {
        self.selected = index;
        self.selected_key = keys.get(index).cloned();
        self.focused_action = None;
    }

    pub fn focus_next_action(&mut self, action_count: usize) {
        if action_count == 0 {
            return;
        }
        self.focused_action = match self.focused_action {
            None => Some(0),
            Some(i) if i + 1 < action_count => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn focus_previous_action(&mut self, action_count: usize) {
        if action_count == 0 {
            return;
        }
        self.focused_action = match self.focused_action {
            None => Some(action_count - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

/// Renders homogeneous records as uniform cards.
pub struct CardList<'a, T> {
    records: &'a [T],
    extractors: &'a Extractors<T>,
    fields: &'a [FieldDescriptor<T>],
    actions: &'a [CardAction],
    key_extractor: Option<KeyFn<'a, T>>,
    title: Option<String>,
    empty_placeholder: Option<String>,
    refreshing: bool,
    spinner_tick: usize,
    on_item_press: Option<ItemPressFn<'a, T>>,
    on_action_press: Option<ActionPressFn<'a, T>>,
    on_refresh: Option<RefreshFn<'a>>,
}

impl<'a, T: Serialize> CardList<'a, T> {
    pub fn new(records: &'a [T], extractors: &'a Extractors<T>) -> Self {
        Self {
            records,
            extractors,
            fields: &[],
            actions: &[],
            key_extractor: None,
            title: None,
            empty_placeholder: None,
            refreshing: false,
            spinner_tick: 0,
            on_item_press: None,
            on_action_press: None,
            on_refresh: None,
        }
    }

    pub fn fields(mut self, fields: &'a [FieldDescriptor<T>]) -> Self {
        self.fields = fields;
        self
    }

    pub fn actions(mut self, actions: &'a [CardAction]) -> Self {
        self.actions = actions;
        self
    }

    pub fn key_extractor<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + 'a,
    {
        self.key_extractor = Some(Box::new(f));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn empty_placeholder(mut self, text: impl Into<String>) -> Self {
        self.empty_placeholder = Some(text.into());
        self
    }

    pub fn refreshing(mut self, refreshing: bool, spinner_tick: usize) -> Self {
        self.refreshing = refreshing;
        self.spinner_tick = spinner_tick;
        self
    }

    pub fn on_item_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.on_item_press = Some(Box::new(f));
        self
    }

    pub fn on_action_press<F>(mut self, f: F) -> Self
    where
        F: FnMut(&CardAction, &T) + 'a,
    {
        self.on_action_press = Some(Box::new(f));
        self
    }

    pub fn on_refresh<F>(mut self, f: F) -> Self
    where
        F: FnMut() + 'a,
    {
        self.on_refresh = Some(Box::new(f));
        self
    }

    /// Reconciliation key of a record.
    pub fn key_of(&self, record: &T) -> String {
        match &self.key_extractor {
            Some(f) => f(record),
            None => self.extractors.id(record),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.records.iter().map(|r| self.key_of(r)).collect()
    }

    /// Card projections in input order.
    pub fn cards(&self) -> Vec<CardView> {
        self.records
            .iter()
            .map(|record| {
                let mut card = compose_card(record, self.extractors, self.fields, self.actions);
                if self.key_extractor.is_some() {
                    card.key = self.key_of(record);
                }
                card
            })
            .collect()
    }

    pub fn press_item(&mut self, index: usize) -> bool {
        let (Some(record), Some(on_press)) = (self.records.get(index), self.on_item_press.as_mut())
        else {
            return false;
        };
        on_press(record);
        true
    }

    pub fn press_action(&mut self, index: usize, action_index: usize) -> bool {
        let (Some(record), Some(action), Some(on_press)) = (
            self.records.get(index),
            self.actions.get(action_index),
            self.on_action_press.as_mut(),
        ) else {
            return false;
        };
        on_press(action, record);
        true
    }

    /// Fires the refresh callback. The list never fetches by itself.
    pub fn refresh(&mut self) -> bool {
        match self.on_refresh.as_mut() {
            Some(on_refresh) => {
                on_refresh();
                true
            }
            None => false,
        }
    }

    /// Handles navigation and activation keys. Returns whether the key was consumed.
    pub fn handle_key(&mut self, state: &mut CardListState, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press || key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        let keys = self.keys();
        state.sync(&keys);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                state.select_next(&keys);
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                state.select_previous(&keys);
                true
            }
            KeyCode::Right | KeyCode::Tab => {
                state.focus_next_action(self.actions.len());
                true
            }
            KeyCode::Left | KeyCode::BackTab => {
                state.focus_previous_action(self.actions.len());
                true
            }
            KeyCode::Enter => match state.focused_action {
                Some(action) => self.press_action(state.selected, action),
                None => self.press_item(state.selected),
            },
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char(ch) => match self.actions.iter().position(|a| a.hotkey == Some(ch)) {
                Some(action) => self.press_action(state.selected, action),
                None => false,
            },
            _ => false,
        }
    }

    fn frame_title(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(title) = &self.title {
            spans.push(Span::styled(
                format!(" {} ", title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        }
        if self.on_refresh.is_some() {
            let hint = if self.refreshing {
                let frame = SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()];
                format!(" {} refreshing ", frame)
            } else {
                " r: refresh ".to_string()
            };
            spans.push(Span::styled(hint, Style::default().fg(MUTED_TEXT)));
        }
        Line::from(spans)
    }
}

impl<T: Serialize> StatefulWidget for &CardList<'_, T> {
    type State = CardListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let frame = Block::default()
            .title(self.frame_title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER));
        let inner = frame.inner(area);
        frame.render(area, buf);

        let cards = self.cards();
        let keys: Vec<String> = cards.iter().map(|c| c.key.clone()).collect();
        state.sync(&keys);

        if cards.is_empty() {
            let text = self.empty_placeholder.as_deref().unwrap_or(DEFAULT_EMPTY);
            Paragraph::new(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(MUTED_TEXT),
            )))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let width = inner.width.saturating_sub(2) as usize;
        let rendered: Vec<Vec<Line<'static>>> = cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let focus = (index == state.selected).then_some(state.focused_action).flatten();
                card_lines(card, width, focus)
            })
            .collect();
        let heights: Vec<u16> = rendered.iter().map(|lines| lines.len() as u16 + 2).collect();

        state.offset = scroll_offset(&heights, state.selected, state.offset, inner.height);

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for (index, lines) in rendered.into_iter().enumerate().skip(state.offset) {
            if y >= bottom {
                break;
            }
            let height = heights[index].min(bottom - y);
            let card_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height,
            };
            let border = if index == state.selected {
                SELECTED_BORDER
            } else {
                CARD_BORDER
            };
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border)),
                )
                .render(card_area, buf);
            y = y.saturating_add(height).saturating_add(ITEM_GAP);
        }
    }
}

/// First card index to draw so that `selected` fits in `viewport` rows.
fn scroll_offset(heights: &[u16], selected: usize, offset: usize, viewport: u16) -> usize {
    let mut offset = offset.min(selected);
    loop {
        let used: u32 = heights[offset..=selected]
            .iter()
            .map(|h| u32::from(*h) + u32::from(ITEM_GAP))
            .sum();
        if used <= u32::from(viewport) + u32::from(ITEM_GAP) || offset == selected {
            return offset;
        }
        offset += 1;
    }
}

fn card_lines(card: &CardView, width: usize, focused_action: Option<usize>) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(card, width)];

    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::from(Span::styled(
            format!("      {}", subtitle),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let label_width = width * 2 / 5;
    let value_width = width.saturating_sub(label_width).max(1);
    for row in &card.rows {
        if row.divider {
            lines.push(Line::from(Span::styled(
                "┄".repeat(width),
                Style::default().fg(DIVIDER),
            )));
        }
        let label = row.label.clone().unwrap_or_default();
        for (i, chunk) in wrap_value(&row.value, value_width, row.line_limit)
            .into_iter()
            .enumerate()
        {
            let label_cell = if i == 0 { label.as_str() } else { "" };
            let padding = value_width.saturating_sub(chunk.chars().count());
            lines.push(Line::from(vec![
                Span::styled(
                    pad_right(label_cell, label_width),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::raw(" ".repeat(padding)),
                Span::styled(chunk, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
            ]));
        }
    }

    if !card.actions.is_empty() {
        let mut spans = Vec::new();
        let mut used = 0;
        for (index, action) in card.actions.iter().enumerate() {
            let button = action_button(&action.label);
            used += button.chars().count() + 1;
            let style = if focused_action == Some(index) {
                Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(button, style));
        }
        let mut row = vec![Span::raw(" ".repeat(width.saturating_sub(used)))];
        row.extend(spans);
        lines.push(Line::from(row));
    }
    lines
}

fn header_line(card: &CardView, width: usize) -> Line<'static> {
    let badge = match &card.avatar {
        Avatar::Image(_) => "(▣) ".to_string(),
        Avatar::Initials(letters) => format!("({:<2}) ", letters),
        Avatar::Placeholder => "(  ) ".to_string(),
    };
    let mut right: Vec<Span<'static>> = Vec::new();
    if let Some(pill) = &card.meta {
        if !pill.text.is_empty() {
            let palette = pill.tone.palette();
            right.push(Span::styled(
                format!(" {} ", pill.text),
                Style::default().fg(palette.fg).bg(palette.bg),
            ));
        }
    }
    if let Some(custom) = &card.custom_meta {
        right.push(Span::raw(" "));
        right.extend(custom.iter().cloned());
    }
    let right_width: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let title_room = width
        .saturating_sub(badge.chars().count())
        .saturating_sub(right_width)
        .saturating_sub(1);
    let title = truncate(&card.title, title_room);
    let padding = width
        .saturating_sub(badge.chars().count())
        .saturating_sub(title.chars().count())
        .saturating_sub(right_width);

    let mut spans = vec![
        Span::styled(badge, Style::default().fg(MUTED_TEXT)),
        Span::styled(title, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
    ];
    spans.extend(right);
    Line::from(spans)
}

/// Bracketed button label padded to the minimum action width.
pub fn action_button(label: &str) -> String {
    let text = format!("[ {} ]", label);
    let len = text.chars().count();
    if len >= MIN_ACTION_WIDTH {
        return text;
    }
    let pad = MIN_ACTION_WIDTH - len;
    format!(
        "[ {}{}{} ]",
        " ".repeat(pad / 2),
        label,
        " ".repeat(pad - pad / 2)
    )
}

/// Greedy word wrap limited to `max_lines`; the last kept line ends with `…`
/// when text was cut.
pub fn wrap_value(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let max_lines = max_lines.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let current_len = current.chars().count();
            let word_len = word.chars().count();
            let needed = if current.is_empty() {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // Word longer than a whole line: hard split.
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(1);
            *last = format!("{}…", last.chars().take(keep).collect::<String>());
        }
    }
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    format!("{}…", text.chars().take(width - 1).collect::<String>())
}

fn pad_right(text: &str, width: usize) -> String {
    let text = truncate(text, width.saturating_sub(1));
    let pad = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(pad))
}
