use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
    SPINNER_FRAMES, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const APP_NAME: &str = "StaffDesk";

/// One tab label and whether it is the active one.
pub struct TabLabel<'a> {
    pub label: &'a str,
    pub active: bool,
}

pub struct Header {
    busy: bool,
    tick: usize,
}

impl Header {
    pub fn new(busy: bool, tick: usize) -> Self {
        Self { busy, tick }
    }

    pub fn widget(&self, tabs: &[TabLabel<'_>], breadcrumb: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, indicator_style) = if self.busy {
            (
                SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()],
                Style::default().fg(ACCENT),
            )
        } else {
            ("●", Style::default().fg(STATUS_OK))
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(indicator, indicator_style),
            Span::styled("  ", text_style),
            Span::styled(APP_NAME, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │ ", separator_style),
        ];
        for (index, tab) in tabs.iter().enumerate() {
            let label = format!(" {} {} ", index + 1, tab.label);
            let style = if tab.active {
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(label, style));
        }
        if let Some(crumb) = breadcrumb {
            spans.push(Span::styled(" │  ", separator_style));
            spans.push(Span::styled(crumb.to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
