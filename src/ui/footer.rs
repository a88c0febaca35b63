use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str =
    " 1-5/[ ]: Tabs │ ↑↓: Select │ ←→: Action │ Enter: Open │ n/p: Page │ s: Size │ r: Refresh │ x: Dismiss │ q: Quit";
const DRILL_HINTS: &str =
    " ↑↓: Select │ Enter: Open │ r: Refresh │ x: Dismiss │ Esc: Back │ q: Quit";

pub struct Footer {
    drilled_in: bool,
}

impl Footer {
    pub fn new(drilled_in: bool) -> Self {
        Self { drilled_in }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.drilled_in {
            DRILL_HINTS
        } else {
            LIST_HINTS
        };
        let version = format!("v{} ", VERSION);

        // Char counts, not bytes: the hints contain box-drawing glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
