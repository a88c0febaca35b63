use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::detail::state::DetailDialogState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn render_detail_dialog(frame: &mut Frame, area: Rect, state: &DetailDialogState) {
    let DetailDialogState::Visible {
        content,
        scroll_offset,
    } = state
    else {
        return;
    };

    let popup = centered_rect(70, 70, area);
    let label_width = content
        .rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = content
        .rows
        .iter()
        .skip(*scroll_offset)
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}  ", label, width = label_width),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(
                    value.clone(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Up/Down: Scroll  Esc: Close",
        Style::default().fg(MUTED_TEXT),
    )));

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", content.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}
