use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::lifecycle::{Toast, ToastKind};
use crate::ui::layout::top_right_stack;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_INFO, STATUS_OK, STATUS_WARNING};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

fn kind_style(kind: ToastKind) -> (Style, &'static str) {
    match kind {
        ToastKind::Success => (Style::default().fg(STATUS_OK), " Success "),
        ToastKind::Error => (Style::default().fg(STATUS_ERROR), " Error "),
        ToastKind::Info => (Style::default().fg(STATUS_INFO), " Info "),
        ToastKind::Warning => (Style::default().fg(STATUS_WARNING), " Warning "),
    }
}

/// Draws live toasts newest-first in the top-right corner of `area`.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let slots = top_right_stack(area, TOAST_WIDTH, TOAST_HEIGHT, toasts.len());
    for (slot, toast) in slots.into_iter().zip(toasts.iter().rev()) {
        let (style, title) = kind_style(toast.kind);
        frame.render_widget(Clear, slot);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                toast.message.clone(),
                Style::default().fg(HEADER_TEXT),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(title, style))
                    .borders(Borders::ALL)
                    .border_style(style),
            ),
            slot,
        );
    }
}
