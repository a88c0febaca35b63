use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Splits the screen into header, body, and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Stack of `count` boxes of `width`x`height` anchored to the top-right of `area`.
pub fn top_right_stack(area: Rect, width: u16, height: u16, count: usize) -> Vec<Rect> {
    let width = width.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y;
    let bottom = area.y + area.height;
    let mut slots = Vec::with_capacity(count);
    for _ in 0..count {
        if y + height > bottom {
            break;
        }
        slots.push(Rect {
            x,
            y,
            width,
            height,
        });
        y += height;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_screens_do_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn toast_stack_stops_at_bottom() {
        let slots = top_right_stack(Rect::new(0, 0, 100, 10), 40, 3, 5);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].x, 59);
        assert_eq!(slots[2].y, 6);
    }
}
