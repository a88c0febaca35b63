use crate::ui::app::App;
use crate::ui::detail::DetailIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.detail().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                app.dispatch_detail(DetailIntent::Close)
            }
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_detail(DetailIntent::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => app.dispatch_detail(DetailIntent::ScrollDown),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('x') => app.dismiss_latest_toast(),
        KeyCode::Esc => app.close_rounds(),
        KeyCode::Char(']') => app.next_tab(),
        KeyCode::Char('[') => app.previous_tab(),
        KeyCode::Char(ch @ '1'..='5') => app.select_tab(ch as usize - '1' as usize),
        KeyCode::F(5) => app.reload_active(),
        _ => app.on_key(key),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
