use crate::api::ApiClient;
use crate::config::Config;
use crate::lifecycle::{BusyTracker, LifecycleContext, ToastQueue};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::screens::{ScreenContext, ScreenId};
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the terminal UI until the user quits. Background calls run on `runtime`.
pub fn run(config: &Config, client: ApiClient, runtime: Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let start = ScreenId::from_name(&config.ui.start_screen).unwrap_or(ScreenId::Clients);
    let lifecycle = LifecycleContext::new(
        BusyTracker::new(),
        ToastQueue::with_timeout(Duration::from_millis(config.ui.toast_timeout_ms)),
    );

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let ctx = ScreenContext {
        client,
        lifecycle,
        runtime,
        events: events.sender(),
    };
    let mut app = App::new(ctx, config.ui.page_size, start);
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::CallSettled(id)) => app.on_settled(id),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    tracing::info!("Terminal UI closed");
    Ok(())
}
