use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::lifecycle::Toast;
use crate::ui::detail::{DetailDialogState, DetailIntent, DetailReducer};
use crate::ui::header::TabLabel;
use crate::ui::mvi::Reducer;
use crate::ui::screens::{
    ClientsEntity, JobsEntity, ListScreen, ResourceRef, ResourcesEntity, RolesEntity,
    RoundsEntity, Screen, ScreenAction, ScreenContext, ScreenId, VendorsEntity,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    ctx: ScreenContext,
    page_size: u32,
    tabs: Vec<Box<dyn Screen>>,
    active: usize,
    /// Interview rounds of one candidate, stacked over the active tab.
    rounds: Option<Box<dyn Screen>>,
    /// State of the record detail popup (MVI pattern).
    detail: DetailDialogState,
    tick: usize,
}

impl App {
    pub fn new(ctx: ScreenContext, page_size: u32, start: ScreenId) -> Self {
        let tabs: Vec<Box<dyn Screen>> = vec![
            Box::new(ListScreen::<ClientsEntity>::new(ctx.clone(), (), page_size)),
            Box::new(ListScreen::<VendorsEntity>::new(ctx.clone(), (), page_size)),
            Box::new(ListScreen::<JobsEntity>::new(ctx.clone(), (), page_size)),
            Box::new(ListScreen::<ResourcesEntity>::new(ctx.clone(), (), page_size)),
            Box::new(ListScreen::<RolesEntity>::new(ctx.clone(), (), page_size)),
        ];
        Self {
            should_quit: false,
            ctx,
            page_size,
            tabs,
            active: start.tab_index().unwrap_or(0),
            rounds: None,
            detail: DetailDialogState::default(),
            tick: 0,
        }
    }

    /// Activates the start tab, issuing its first fetch.
    pub fn start(&mut self) {
        tracing::info!(screen = ?self.active_id(), "Starting on screen");
        self.tabs[self.active].activate();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Cancels every call still in flight.
    pub fn shutdown(&mut self) {
        self.close_rounds();
        for screen in &mut self.tabs {
            screen.deactivate();
        }
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.ctx.lifecycle.toasts.expire(Instant::now());
    }

    pub fn is_busy(&self) -> bool {
        self.ctx.lifecycle.busy.is_busy()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.ctx.lifecycle.toasts.snapshot()
    }

    pub fn dismiss_latest_toast(&mut self) {
        self.ctx.lifecycle.toasts.dismiss_latest();
    }

    pub fn active_id(&self) -> ScreenId {
        match &self.rounds {
            Some(rounds) => rounds.id(),
            None => ScreenId::TABS[self.active],
        }
    }

    pub fn active_tab(&self) -> usize {
        self.active
    }

    pub fn is_drilled_in(&self) -> bool {
        self.rounds.is_some()
    }

    pub fn breadcrumb(&self) -> Option<&str> {
        self.rounds.as_ref().map(|rounds| rounds.title())
    }

    pub fn tab_labels(&self) -> Vec<TabLabel<'static>> {
        ScreenId::TABS
            .iter()
            .enumerate()
            .map(|(index, id)| TabLabel {
                label: id.label(),
                active: index == self.active,
            })
            .collect()
    }

    /// Switches tabs. Leaving a screen cancels its call in flight.
    pub fn select_tab(&mut self, index: usize) {
        if index >= self.tabs.len() || (index == self.active && self.rounds.is_none()) {
            return;
        }
        self.close_rounds();
        self.tabs[self.active].deactivate();
        self.active = index;
        tracing::info!(screen = ?self.active_id(), "Switched screen");
        self.tabs[self.active].activate();
    }

    pub fn next_tab(&mut self) {
        self.select_tab((self.active + 1) % self.tabs.len());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab((self.active + self.tabs.len() - 1) % self.tabs.len());
    }

    pub fn open_rounds(&mut self, target: ResourceRef) {
        self.close_rounds();
        tracing::info!(resource_id = %target.id, "Opening interview rounds");
        let mut screen = ListScreen::<RoundsEntity>::new(self.ctx.clone(), target, self.page_size);
        screen.activate();
        self.rounds = Some(Box::new(screen));
    }

    pub fn close_rounds(&mut self) {
        if let Some(mut rounds) = self.rounds.take() {
            rounds.deactivate();
        }
    }

    pub fn reload_active(&mut self) {
        self.active_screen_mut().reload();
    }

    pub fn on_settled(&mut self, id: ScreenId) {
        if let Some(rounds) = self.rounds.as_mut().filter(|r| r.id() == id) {
            rounds.on_settled();
            return;
        }
        if let Some(screen) = self.tabs.iter_mut().find(|s| s.id() == id) {
            screen.on_settled();
        }
    }

    pub fn detail(&self) -> &DetailDialogState {
        &self.detail
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match self.active_screen_mut().handle_key(key) {
            ScreenAction::OpenDetail(content) => {
                self.dispatch_detail(DetailIntent::Open(content));
            }
            ScreenAction::OpenRounds(target) => self.open_rounds(target),
            ScreenAction::Handled | ScreenAction::Ignored => {}
        }
    }

    pub fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let tick = self.tick;
        self.active_screen_mut().render(frame, area, tick);
    }

    fn active_screen_mut(&mut self) -> &mut dyn Screen {
        match self.rounds.as_mut() {
            Some(rounds) => rounds.as_mut(),
            None => self.tabs[self.active].as_mut(),
        }
    }
}
