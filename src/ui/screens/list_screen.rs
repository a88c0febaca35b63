use std::cell::{Cell, RefCell};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::api::types::{PageParams, Paginated};
use crate::lifecycle::{Controller, WrapOptions};
use crate::records::{CardAction, CardList, CardListState, Extractors, FieldDescriptor};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::pagination::{PaginationIntent, PaginationReducer, PaginationState};
use crate::ui::screens::entity::Entity;
use crate::ui::screens::{Screen, ScreenAction, ScreenContext, ScreenId};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};

type FetchArgs<S> = (S, PageParams);

pub struct ListScreen<E: Entity> {
    title: String,
    scope: E::Scope,
    ctx: ScreenContext,
    controller: Controller<FetchArgs<E::Scope>, Paginated<E::Record>>,
    extractors: Extractors<E::Record>,
    fields: Vec<FieldDescriptor<E::Record>>,
    actions: Vec<CardAction>,
    records: Vec<E::Record>,
    list_state: CardListState,
    pagination: PaginationState,
    error: Option<String>,
    loaded: bool,
}

impl<E: Entity> ListScreen<E> {
    pub fn new(ctx: ScreenContext, scope: E::Scope, page_size: u32) -> Self {
        let client = ctx.client.clone();
        let controller = Controller::wrap(
            move |(scope, page): FetchArgs<E::Scope>| E::fetch(client.clone(), scope, page),
            ctx.lifecycle.clone(),
            WrapOptions::default(),
        );
        Self {
            title: E::title(&scope),
            scope,
            ctx,
            controller,
            extractors: E::extractors(),
            fields: E::fields(),
            actions: E::actions(),
            records: Vec::new(),
            list_state: CardListState::default(),
            pagination: PaginationState::with_page_size(page_size),
            error: None,
            loaded: false,
        }
    }

    pub fn records(&self) -> &[E::Record] {
        &self.records
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    fn fetch(&mut self) {
        // A newer request supersedes whatever is still in flight.
        self.controller.cancel();
        self.loaded = true;

        let controller = self.controller.clone();
        let events = self.ctx.events.clone();
        let args = (self.scope.clone(), self.pagination.params());
        tracing::info!(
            screen = ?E::ID,
            page = args.1.page,
            page_size = args.1.page_size,
            "Fetching records"
        );
        self.ctx.runtime.spawn(async move {
            let _ = controller.execute(args).await;
            let _ = events.send(AppEvent::CallSettled(E::ID));
        });
    }

    fn paginate(&mut self, intent: PaginationIntent) -> ScreenAction {
        if !E::paginated() {
            return ScreenAction::Ignored;
        }
        let next = PaginationReducer::reduce(self.pagination, intent);
        let refetch = self.pagination.needs_fetch(&next);
        self.pagination = next;
        if refetch {
            self.fetch();
        }
        ScreenAction::Handled
    }

    fn pager_line(&self) -> Line<'static> {
        let style = Style::default().fg(MUTED_TEXT);
        if let Some(error) = &self.error {
            return Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(STATUS_ERROR),
            ));
        }
        if !E::paginated() {
            return Line::from(Span::styled(
                format!(" {} records", self.records.len()),
                style,
            ));
        }
        let p = &self.pagination;
        Line::from(Span::styled(
            format!(
                " Page {} of {} · {} total · {} per page",
                p.page,
                p.total_pages(),
                p.total,
                p.page_size
            ),
            style,
        ))
    }
}

impl<E: Entity> Screen for ListScreen<E> {
    fn id(&self) -> ScreenId {
        E::ID
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn activate(&mut self) {
        if !self.loaded {
            self.fetch();
        }
    }

    fn deactivate(&mut self) {
        if self.controller.is_loading() {
            tracing::debug!(screen = ?E::ID, "Leaving screen with a call in flight");
            // The records on hand may belong to another page; fetch the
            // current page again on the next visit.
            self.loaded = false;
        }
        self.controller.cancel();
    }

    fn reload(&mut self) {
        self.fetch();
    }

    fn on_settled(&mut self) {
        let state = self.controller.state();
        self.error = state.error;
        if let Some(page) = state.data {
            self.pagination = PaginationReducer::reduce(
                self.pagination,
                PaginationIntent::Loaded { total: page.total },
            );
            self.records = page.items;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Char('n') | KeyCode::PageDown => return self.paginate(PaginationIntent::Next),
            KeyCode::Char('p') | KeyCode::PageUp => {
                return self.paginate(PaginationIntent::Previous)
            }
            KeyCode::Home => return self.paginate(PaginationIntent::First),
            KeyCode::End => return self.paginate(PaginationIntent::Last),
            KeyCode::Char('s') => return self.paginate(PaginationIntent::CycleSize),
            _ => {}
        }

        let outcome = RefCell::new(None);
        let refresh = Cell::new(false);
        let extractors = &self.extractors;
        let consumed = {
            let mut list = CardList::new(&self.records, extractors)
                .fields(&self.fields)
                .actions(&self.actions)
                .on_item_press(|record| {
                    *outcome.borrow_mut() = Some(E::on_press(record, extractors));
                })
                .on_action_press(|action, record| {
                    *outcome.borrow_mut() = Some(E::on_action(action, record, extractors));
                })
                .on_refresh(|| refresh.set(true));
            list.handle_key(&mut self.list_state, key)
        };

        if refresh.get() {
            self.reload();
            return ScreenAction::Handled;
        }
        match outcome.into_inner() {
            Some(action) => action,
            None if consumed => ScreenAction::Handled,
            None => ScreenAction::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, tick: usize) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let empty = if self.error.is_some() {
            "Could not load records"
        } else if self.controller.is_loading() {
            "Loading…"
        } else {
            E::empty_text()
        };
        let list = CardList::new(&self.records, &self.extractors)
            .fields(&self.fields)
            .actions(&self.actions)
            .title(self.title.clone())
            .empty_placeholder(empty)
            .refreshing(self.controller.is_loading(), tick)
            // Refresh itself is dispatched from handle_key; this enables the hint.
            .on_refresh(|| {});
        frame.render_stateful_widget(&list, chunks[0], &mut self.list_state);
        frame.render_widget(Paragraph::new(self.pager_line()), chunks[1]);
    }
}
