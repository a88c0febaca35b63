use futures::future::BoxFuture;
use serde::Serialize;

use crate::api::types::{PageParams, Paginated};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::records::{CardAction, Extractors, FieldDescriptor};
use crate::ui::detail::DetailContent;
use crate::ui::screens::{ScreenAction, ScreenId};

pub const MORE_ACTION: &str = "more";

pub type PageFuture<T> = BoxFuture<'static, Result<Envelope<Paginated<T>>, ApiError>>;

/// Static description of one listable record type.
pub trait Entity: 'static {
    type Record: Serialize + Clone + Send + Sync + 'static;
    /// Parent the listing is scoped to (`()` for top-level tabs).
    type Scope: Clone + Send + Sync + 'static;

    const ID: ScreenId;

    fn title(scope: &Self::Scope) -> String;

    fn fetch(client: ApiClient, scope: Self::Scope, page: PageParams)
        -> PageFuture<Self::Record>;

    fn extractors() -> Extractors<Self::Record>;

    fn fields() -> Vec<FieldDescriptor<Self::Record>>;

    fn actions() -> Vec<CardAction> {
        Vec::new()
    }

    /// Whether the backend pages this listing.
    fn paginated() -> bool {
        true
    }

    fn empty_text() -> &'static str {
        "No records"
    }

    fn on_press(record: &Self::Record, extractors: &Extractors<Self::Record>) -> ScreenAction {
        Self::on_detail(record, extractors)
    }

    fn on_action(
        action: &CardAction,
        record: &Self::Record,
        extractors: &Extractors<Self::Record>,
    ) -> ScreenAction {
        match action.key.as_str() {
            MORE_ACTION => Self::on_detail(record, extractors),
            _ => ScreenAction::Handled,
        }
    }

    fn on_detail(record: &Self::Record, extractors: &Extractors<Self::Record>) -> ScreenAction {
        ScreenAction::OpenDetail(DetailContent::from_record(
            extractors.title(record),
            record,
        ))
    }
}

pub fn more_action() -> CardAction {
    CardAction::new(MORE_ACTION, "More").with_hotkey('m')
}
