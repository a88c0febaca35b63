use crate::config::PAGE_SIZES;
use crate::ui::mvi::Reducer;
use crate::ui::pagination::intent::PaginationIntent;
use crate::ui::pagination::state::PaginationState;

pub struct PaginationReducer;

impl Reducer for PaginationReducer {
    type State = PaginationState;
    type Intent = PaginationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaginationIntent::Next => PaginationState {
                page: (state.page + 1).min(state.total_pages()),
                ..state
            },
            PaginationIntent::Previous => PaginationState {
                page: state.page.saturating_sub(1).max(1),
                ..state
            },
            PaginationIntent::First => PaginationState { page: 1, ..state },
            PaginationIntent::Last => PaginationState {
                page: state.total_pages(),
                ..state
            },
            PaginationIntent::CycleSize => {
                let next = PAGE_SIZES
                    .iter()
                    .position(|size| *size == state.page_size)
                    .map(|i| PAGE_SIZES[(i + 1) % PAGE_SIZES.len()])
                    .unwrap_or(PAGE_SIZES[0]);
                PaginationState {
                    page: 1,
                    page_size: next,
                    ..state
                }
            }
            PaginationIntent::SetSize(size) if size > 0 && size != state.page_size => {
                PaginationState {
                    page: 1,
                    page_size: size,
                    ..state
                }
            }
            PaginationIntent::SetSize(_) => state,
            PaginationIntent::Loaded { total } => {
                let loaded = PaginationState { total, ..state };
                PaginationState {
                    page: loaded.page.min(loaded.total_pages()),
                    ..loaded
                }
            }
        }
    }
}
