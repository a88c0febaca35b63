use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailDialogState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailDialogState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open(content) => DetailDialogState::Visible {
                content,
                scroll_offset: 0,
            },
            DetailIntent::Close => DetailDialogState::Hidden,
            DetailIntent::ScrollUp => match state {
                DetailDialogState::Visible {
                    content,
                    scroll_offset,
                } => DetailDialogState::Visible {
                    content,
                    scroll_offset: scroll_offset.saturating_sub(1),
                },
                other => other,
            },
            DetailIntent::ScrollDown => match state {
                DetailDialogState::Visible {
                    content,
                    scroll_offset,
                } => {
                    let max = content.rows.len().saturating_sub(1);
                    DetailDialogState::Visible {
                        content,
                        scroll_offset: (scroll_offset + 1).min(max),
                    }
                }
                other => other,
            },
        }
    }
}
