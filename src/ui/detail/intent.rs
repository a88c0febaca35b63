use crate::ui::detail::state::DetailContent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Open(DetailContent),
    Close,
    ScrollUp,
    ScrollDown,
}

impl Intent for DetailIntent {}
