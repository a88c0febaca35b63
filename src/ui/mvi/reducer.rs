//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens: `(State, Intent) -> State`.
///
/// Reducers are pure. Side effects such as issuing a fetch after the page
/// changed belong to the caller, which compares the old and new state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
