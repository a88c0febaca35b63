//! Generic record renderer.
//!
//! A screen describes its record type once (an [`Extractors`] bundle, a
//! list of [`FieldDescriptor`]s and [`CardAction`]s) and hands that plus a
//! slice of records to [`CardList`]. The renderer never sorts, filters, or
//! fetches: it projects records into [`CardView`]s in input order and
//! reports presses back through caller-supplied callbacks.

mod card;
mod descriptor;
mod list;
mod path;
mod tone;

pub use card::{compose_card, initials, render_list, Avatar, CardView, FieldRow, PLACEHOLDER};
pub use descriptor::{CardAction, Extractors, FieldDescriptor, MetaPill};
pub use list::{action_button, wrap_value, CardList, CardListState, MIN_ACTION_WIDTH};
pub use path::{display_value, resolve_path};
pub use tone::{Tone, TonePalette};
