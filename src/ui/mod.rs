//! Terminal front end: one list screen per entity, a detail popup, the
//! toaster, and a header that spins while any call is in flight.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod pagination;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;
pub mod toaster;

pub use runtime::run;
