//! Asynchronous call lifecycle.
//!
//! Every backend call goes through a [`Controller`] (or a
//! [`BatchController`]) that keeps its own `loading`/`data`/`error`, registers
//! with the shared [`BusyTracker`] while in flight, and raises an error
//! toast on failure. The tracker and toast queue are injected through a
//! [`LifecycleContext`] rather than living in globals.

mod batch;
mod busy;
mod cancel;
mod controller;
mod state;
mod toast;

pub use batch::{BatchController, BatchState};
pub use busy::{BusyGuard, BusyTracker, CallId};
pub use cancel::CancelToken;
pub use controller::{Controller, LifecycleContext, WrapOptions};
pub use state::{CallPhase, CallState};
pub use toast::{Toast, ToastKind, ToastQueue, DEFAULT_TOAST_TIMEOUT};
