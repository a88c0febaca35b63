//! Process-wide set of in-flight calls backing the global busy indicator.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Handle of one registered in-flight call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallId(u64);

/// Shared busy tracker. Busy iff at least one call is registered.
///
/// A set rather than a counter so that finishing the same call twice
/// cannot clear the indicator while siblings are still running.
#[derive(Clone, Default)]
pub struct BusyTracker {
    inner: Arc<BusyInner>,
}

#[derive(Default)]
struct BusyInner {
    next_id: AtomicU64,
    in_flight: Mutex<HashSet<CallId>>,
}

impl BusyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight call.
    pub fn begin(&self) -> CallId {
        let id = CallId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let mut in_flight = self.inner.in_flight.lock();
        if in_flight.is_empty() {
            tracing::debug!("Global busy indicator asserted");
        }
        in_flight.insert(id);
        id
    }

    /// Unregisters a call. Returns false if it was already finished.
    pub fn finish(&self, id: CallId) -> bool {
        let mut in_flight = self.inner.in_flight.lock();
        let removed = in_flight.remove(&id);
        if removed && in_flight.is_empty() {
            tracing::debug!("Global busy indicator cleared");
        }
        removed
    }

    /// Registers a call that finishes when the guard drops.
    pub fn guard(&self) -> BusyGuard {
        BusyGuard {
            tracker: self.clone(),
            id: self.begin(),
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.inner.in_flight.lock().is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.lock().len()
    }
}

/// Keeps one call registered for its lifetime.
pub struct BusyGuard {
    tracker: BusyTracker,
    id: CallId,
}

impl BusyGuard {
    pub fn id(&self) -> CallId {
        self.id
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.tracker.finish(self.id);
    }
}
