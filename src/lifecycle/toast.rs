//! Transient, auto-dismissing notifications.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

pub const DEFAULT_TOAST_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Shared toast queue. Ids are monotonic and never reused.
#[derive(Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<ToastInner>>,
    default_ttl: Duration,
}

#[derive(Default)]
struct ToastInner {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TOAST_TIMEOUT)
    }

    pub fn with_timeout(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ToastInner::default())),
            default_ttl,
        }
    }

    pub fn push(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.push_with_timeout(message, kind, self.default_ttl)
    }

    pub fn push_with_timeout(
        &self,
        message: impl Into<String>,
        kind: ToastKind,
        ttl: Duration,
    ) -> u64 {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl,
        });
        id
    }

    pub fn dismiss(&self, id: u64) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.toasts.len();
        inner.toasts.retain(|t| t.id != id);
        inner.toasts.len() != before
    }

    /// Dismisses the most recent toast, returning its id.
    pub fn dismiss_latest(&self) -> Option<u64> {
        let mut inner = self.inner.lock();
        inner.toasts.pop().map(|t| t.id)
    }

    /// Drops every toast whose timeout elapsed by `now`. Returns how many were removed.
    pub fn expire(&self, now: Instant) -> usize {
        let mut inner = self.inner.lock();
        let before = inner.toasts.len();
        inner.toasts.retain(|t| !t.is_expired(now));
        before - inner.toasts.len()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.lock().toasts.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let toasts = ToastQueue::new();
        let a = toasts.push("a", ToastKind::Info);
        let b = toasts.push("b", ToastKind::Error);
        toasts.dismiss(b);
        let c = toasts.push("c", ToastKind::Success);
        assert!(a < b && b < c);
    }

    #[test]
    fn dismiss_removes_only_target() {
        let toasts = ToastQueue::new();
        let a = toasts.push("a", ToastKind::Info);
        let b = toasts.push("b", ToastKind::Info);
        assert!(toasts.dismiss(a));
        assert!(!toasts.dismiss(a));
        let left: Vec<u64> = toasts.snapshot().iter().map(|t| t.id).collect();
        assert_eq!(left, vec![b]);
    }

    #[test]
    fn expire_honours_each_timeout() {
        let toasts = ToastQueue::new();
        toasts.push_with_timeout("short", ToastKind::Info, Duration::from_millis(100));
        toasts.push("default", ToastKind::Error);
        let now = Instant::now();

        assert_eq!(toasts.expire(now + Duration::from_millis(200)), 1);
        assert_eq!(toasts.snapshot()[0].message, "default");
        assert_eq!(toasts.expire(now + Duration::from_millis(3100)), 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn default_timeout_is_three_seconds() {
        let toasts = ToastQueue::new();
        toasts.push("x", ToastKind::Warning);
        assert_eq!(toasts.snapshot()[0].ttl, Duration::from_millis(3000));
    }

    #[test]
    fn dismiss_latest_pops_newest() {
        let toasts = ToastQueue::new();
        toasts.push("a", ToastKind::Info);
        let b = toasts.push("b", ToastKind::Info);
        assert_eq!(toasts.dismiss_latest(), Some(b));
        assert_eq!(toasts.len(), 1);
    }
}
