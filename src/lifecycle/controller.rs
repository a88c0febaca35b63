//! Per-operation controller: local loading/data/error, global busy tracking,
//! and a toast on failure.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use parking_lot::Mutex;

use crate::api::{ApiError, Envelope};
use crate::lifecycle::busy::BusyTracker;
use crate::lifecycle::cancel::CancelToken;
use crate::lifecycle::state::CallState;
use crate::lifecycle::toast::{ToastKind, ToastQueue};

/// Shared collaborators every controller reports into.
#[derive(Clone, Default)]
pub struct LifecycleContext {
    pub busy: BusyTracker,
    pub toasts: ToastQueue,
}

impl LifecycleContext {
    pub fn new(busy: BusyTracker, toasts: ToastQueue) -> Self {
        Self { busy, toasts }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    pub show_global_indicator: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            show_global_indicator: true,
        }
    }
}

type Operation<A, T> =
    Arc<dyn Fn(A) -> BoxFuture<'static, Result<Envelope<T>, ApiError>> + Send + Sync>;

/// Local state plus the number of `execute` calls still running.
struct Slot<T> {
    state: CallState<T>,
    outstanding: usize,
}

/// Wraps one asynchronous operation returning an [`Envelope`].
pub struct Controller<A, T> {
    operation: Operation<A, T>,
    ctx: LifecycleContext,
    options: WrapOptions,
    slot: Arc<Mutex<Slot<T>>>,
    cancel: Arc<Mutex<CancelToken>>,
}

impl<A, T> Clone for Controller<A, T> {
    fn clone(&self) -> Self {
        Self {
            operation: Arc::clone(&self.operation),
            ctx: self.ctx.clone(),
            options: self.options,
            slot: Arc::clone(&self.slot),
            cancel: Arc::clone(&self.cancel),
        }
    }
}

/// Settles one `execute` however it ends, including when its future is
/// dropped mid-flight. Only the last outstanding call clears `loading`, so a
/// superseded call cannot hide a newer one still in flight.
struct LoadingFlag<'a, T>(&'a Mutex<Slot<T>>);

impl<T> Drop for LoadingFlag<'_, T> {
    fn drop(&mut self) {
        let mut slot = self.0.lock();
        slot.outstanding = slot.outstanding.saturating_sub(1);
        if slot.outstanding == 0 {
            slot.state.loading = false;
        }
    }
}

impl<A, T> Controller<A, T>
where
    A: Send + 'static,
    T: Clone + Send + 'static,
{
    pub fn wrap<F, Fut>(operation: F, ctx: LifecycleContext, options: WrapOptions) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Envelope<T>, ApiError>> + Send + 'static,
    {
        Self {
            operation: Arc::new(move |args| operation(args).boxed()),
            ctx,
            options,
            slot: Arc::new(Mutex::new(Slot {
                state: CallState::default(),
                outstanding: 0,
            })),
            cancel: Arc::new(Mutex::new(CancelToken::new())),
        }
    }

    /// Runs the operation once and settles local and global state.
    ///
    /// A cancelled call returns [`ApiError::Cancelled`] without recording an
    /// error or raising a toast.
    pub async fn execute(&self, args: A) -> Result<T, ApiError> {
        let token = self.cancel.lock().clone();
        let _busy = self
            .options
            .show_global_indicator
            .then(|| self.ctx.busy.guard());
        {
            let mut slot = self.slot.lock();
            slot.outstanding += 1;
            slot.state.loading = true;
            slot.state.error = None;
        }
        let _loading = LoadingFlag(&self.slot);

        let call = (self.operation)(args);
        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => Err(ApiError::Cancelled),
            result = call => result.and_then(Envelope::into_result),
        };

        match outcome {
            Ok(data) => {
                self.slot.lock().state.data = Some(data.clone());
                Ok(data)
            }
            Err(ApiError::Cancelled) => {
                tracing::debug!("Call cancelled before it settled");
                Err(ApiError::Cancelled)
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(error = %err, "Call failed");
                self.slot.lock().state.error = Some(message.clone());
                self.ctx.toasts.push(message, ToastKind::Error);
                Err(err)
            }
        }
    }

    /// Returns local state to its initial value. Global state is untouched.
    ///
    /// A call still in flight keeps running and records its outcome when it
    /// settles.
    pub fn reset(&self) {
        self.slot.lock().state = CallState::default();
    }

    pub fn state(&self) -> CallState<T> {
        self.slot.lock().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.slot.lock().state.loading
    }

    /// Cancels every call in flight. Later calls run normally.
    pub fn cancel(&self) {
        let mut token = self.cancel.lock();
        token.cancel();
        *token = CancelToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::state::CallPhase;
    use tokio::sync::oneshot;

    type Reply = oneshot::Receiver<Result<Envelope<u32>, ApiError>>;

    fn gated(ctx: &LifecycleContext) -> Controller<Reply, u32> {
        Controller::wrap(
            |rx: Reply| async move { rx.await.unwrap_or(Err(ApiError::Cancelled)) },
            ctx.clone(),
            WrapOptions::default(),
        )
    }

    async fn settle_until(ctx: &LifecycleContext, in_flight: usize) {
        while ctx.busy.in_flight() != in_flight {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn success_stores_data() {
        let ctx = LifecycleContext::default();
        let ctrl = Controller::wrap(
            |n: u32| async move { Ok(Envelope::ok(n * 2)) },
            ctx.clone(),
            WrapOptions::default(),
        );
        assert_eq!(ctrl.execute(21).await.unwrap(), 42);
        let state = ctrl.state();
        assert_eq!(state.data, Some(42));
        assert_eq!(state.phase(), CallPhase::Success);
        assert!(!ctx.busy.is_busy());
        assert!(ctx.toasts.is_empty());
    }

    #[tokio::test]
    async fn failure_sets_error_and_toasts() {
        let ctx = LifecycleContext::default();
        let ctrl = Controller::wrap(
            |_: ()| async {
                Err::<Envelope<u32>, _>(ApiError::Status {
                    url: "x".into(),
                    status: 400,
                    body: serde_json::json!({"detail": "Bad thing"}),
                })
            },
            ctx.clone(),
            WrapOptions::default(),
        );
        let err = ctrl.execute(()).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        let state = ctrl.state();
        assert_eq!(state.error.as_deref(), Some("Bad thing"));
        assert!(!state.loading);
        let toasts = ctx.toasts.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Bad thing");
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn rejected_envelope_is_a_failure() {
        let ctx = LifecycleContext::default();
        let ctrl = Controller::wrap(
            |_: ()| async { Ok(Envelope::rejected(0u32, "Quota exceeded")) },
            ctx.clone(),
            WrapOptions::default(),
        );
        assert!(ctrl.execute(()).await.is_err());
        assert_eq!(ctrl.state().error.as_deref(), Some(crate::api::UNKNOWN_ERROR));
        assert_eq!(ctx.toasts.snapshot()[0].message, crate::api::UNKNOWN_ERROR);
    }

    #[tokio::test]
    async fn busy_flag_spans_overlapping_calls() {
        let ctx = LifecycleContext::default();
        let ctrl = gated(&ctx);
        let mut senders = Vec::new();
        let mut handles = Vec::new();
        for _ in 0..3 {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            let c = ctrl.clone();
            handles.push(tokio::spawn(async move { c.execute(rx).await }));
        }
        settle_until(&ctx, 3).await;

        let mut senders = senders.into_iter();
        let (first, second, third) = (
            senders.next().unwrap(),
            senders.next().unwrap(),
            senders.next().unwrap(),
        );
        let mut handles = handles.into_iter();
        let (h1, h2, h3) = (
            handles.next().unwrap(),
            handles.next().unwrap(),
            handles.next().unwrap(),
        );

        second.send(Ok(Envelope::ok(2))).unwrap();
        assert_eq!(h2.await.unwrap().unwrap(), 2);
        assert!(ctx.busy.is_busy());

        first
            .send(Err(ApiError::Rejected {
                message: Some("nope".into()),
            }))
            .unwrap();
        assert!(h1.await.unwrap().is_err());
        assert!(ctx.busy.is_busy());

        third.send(Ok(Envelope::ok(3))).unwrap();
        assert_eq!(h3.await.unwrap().unwrap(), 3);
        assert!(!ctx.busy.is_busy());
    }

    #[tokio::test]
    async fn without_global_indicator_busy_is_untouched() {
        let ctx = LifecycleContext::default();
        let ctrl = Controller::wrap(
            |rx: Reply| async move { rx.await.unwrap_or(Err(ApiError::Cancelled)) },
            ctx.clone(),
            WrapOptions {
                show_global_indicator: false,
            },
        );
        let (tx, rx) = oneshot::channel();
        let c = ctrl.clone();
        let handle = tokio::spawn(async move { c.execute(rx).await });
        while !ctrl.is_loading() {
            tokio::task::yield_now().await;
        }
        assert!(!ctx.busy.is_busy());
        tx.send(Ok(Envelope::ok(1))).unwrap();
        handle.await.unwrap().unwrap();
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn reset_is_idempotent_from_every_state() {
        let ctx = LifecycleContext::default();
        let ok = Controller::wrap(
            |_: ()| async { Ok(Envelope::ok(1u32)) },
            ctx.clone(),
            WrapOptions::default(),
        );
        ok.reset();
        ok.reset();
        assert_eq!(ok.state(), CallState::default());

        ok.execute(()).await.unwrap();
        ok.reset();
        ok.reset();
        assert_eq!(ok.state(), CallState::default());

        let failing = Controller::wrap(
            |_: ()| async { Err::<Envelope<u32>, _>(ApiError::InvalidUrl { url: "x".into() }) },
            ctx.clone(),
            WrapOptions::default(),
        );
        let _ = failing.execute(()).await;
        assert_eq!(failing.state().phase(), CallPhase::Failure);
        failing.reset();
        failing.reset();
        assert_eq!(failing.state(), CallState::default());
        assert_eq!(ctx.toasts.len(), 1);
    }

    #[tokio::test]
    async fn reset_while_loading_clears_state() {
        let ctx = LifecycleContext::default();
        let ctrl = gated(&ctx);
        let (tx, rx) = oneshot::channel();
        let c = ctrl.clone();
        let handle = tokio::spawn(async move { c.execute(rx).await });
        settle_until(&ctx, 1).await;
        assert_eq!(ctrl.state().phase(), CallPhase::Loading);

        ctrl.reset();
        ctrl.reset();
        assert_eq!(ctrl.state(), CallState::default());
        // The global indicator still tracks the running call.
        assert!(ctx.busy.is_busy());

        tx.send(Ok(Envelope::ok(5))).unwrap();
        assert_eq!(handle.await.unwrap().unwrap(), 5);
        let settled = ctrl.state();
        assert_eq!(settled.data, Some(5));
        assert!(!settled.loading);
        assert!(!ctx.busy.is_busy());
    }

    #[tokio::test]
    async fn superseded_call_does_not_clear_loading_of_newer_call() {
        let ctx = LifecycleContext::default();
        let ctrl = gated(&ctx);

        let (_old_tx, old_rx) = oneshot::channel();
        let old = ctrl.execute(old_rx);
        tokio::pin!(old);
        assert!(futures::poll!(old.as_mut()).is_pending());
        assert!(ctrl.is_loading());

        ctrl.cancel();
        let (new_tx, new_rx) = oneshot::channel();
        let c = ctrl.clone();
        let newer = tokio::spawn(async move { c.execute(new_rx).await });
        settle_until(&ctx, 2).await;

        // The superseded call settles only now, after the newer one started.
        assert!(matches!(old.await, Err(ApiError::Cancelled)));
        assert!(ctrl.is_loading());
        assert!(ctx.busy.is_busy());

        new_tx.send(Ok(Envelope::ok(9))).unwrap();
        assert_eq!(newer.await.unwrap().unwrap(), 9);
        assert!(!ctrl.is_loading());
        assert_eq!(ctrl.state().data, Some(9));
        assert!(!ctx.busy.is_busy());
    }

    #[tokio::test]
    async fn cancel_settles_without_error_or_toast() {
        let ctx = LifecycleContext::default();
        let ctrl = gated(&ctx);
        let (_tx, rx) = oneshot::channel();
        let c = ctrl.clone();
        let handle = tokio::spawn(async move { c.execute(rx).await });
        settle_until(&ctx, 1).await;

        ctrl.cancel();
        let result = handle.await.unwrap();
        assert!(matches!(result, Err(ApiError::Cancelled)));
        let state = ctrl.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(ctx.toasts.is_empty());
        assert!(!ctx.busy.is_busy());

        let (tx, rx) = oneshot::channel();
        tx.send(Ok(Envelope::ok(7))).unwrap();
        assert_eq!(ctrl.execute(rx).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn next_execute_clears_previous_error() {
        let ctx = LifecycleContext::default();
        let ctrl = gated(&ctx);
        let (tx, rx) = oneshot::channel();
        tx.send(Err(ApiError::Rejected { message: None })).unwrap();
        let _ = ctrl.execute(rx).await;
        assert!(ctrl.state().error.is_some());

        let (tx, rx) = oneshot::channel();
        let c = ctrl.clone();
        let handle = tokio::spawn(async move { c.execute(rx).await });
        settle_until(&ctx, 1).await;
        let pending = ctrl.state();
        assert!(pending.loading);
        assert!(pending.error.is_none());
        tx.send(Ok(Envelope::ok(1))).unwrap();
        handle.await.unwrap().unwrap();
    }
}
