use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;
use parking_lot::Mutex;

use crate::api::{ApiError, Envelope};
use crate::lifecycle::cancel::CancelToken;
use crate::lifecycle::controller::LifecycleContext;
use crate::lifecycle::toast::ToastKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Runs several operations concurrently under one loading/error pair.
///
/// Every operation registers with the busy tracker. The first failure
/// settles the batch and the remaining operations are dropped.
#[derive(Clone)]
pub struct BatchController {
    ctx: LifecycleContext,
    state: Arc<Mutex<BatchState>>,
    cancel: Arc<Mutex<CancelToken>>,
}

impl BatchController {
    pub fn new(ctx: LifecycleContext) -> Self {
        Self {
            ctx,
            state: Arc::new(Mutex::new(BatchState::default())),
            cancel: Arc::new(Mutex::new(CancelToken::new())),
        }
    }

    pub async fn execute_all<T, Fut>(&self, calls: Vec<Fut>) -> Result<Vec<T>, ApiError>
    where
        Fut: Future<Output = Result<Envelope<T>, ApiError>>,
    {
        let token = self.cancel.lock().clone();
        let guards: Vec<_> = calls.iter().map(|_| self.ctx.busy.guard()).collect();
        {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
        }

        let joined = try_join_all(
            calls
                .into_iter()
                .map(|call| async move { call.await.and_then(Envelope::into_result) }),
        );
        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => Err(ApiError::Cancelled),
            result = joined => result,
        };

        {
            let mut state = self.state.lock();
            state.loading = false;
            if let Err(err) = &outcome {
                if !err.is_cancelled() {
                    let message = err.user_message();
                    tracing::warn!(error = %err, "Batch failed");
                    state.error = Some(message.clone());
                    self.ctx.toasts.push(message, ToastKind::Error);
                }
            }
        }
        drop(guards);
        outcome
    }

    pub fn reset(&self) {
        *self.state.lock() = BatchState::default();
    }

    pub fn state(&self) -> BatchState {
        self.state.lock().clone()
    }

    pub fn cancel(&self) {
        let mut token = self.cancel.lock();
        token.cancel();
        *token = CancelToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use futures::FutureExt;

    #[tokio::test]
    async fn collects_results_in_order() {
        let ctx = LifecycleContext::default();
        let batch = BatchController::new(ctx.clone());
        let calls: Vec<BoxFuture<'static, Result<Envelope<u8>, ApiError>>> = vec![
            async {
                tokio::task::yield_now().await;
                Ok(Envelope::ok(1))
            }
            .boxed(),
            async { Ok(Envelope::ok(2)) }.boxed(),
        ];
        assert_eq!(batch.execute_all(calls).await.unwrap(), vec![1, 2]);
        assert_eq!(batch.state(), BatchState::default());
        assert!(!ctx.busy.is_busy());
    }

    #[tokio::test]
    async fn first_failure_fails_batch() {
        let ctx = LifecycleContext::default();
        let batch = BatchController::new(ctx.clone());
        let calls: Vec<BoxFuture<'static, Result<Envelope<u8>, ApiError>>> = vec![
            futures::future::pending().boxed(),
            async { Ok(Envelope::rejected(0, "second failed")) }.boxed(),
        ];
        let err = batch.execute_all(calls).await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        let state = batch.state();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(crate::api::UNKNOWN_ERROR));
        assert_eq!(ctx.toasts.snapshot()[0].message, crate::api::UNKNOWN_ERROR);
        assert!(!ctx.busy.is_busy());
    }

    #[tokio::test]
    async fn empty_batch_succeeds() {
        let batch = BatchController::new(LifecycleContext::default());
        let calls: Vec<BoxFuture<'static, Result<Envelope<u8>, ApiError>>> = Vec::new();
        assert!(batch.execute_all(calls).await.unwrap().is_empty());
    }
}
