//! Outbound request lifecycle management.
//!
//! [`RequestLifecycle`] guarantees at most one outstanding catalog call
//! per session. Starting a new call cancels the previous one, so a
//! superseded response can never overwrite newer state, even when it
//! arrives after the newer call started. After teardown the manager
//! permanently stops mutating session state.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::model::{RequestToken, SearchAction, SearchError, SearchSession};

#[derive(Debug, Default)]
struct LifecycleInner {
    current: Option<RequestToken>,
    generation: u64,
    torn_down: bool,
}

/// Single-flight manager for one session's outbound calls.
///
/// Cheap to clone; clones share the same in-flight slot and teardown
/// flag, which is what lets a newer `execute` supersede an older one
/// still awaiting its response.
#[derive(Clone)]
pub struct RequestLifecycle {
    session: Arc<Mutex<SearchSession>>,
    inner: Arc<Mutex<LifecycleInner>>,
}

impl RequestLifecycle {
    pub fn new(session: Arc<Mutex<SearchSession>>) -> Self {
        Self {
            session,
            inner: Arc::new(Mutex::new(LifecycleInner::default())),
        }
    }

    /// Run one outbound call through the lifecycle.
    ///
    /// Any previous in-flight call is cancelled first. Returns:
    ///
    /// - `Ok(Some(value))` — the call completed and is still the current
    ///   one; `loading` has been cleared and the caller applies the value.
    /// - `Ok(None)` — the session was already torn down (before or during
    ///   the call); nothing was started or nothing may be applied.
    /// - `Err(SearchError::Cancelled)` — the call was superseded or
    ///   explicitly cancelled. Session state is untouched; callers swallow
    ///   this.
    /// - `Err(other)` — the call failed; the session's `error` field has
    ///   been set (when the call was still current) and the error is
    ///   re-raised for caller-level handling.
    pub async fn execute<F, Fut, T>(&self, request: F) -> Result<Option<T>, SearchError>
    where
        F: FnOnce(RequestToken) -> Fut,
        Fut: Future<Output = Result<T, SearchError>>,
    {
        let token = {
            let mut inner = self.inner.lock().await;
            if let Some(previous) = inner.current.take() {
                tracing::debug!(
                    generation = previous.generation(),
                    "cancelling superseded request"
                );
                previous.cancel();
            }
            if inner.torn_down {
                return Ok(None);
            }
            inner.generation += 1;
            let token = RequestToken::new(inner.generation);
            inner.current = Some(token.clone());
            token
        };

        {
            // SetError first: clearing the error also clears loading.
            let mut session = self.session.lock().await;
            session.dispatch(SearchAction::SetError(None));
            session.dispatch(SearchAction::SetLoading(true));
        }

        let outcome = request(token.clone()).await;

        let mut inner = self.inner.lock().await;
        let is_current = inner
            .current
            .as_ref()
            .is_some_and(|current| current.generation() == token.generation());

        match outcome {
            Ok(value) => {
                if inner.torn_down {
                    return Ok(None);
                }
                if !is_current || token.is_cancelled() {
                    // The call resolved without honoring its cancellation;
                    // report it through the cancellation channel so the
                    // stale value is never applied.
                    return Err(SearchError::Cancelled);
                }
                inner.current = None;
                drop(inner);
                let mut session = self.session.lock().await;
                session.dispatch(SearchAction::SetLoading(false));
                Ok(Some(value))
            }
            Err(err) if err.is_cancelled() => Err(err),
            Err(err) => {
                if !inner.torn_down && is_current {
                    inner.current = None;
                    drop(inner);
                    tracing::debug!(error = %err, "surfacing request failure");
                    let mut session = self.session.lock().await;
                    session.dispatch(SearchAction::SetError(Some(err.to_string())));
                }
                Err(err)
            }
        }
    }

    /// Cancel the current in-flight call, if any. A no-op otherwise.
    ///
    /// The loading flag is cleared here: once cancelled, no call is
    /// genuinely outstanding. The cancelled call's own rejection still
    /// never mutates state.
    pub async fn cancel_request(&self) {
        let inner = self.inner.lock().await;
        if let Some(current) = &inner.current {
            tracing::debug!(generation = current.generation(), "cancelling request");
            current.cancel();
            let mut session = self.session.lock().await;
            session.dispatch(SearchAction::SetLoading(false));
        }
    }

    /// End the owning session: cancel any in-flight call and permanently
    /// disable state mutation from this manager.
    pub async fn teardown(&self) {
        let mut inner = self.inner.lock().await;
        inner.torn_down = true;
        if let Some(current) = inner.current.take() {
            current.cancel();
        }
    }
}
