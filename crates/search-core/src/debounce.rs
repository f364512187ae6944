// search-core/src/debounce.rs
//! Temporal control for live search: debounce and throttle.
//!
//! A debounced call is a spawned tokio task that sleeps for the quiet period
//! before running. A newer call aborts the pending one, so only the input
//! that was followed by silence gets searched.

use std::future::Future;
use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::Instant;

/// How a debounced call ended
#[derive(Debug, PartialEq, Eq)]
pub enum TaskOutcome<T> {
    Completed(T),
    /// Superseded by a newer call, or cancelled explicitly
    Cancelled,
    /// The callback panicked
    Failed(String),
}

/// Handle to one scheduled call
pub struct DebouncedTask<T> {
    handle: JoinHandle<T>,
}

impl<T> DebouncedTask<T> {
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the call to run or be cancelled
    pub async fn outcome(self) -> TaskOutcome<T> {
        match self.handle.await {
            Ok(value) => TaskOutcome::Completed(value),
            Err(e) if e.is_cancelled() => TaskOutcome::Cancelled,
            Err(e) => TaskOutcome::Failed(e.to_string()),
        }
    }
}

/// Delays a callback until calls stop arriving for `wait`.
///
/// Dropping the debouncer cancels a call that has not run yet.
pub struct Debouncer {
    wait: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self { wait, pending: None }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule `callback` after the quiet period, cancelling the previous
    /// call if it has not run yet. Must be called within a tokio runtime.
    pub fn call<F, Fut, T>(&mut self, callback: F) -> DebouncedTask<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        self.cancel();

        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback().await
        });
        self.pending = Some(handle.abort_handle());
        DebouncedTask { handle }
    }

    /// Cancel the pending call. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) if !pending.is_finished() => {
                pending.abort();
                true
            }
            _ => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lets at most one call through per `limit` window
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    /// Whether a call at `now` may run; if so, the window restarts at `now`
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }
}
