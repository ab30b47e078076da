//! Operation context.
//!
//! Every flag operation takes a [`Context`] that is handed unchanged to the
//! store. Stores drive their remote calls through [`Context::run`], which
//! ends the call early when the deadline passes or the context is cancelled.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::{StoreError, StoreResult};

/// Cancellation/timeout context for a single operation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<CancelHandle>,
}

impl Context {
    /// A context with no deadline that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Set a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Attach a cancellation handle.
    pub fn with_cancellation(mut self, handle: CancelHandle) -> Self {
        self.cancel = Some(handle);
        self
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` when there is no deadline.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Whether the attached handle has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelHandle::is_cancelled)
    }

    /// Check the context without waiting.
    pub fn check(&self) -> StoreResult<()> {
        if self.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Err(StoreError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Drive a store call under this context.
    ///
    /// Returns [`StoreError::Cancelled`] or [`StoreError::DeadlineExceeded`]
    /// if the context ends before `call` completes; `call` is dropped in
    /// that case.
    pub async fn run<F, T>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        self.check()?;

        let cancelled = async {
            match &self.cancel {
                Some(handle) => handle.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Err(StoreError::Cancelled),
            _ = expired => Err(StoreError::DeadlineExceeded),
            result = call => result,
        }
    }
}

/// Shared cancellation signal.
///
/// Clones observe the same signal; cancelling one cancels all of them.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Create a handle that has not been cancelled.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Cancel every context carrying this handle.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until the handle is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so this only returns once cancelled.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}
