//! Cancellation and deadline propagation for store calls.
//!
//! Every store operation takes an [`ExecContext`]. Backend futures are raced
//! against the context with [`ExecContext::guard`]; losing the race drops the
//! backend future, which aborts the in-flight call.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::DataError;

/// A cancellable, deadline-bearing handle passed down a call chain.
///
/// Cloning shares the same token. Use [`child`](Self::child) to derive a
/// context that can be cancelled without affecting the parent.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl ExecContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Wrap an existing token (e.g. a server shutdown token).
    pub fn from_token(cancel: CancellationToken) -> Self {
        Self { cancel, deadline: None }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Set a deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, at: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current <= at => current,
            _ => at,
        });
        self
    }

    /// Derive a context whose token is cancelled when this one is, but not the reverse.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Run `fut` unless the context is cancelled or its deadline passes first.
    ///
    /// Cancellation wins over the deadline, and both win over a future that
    /// becomes ready at the same poll.
    pub async fn guard<T, F>(&self, op: &str, fut: F) -> Result<T, DataError>
    where
        F: Future<Output = Result<T, DataError>>,
    {
        if self.cancel.is_cancelled() {
            return Err(DataError::Cancelled(op.to_string()));
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(DataError::Cancelled(op.to_string())),
            _ = wait_for(self.deadline) => Err(DataError::DeadlineExceeded(op.to_string())),
            out = fut => out,
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
