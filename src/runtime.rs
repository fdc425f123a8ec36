//! Runtime abstraction for time-dependent operations.
//!
//! Retry backoff and polling both suspend and read the clock through this
//! trait, so their timing can be driven by a mock in tests.

use async_trait::async_trait;
use std::time::{Duration, Instant};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);

    /// Current monotonic time.
    fn now(&self) -> Instant;
}

/// Runtime backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRuntime;

#[async_trait]
impl Runtime for TokioRuntime {
    #[tracing::instrument(skip(self))]
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
