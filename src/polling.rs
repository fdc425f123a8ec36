//! Waiting for a resource to reach a terminal state.

use log::debug;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::error::{ProofError, Result};
use crate::runtime::Runtime;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(600_000);

/// A resource snapshot with a lifecycle status.
pub trait HasStatus {
    fn status(&self) -> &str;
}

/// Polling configuration.
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Delay between retrievals (default: 3s)
    pub interval: Duration,
    /// Overall deadline, checked after each retrieval (default: 10 minutes)
    pub timeout: Duration,
    /// Checked once per poll cycle, before each retrieval
    pub cancellation: Option<CancellationToken>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
            cancellation: None,
        }
    }
}

impl WaitOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// Calls `retrieve` until the snapshot's status is one of `terminal_states`.
///
/// At least one retrieval always happens. The deadline is checked only after
/// a retrieval, so a slow `retrieve` is bounded by the transport timeout, not
/// by this loop.
pub async fn poll_until_complete<T, F, Fut>(
    runtime: &dyn Runtime,
    mut retrieve: F,
    terminal_states: &[&str],
    label: &str,
    options: &WaitOptions,
) -> Result<T>
where
    T: HasStatus,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let start = runtime.now();

    loop {
        if options.is_cancelled() {
            debug!("{}: polling cancelled", label);
            return Err(ProofError::cancelled());
        }

        let resource = retrieve().await?;

        if terminal_states.contains(&resource.status()) {
            return Ok(resource);
        }

        let elapsed = runtime.now().saturating_duration_since(start);
        if elapsed >= options.timeout {
            return Err(ProofError::polling_timeout(format!(
                "{} did not complete within {}ms (last status: {})",
                label,
                options.timeout.as_millis(),
                resource.status()
            )));
        }

        debug!(
            "{}: status '{}', checking again in {}ms",
            label,
            resource.status(),
            options.interval.as_millis()
        );
        runtime.sleep(options.interval).await;
    }
}
