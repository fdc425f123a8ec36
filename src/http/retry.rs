//! Retry policy: backoff schedule and per-attempt outcome classification.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;

use super::transport::HttpResponse;

/// Base delay for the first retry in milliseconds.
pub const BASE_DELAY_MS: u64 = 1000;

/// Upper bound for any backoff delay in milliseconds.
pub const MAX_DELAY_MS: u64 = 10_000;

/// Exponential backoff for a 0-based attempt index: `min(1000 * 2^attempt, 10000)` ms.
pub fn backoff(attempt: u32) -> Duration {
    let delay = 2u64
        .checked_pow(attempt)
        .and_then(|factor| factor.checked_mul(BASE_DELAY_MS))
        .map_or(MAX_DELAY_MS, |ms| ms.min(MAX_DELAY_MS));
    Duration::from_millis(delay)
}

/// Reads an integer `Retry-After` header (seconds).
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// What to do with a response received on a given attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Wait the given delay, then try again.
    Retry(Duration),
    /// Parse the body and finish the call, successfully or not.
    Complete,
}

/// Decides whether a received response is retried.
///
/// Only 429 and 5xx are transient, and only while attempts remain.
pub fn classify_response(response: &HttpResponse, attempt: u32, max_retries: u32) -> AttemptOutcome {
    if attempt >= max_retries {
        return AttemptOutcome::Complete;
    }

    match response.status {
        429 => AttemptOutcome::Retry(retry_after(&response.headers).unwrap_or_else(|| backoff(attempt))),
        s if s >= 500 => AttemptOutcome::Retry(backoff(attempt)),
        _ => AttemptOutcome::Complete,
    }
}
