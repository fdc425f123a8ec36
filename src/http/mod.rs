//! HTTP transport layer: authenticated requests with timeout, retry and error mapping.

mod client;
mod retry;
mod transport;

pub use client::{HttpClient, Query, RequestOptions, query_pairs};
pub use retry::{AttemptOutcome, BASE_DELAY_MS, MAX_DELAY_MS, backoff, classify_response, retry_after};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

#[cfg(test)]
pub use transport::MockTransport;
