//! Typed failures for every client operation.
//!
//! A [`ProofError`] is built at the point of failure (a bad HTTP status, an
//! exhausted retry loop, an expired polling deadline) and is never mutated
//! afterwards. HTTP statuses are mapped to variants by
//! [`ProofError::from_response`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const NETWORK_ERROR_CODE: &str = "network_error";
pub const TIMEOUT_CODE: &str = "timeout";
pub const POLLING_TIMEOUT_CODE: &str = "polling_timeout";
pub const CANCELLED_CODE: &str = "cancelled";
pub const DECODE_CODE: &str = "invalid_json";

pub const DEFAULT_NETWORK_MESSAGE: &str = "Network request failed";
pub const DEFAULT_TIMEOUT_MESSAGE: &str = "Request timed out";
pub const DEFAULT_POLLING_TIMEOUT_MESSAGE: &str = "Polling timed out waiting for completion";

/// Error envelope returned by the API under the `error` key of a non-2xx body.
///
/// Every field is optional; a missing or malformed envelope is treated the
/// same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<Value>,
    pub request_id: Option<String>,
    /// Seconds to wait before retrying (rate limit and lockout errors)
    #[serde(rename = "retryAfter")]
    pub retry_after: Option<u64>,
    /// Remaining attempts before lockout (auth endpoints only)
    pub remaining_attempts: Option<u32>,
}

impl ApiError {
    /// Extracts the envelope from a parsed response body, if there is one.
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("error")
            .and_then(|error| serde_json::from_value(error.clone()).ok())
    }
}

/// Fields shared by every [`ProofError`] variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub code: String,
    pub details: Option<Value>,
    pub request_id: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.details = details;
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors returned by the client.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProofError {
    /// The request was rejected as malformed (HTTP 400)
    #[error("{0}")]
    Validation(ErrorInfo),

    /// The API key is missing or invalid (HTTP 401)
    #[error("{0}")]
    Authentication(ErrorInfo),

    /// Authenticated but not allowed (HTTP 403)
    #[error("{0}")]
    Forbidden(ErrorInfo),

    /// No such resource (HTTP 404)
    #[error("{0}")]
    NotFound(ErrorInfo),

    /// The resource is in a conflicting state (HTTP 409)
    #[error("{0}")]
    Conflict(ErrorInfo),

    /// Throttled (HTTP 429)
    #[error("{info}")]
    RateLimit {
        info: ErrorInfo,
        /// Seconds the server asked us to wait
        retry_after: Option<u64>,
        remaining_attempts: Option<u32>,
    },

    /// Upstream fault (HTTP 5xx)
    #[error("{info}")]
    Server { status: u16, info: ErrorInfo },

    /// Any other non-success status
    #[error("{info}")]
    Api { status: u16, info: ErrorInfo },

    /// The request never completed a round trip
    #[error("{0}")]
    Network(ErrorInfo),

    /// A single attempt exceeded its deadline
    #[error("{0}")]
    Timeout(ErrorInfo),

    /// A resource did not reach a terminal state in time
    #[error("{0}")]
    PollingTimeout(ErrorInfo),

    /// The wait was cancelled through its cancellation token
    #[error("{0}")]
    Cancelled(ErrorInfo),

    /// A payload could not be encoded, or a success body had an unexpected shape.
    /// `status` is 0 when nothing was received.
    #[error("{info}")]
    Decode { status: u16, info: ErrorInfo },
}

impl ProofError {
    /// Maps a non-success status and optional error envelope to a typed error.
    pub fn from_response(status: u16, error: Option<ApiError>) -> Self {
        let error = error.unwrap_or_default();
        let code = error.code.unwrap_or_else(|| format!("http_{}", status));
        let message = error
            .message
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        let info = ErrorInfo::new(message, code)
            .with_details(error.details)
            .with_request_id(error.request_id);

        match status {
            400 => ProofError::Validation(info),
            401 => ProofError::Authentication(info),
            403 => ProofError::Forbidden(info),
            404 => ProofError::NotFound(info),
            409 => ProofError::Conflict(info),
            429 => ProofError::RateLimit {
                info,
                retry_after: error.retry_after,
                remaining_attempts: error.remaining_attempts,
            },
            s if s >= 500 => ProofError::Server { status: s, info },
            s => ProofError::Api { status: s, info },
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        ProofError::Network(ErrorInfo::new(message, NETWORK_ERROR_CODE))
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        ProofError::Timeout(ErrorInfo::new(message, TIMEOUT_CODE))
    }

    pub fn polling_timeout(message: impl Into<String>) -> Self {
        ProofError::PollingTimeout(ErrorInfo::new(message, POLLING_TIMEOUT_CODE))
    }

    pub fn cancelled() -> Self {
        ProofError::Cancelled(ErrorInfo::new("Operation was cancelled", CANCELLED_CODE))
    }

    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        ProofError::Decode {
            status,
            info: ErrorInfo::new(message, DECODE_CODE),
        }
    }

    pub fn info(&self) -> &ErrorInfo {
        match self {
            ProofError::Validation(info)
            | ProofError::Authentication(info)
            | ProofError::Forbidden(info)
            | ProofError::NotFound(info)
            | ProofError::Conflict(info)
            | ProofError::Network(info)
            | ProofError::Timeout(info)
            | ProofError::PollingTimeout(info)
            | ProofError::Cancelled(info) => info,
            ProofError::RateLimit { info, .. }
            | ProofError::Server { info, .. }
            | ProofError::Api { info, .. }
            | ProofError::Decode { info, .. } => info,
        }
    }

    /// HTTP status behind the error, or 0 when no response was involved.
    pub fn status_code(&self) -> u16 {
        match self {
            ProofError::Validation(_) => 400,
            ProofError::Authentication(_) => 401,
            ProofError::Forbidden(_) => 403,
            ProofError::NotFound(_) => 404,
            ProofError::Conflict(_) => 409,
            ProofError::RateLimit { .. } => 429,
            ProofError::Server { status, .. }
            | ProofError::Api { status, .. }
            | ProofError::Decode { status, .. } => *status,
            ProofError::Network(_)
            | ProofError::Timeout(_)
            | ProofError::PollingTimeout(_)
            | ProofError::Cancelled(_) => 0,
        }
    }

    pub fn code(&self) -> &str {
        &self.info().code
    }

    pub fn message(&self) -> &str {
        &self.info().message
    }

    pub fn details(&self) -> Option<&Value> {
        self.info().details.as_ref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.info().request_id.as_deref()
    }

    pub fn retry_after(&self) -> Option<u64> {
        match self {
            ProofError::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    pub fn remaining_attempts(&self) -> Option<u32> {
        match self {
            ProofError::RateLimit {
                remaining_attempts, ..
            } => *remaining_attempts,
            _ => None,
        }
    }

    /// Whether the failure was transient at the time it was raised.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProofError::RateLimit { .. }
                | ProofError::Server { .. }
                | ProofError::Network(_)
                | ProofError::Timeout(_)
        )
    }
}

/// Errors raised while building a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key is required. Pass your key to Proof::new(\"pk_live_...\")")]
    MissingApiKey,

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API key contains characters not allowed in a header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ProofError>;
