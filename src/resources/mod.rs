//! Typed wrappers around the API's resource endpoints.

mod proofs;
mod sessions;
mod verification_requests;
mod verifications;
mod webhook_deliveries;

pub use proofs::Proofs;
pub use sessions::{SESSION_TERMINAL_STATES, Sessions};
pub use verification_requests::{REQUEST_TERMINAL_STATES, VerificationRequests};
pub use verifications::{VERIFICATION_TERMINAL_STATES, Verifications};
pub use webhook_deliveries::WebhookDeliveries;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is inside a path segment: RFC 3986 unreserved characters plus `!*'()`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes a caller-supplied identifier as a single path segment.
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, SEGMENT).to_string()
}
