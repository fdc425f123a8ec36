use serde::{Deserialize, Serialize};

use super::verification::{VerificationChannel, VerificationType};

/// Verification behind a valid proof token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedVerification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub channel: VerificationChannel,
    pub verified_at: String,
    pub expires_at: String,
    pub user_id: String,
    pub identifier: Option<String>,
}

/// Result of an online proof-token check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofValidation {
    pub valid: bool,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub verification: Option<ValidatedVerification>,
    pub revoked_at: Option<String>,
    pub revoked_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokedProof {
    pub proof_id: String,
    pub revoked_at: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevocationList {
    pub revoked: Vec<RevokedProof>,
    pub issued_at: String,
    pub count: u64,
    pub signature: Option<String>,
    pub kid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevokeResponse {
    pub success: bool,
    pub verification_id: String,
    pub revoked_at: String,
    pub reason: String,
}

/// Claims carried by a proof token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineProofPayload {
    pub iss: String,
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub channel: String,
    pub identifier_hash: String,
    pub verified_at: String,
    pub user_id: String,
}

/// Outcome of checking a proof token against the published signing keys.
///
/// Exactly one of `payload` (when `valid`) or `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineVerification {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<OfflineProofPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OfflineVerification {
    pub fn verified(payload: OfflineProofPayload) -> Self {
        Self {
            valid: true,
            payload: Some(payload),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            payload: None,
            error: Some(error.into()),
        }
    }
}
