use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::verification::{VerificationChannel, VerificationType};
use crate::polling::HasStatus;

string_enum! {
    pub enum VerificationRequestStatus {
        Pending => "pending",
        Partial => "partial",
        Completed => "completed",
        Expired => "expired",
        Cancelled => "cancelled",
    }
}

string_enum! {
    /// What the requester intends to do once the assets are verified.
    pub enum ActionType {
        Verification => "verification",
        TwoFactor => "2fa",
        Login => "login",
        Custom => "custom",
    }
}

/// One asset the end user is asked to verify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestedAsset {
    #[serde(rename = "type")]
    pub kind: VerificationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<VerificationChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_channels: Option<Vec<VerificationChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl RequestedAsset {
    pub fn new(kind: VerificationType) -> Self {
        Self {
            kind,
            identifier: None,
            channel: None,
            allowed_channels: None,
            required: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequestAsset {
    #[serde(flatten)]
    pub requested: RequestedAsset,
    pub status: Option<String>,
    pub verification_id: Option<String>,
    pub proof_token: Option<String>,
    pub verified_at: Option<String>,
    pub verified_identifier: Option<String>,
    pub verified_channel: Option<VerificationChannel>,
}

/// A multi-asset verification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub id: String,
    pub reference_id: Option<String>,
    pub status: VerificationRequestStatus,
    pub action_type: ActionType,
    pub action_context: Option<Value>,
    pub assets: Vec<VerificationRequestAsset>,
    pub partial_ok: Option<bool>,
    pub validity_requirement: Option<String>,
    pub verification_url: String,
    pub redirect_url: Option<String>,
    pub callback_url: Option<String>,
    pub expires_at: String,
    pub completed_at: Option<String>,
    pub created_at: String,
}

impl HasStatus for VerificationRequest {
    fn status(&self) -> &str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateVerificationRequestParams {
    pub assets: Vec<RequestedAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Expiry in seconds (server default: 86400)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_profile_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListVerificationRequestsParams {
    pub status: Option<VerificationRequestStatus>,
    pub reference_id: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}
