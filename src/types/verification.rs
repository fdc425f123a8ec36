use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::polling::HasStatus;

string_enum! {
    /// What is being verified.
    pub enum VerificationType {
        Phone => "phone",
        Email => "email",
        Domain => "domain",
        Social => "social",
        Wallet => "wallet",
        Account => "account",
        Waba => "waba",
        TelegramBot => "telegram_bot",
    }
}

string_enum! {
    /// How the challenge is delivered or checked.
    pub enum VerificationChannel {
        Whatsapp => "whatsapp",
        Telegram => "telegram",
        Viber => "viber",
        Sms => "sms",
        Email => "email",
        Dns => "dns",
        Http => "http",
        Auto => "auto",
        Github => "github",
        Google => "google",
        Facebook => "facebook",
        X => "x",
        Linkedin => "linkedin",
        Instagram => "instagram",
        Youtube => "youtube",
        Tiktok => "tiktok",
        Ethereum => "ethereum",
        Solana => "solana",
        Bitcoin => "bitcoin",
        Coinbase => "coinbase",
        Kraken => "kraken",
        WabaOtp => "waba_otp",
        TelegramBotToken => "telegram_bot_token",
    }
}

string_enum! {
    pub enum VerificationStatus {
        Pending => "pending",
        Verified => "verified",
        Failed => "failed",
        Expired => "expired",
        Revoked => "revoked",
    }
}

/// Instructions for completing a challenge; which fields are set depends on the channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeInstructions {
    pub code: String,
    pub expires_at: String,
    pub instruction: Option<String>,
    pub send_to: Option<String>,
    pub send_to_formatted: Option<String>,
    pub deep_link: Option<String>,
    pub message: Option<String>,
    pub record_type: Option<String>,
    pub record_name: Option<String>,
    pub record_value: Option<String>,
    pub file_path: Option<String>,
    pub file_content: Option<String>,
    pub file_url: Option<String>,
    pub method: Option<String>,
    pub magic_link: Option<String>,
    pub email_sent: Option<bool>,
    pub email_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofToken {
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub channel: VerificationChannel,
    pub status: VerificationStatus,
    pub identifier: String,
    pub attempts: Option<u32>,
    pub max_attempts: Option<u32>,
    pub challenge: Option<ChallengeInstructions>,
    pub proof: Option<ProofToken>,
    pub verified_at: Option<String>,
    pub verified_data: Option<Value>,
    pub created_at: String,
}

impl HasStatus for Verification {
    fn status(&self) -> &str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVerificationParams {
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub channel: VerificationChannel,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_provider: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_prefix: Option<String>,
}

impl CreateVerificationParams {
    pub fn new(
        kind: VerificationType,
        channel: VerificationChannel,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            channel,
            identifier: identifier.into(),
            external_user_id: None,
            callback_url: None,
            client_metadata: None,
            dns_provider: None,
            email_prefix: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListVerificationsParams {
    pub status: Option<VerificationStatus>,
    #[serde(rename = "type")]
    pub kind: Option<VerificationType>,
    pub channel: Option<VerificationChannel>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResendResponse {
    pub success: bool,
    pub message: String,
    pub expires_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestVerifyResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub channel: VerificationChannel,
    pub status: VerificationStatus,
    pub identifier: String,
    pub verified_at: Option<String>,
    pub proof_token: Option<String>,
    pub proof_expires_at: Option<String>,
    pub test_mode: bool,
}

string_enum! {
    pub enum DomainVerificationMethod {
        ManualDns => "manual_dns",
        HttpFile => "http_file",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartDomainVerificationParams {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<DomainVerificationMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpFile {
    pub path: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProvider {
    pub detected: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainVerification {
    pub id: String,
    pub domain: String,
    pub status: String,
    pub verification_method: Option<String>,
    pub dns_record: Option<DnsRecord>,
    pub http_file: Option<HttpFile>,
    pub provider: Option<DomainProvider>,
    pub verified_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCheckResponse {
    pub id: String,
    pub domain: String,
    pub status: String,
    pub verified: Option<bool>,
    pub verified_at: Option<String>,
    pub check_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedUserVerification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VerificationType,
    pub channel: VerificationChannel,
    pub identifier: String,
    pub status: Option<VerificationStatus>,
    pub verified_at: Option<String>,
    pub has_proof: Option<bool>,
    pub proof_expires_at: Option<String>,
    pub created_at: Option<String>,
}

/// Verifications grouped by the caller's own user ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedUser {
    pub external_user_id: String,
    pub verification_count: u32,
    pub types_verified: Vec<VerificationType>,
    pub verifications: Vec<VerifiedUserVerification>,
    pub first_verified_at: Option<String>,
    pub last_verified_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListVerifiedUsersParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verification_deserializes_minimal_payload() {
        let verification: Verification = serde_json::from_value(json!({
            "id": "ver_1",
            "type": "phone",
            "channel": "telegram",
            "status": "pending",
            "identifier": "+15555550100",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(verification.kind, VerificationType::Phone);
        assert_eq!(verification.channel, VerificationChannel::Telegram);
        assert_eq!(verification.status(), "pending");
        assert_eq!(verification.challenge, None);
    }

    #[test]
    fn test_create_params_skip_unset_fields() {
        let params =
            CreateVerificationParams::new(VerificationType::Email, VerificationChannel::Email, "a@b.test");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"type": "email", "channel": "email", "identifier": "a@b.test"})
        );
    }

    #[test]
    fn test_string_enum_parsing() {
        assert_eq!(
            "telegram_bot_token".parse::<VerificationChannel>().unwrap(),
            VerificationChannel::TelegramBotToken
        );
        assert_eq!(VerificationStatus::Revoked.to_string(), "revoked");

        let err = "carrier_pigeon".parse::<VerificationChannel>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown VerificationChannel 'carrier_pigeon'"
        );
    }

    #[test]
    fn test_string_enum_values_match_wire_format() {
        for status in VerificationStatus::ALL {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire, json!(status.as_str()));
        }
    }
}
