use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::verification::{ProofToken, VerificationStatus};
use crate::polling::HasStatus;

string_enum! {
    pub enum SessionChannel {
        Telegram => "telegram",
        Whatsapp => "whatsapp",
        Viber => "viber",
        Sms => "sms",
    }
}

string_enum! {
    pub enum ContextAction {
        Login => "login",
        TwoFactor => "2fa",
        Verification => "verification",
        Recovery => "recovery",
    }
}

/// Phone-first verification session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub channel: SessionChannel,
    pub status: VerificationStatus,
    pub deep_link: Option<String>,
    pub qr_code: Option<String>,
    pub instructions: Option<String>,
    pub phone_number: Option<String>,
    pub verified_at: Option<String>,
    pub verification_id: Option<String>,
    pub proof: Option<ProofToken>,
    pub expires_at: String,
    pub created_at: Option<String>,
}

impl HasStatus for Session {
    fn status(&self) -> &str {
        self.status.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ContextAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionParams {
    pub channel: SessionChannel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<SessionContext>,
}

impl CreateSessionParams {
    pub fn new(channel: SessionChannel) -> Self {
        Self {
            channel,
            client_metadata: None,
            context: None,
        }
    }
}
