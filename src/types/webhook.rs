use serde::{Deserialize, Serialize};
use serde_json::Value;

string_enum! {
    pub enum WebhookDeliveryStatus {
        Pending => "pending",
        Delivered => "delivered",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookDelivery {
    pub id: String,
    pub url: String,
    pub event_type: String,
    pub status: WebhookDeliveryStatus,
    pub attempts: u32,
    pub max_attempts: u32,
    pub response_status: Option<u16>,
    pub error_message: Option<String>,
    pub last_attempt_at: Option<String>,
    pub next_retry_at: Option<String>,
    pub delivered_at: Option<String>,
    pub verification_request_id: Option<String>,
    pub payload: Option<Value>,
    pub response_body: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookRetryResponse {
    pub success: bool,
    pub message: String,
    pub delivery_id: String,
    pub next_retry_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookDeliveryList {
    pub deliveries: Vec<WebhookDelivery>,
    pub pagination: WebhookPagination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStatusCounts {
    pub pending: u64,
    pub delivered: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookDeliveryStats {
    pub total: u64,
    pub by_status: DeliveryStatusCounts,
    pub delivery_rate: String,
    pub recent_failures_24h: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListWebhookDeliveriesParams {
    pub status: Option<WebhookDeliveryStatus>,
    pub event_type: Option<String>,
    pub verification_request_id: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}
