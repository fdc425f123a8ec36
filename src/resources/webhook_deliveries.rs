use super::segment;
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{
    ListWebhookDeliveriesParams, WebhookDelivery, WebhookDeliveryList, WebhookDeliveryStats,
    WebhookRetryResponse,
};

const BASE_PATH: &str = "/api/v1/webhook-deliveries";

/// Delivery log of the webhooks sent to the account's callback URLs.
#[derive(Clone)]
pub struct WebhookDeliveries {
    http: HttpClient,
}

impl WebhookDeliveries {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(skip(self))]
    pub async fn stats(&self) -> Result<WebhookDeliveryStats> {
        self.http.get(&format!("{}/stats", BASE_PATH)).await
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn list(&self, params: &ListWebhookDeliveriesParams) -> Result<WebhookDeliveryList> {
        self.http.get_with_query(BASE_PATH, params).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<WebhookDelivery> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, segment(id)))
            .await
    }

    /// Schedules a failed delivery to be sent again.
    #[tracing::instrument(skip(self))]
    pub async fn retry(&self, id: &str) -> Result<WebhookRetryResponse> {
        self.http
            .post_empty(&format!("{}/{}/retry", BASE_PATH, segment(id)))
            .await
    }
}
