use std::sync::Arc;

use log::debug;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::http::{HttpClient, ReqwestTransport, Transport};
use crate::resources::{Proofs, Sessions, VerificationRequests, Verifications, WebhookDeliveries};
use crate::runtime::{Runtime, TokioRuntime};

/// Entry point to the API.
///
/// ```no_run
/// # async fn run() -> anyhow::Result<()> {
/// let proof = proof_sdk::Proof::new("pk_live_...")?;
/// let verification = proof.verifications.retrieve("ver_123").await?;
/// println!("{}", verification.status);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Proof {
    pub verifications: Verifications,
    pub verification_requests: VerificationRequests,
    pub proofs: Proofs,
    pub sessions: Sessions,
    pub webhook_deliveries: WebhookDeliveries,
    http: HttpClient,
}

impl Proof {
    /// Client with default settings for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_config(ClientConfig::new(api_key))
    }

    #[tracing::instrument(skip(config))]
    pub fn with_config(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().build()?;
        Self::with_transport(
            config,
            Arc::new(ReqwestTransport::new(client)),
            Arc::new(TokioRuntime),
        )
    }

    /// Client that sends through `transport` and sleeps through `runtime`.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        runtime: Arc<dyn Runtime>,
    ) -> Result<Self, ConfigError> {
        let http = HttpClient::new(&config, transport, runtime)?;
        debug!(
            "Proof client for {} (timeout {}ms, {} retries)",
            http.base_url(),
            http.timeout().as_millis(),
            http.max_retries()
        );

        Ok(Self {
            verifications: Verifications::new(http.clone()),
            verification_requests: VerificationRequests::new(http.clone()),
            proofs: Proofs::new(http.clone()),
            sessions: Sessions::new(http.clone()),
            webhook_deliveries: WebhookDeliveries::new(http.clone()),
            http,
        })
    }

    /// The underlying transport client, for endpoints without a typed wrapper.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
