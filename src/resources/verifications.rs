use log::debug;
use serde_json::json;

use super::segment;
use crate::error::Result;
use crate::http::HttpClient;
use crate::polling::{WaitOptions, poll_until_complete};
use crate::types::{
    CreateVerificationParams, DomainCheckResponse, DomainVerification, ListVerificationsParams,
    ListVerifiedUsersParams, PaginatedList, ResendResponse, StartDomainVerificationParams,
    TestVerifyResponse, Verification, VerifiedUser,
};

const BASE_PATH: &str = "/api/v1/verifications";

/// Statuses after which a verification no longer changes.
pub const VERIFICATION_TERMINAL_STATES: &[&str] = &["verified", "failed", "expired", "revoked"];

/// Single-asset verifications.
#[derive(Clone)]
pub struct Verifications {
    http: HttpClient,
}

impl Verifications {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn create(&self, params: &CreateVerificationParams) -> Result<Verification> {
        debug!(
            "Creating {} verification over {}",
            params.kind, params.channel
        );
        self.http.post(BASE_PATH, params).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<Verification> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, segment(id)))
            .await
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn list(&self, params: &ListVerificationsParams) -> Result<PaginatedList<Verification>> {
        self.http.get_with_query(BASE_PATH, params).await
    }

    /// Asks the server to check a channel that needs no code (DNS, HTTP, OAuth, ...).
    #[tracing::instrument(skip(self))]
    pub async fn verify(&self, id: &str) -> Result<Verification> {
        self.http
            .post_empty(&format!("{}/{}/verify", BASE_PATH, segment(id)))
            .await
    }

    /// Submits the code the end user received.
    #[tracing::instrument(skip(self, code))]
    pub async fn submit(&self, id: &str, code: &str) -> Result<Verification> {
        self.http
            .post(
                &format!("{}/{}/submit", BASE_PATH, segment(id)),
                &json!({ "code": code }),
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn resend(&self, id: &str) -> Result<ResendResponse> {
        self.http
            .post_empty(&format!("{}/{}/resend", BASE_PATH, segment(id)))
            .await
    }

    /// Marks a verification as verified. Only accepted for test-mode API keys.
    #[tracing::instrument(skip(self))]
    pub async fn test_verify(&self, id: &str) -> Result<TestVerifyResponse> {
        self.http
            .post_empty(&format!("{}/{}/test-verify", BASE_PATH, segment(id)))
            .await
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn list_verified_users(
        &self,
        params: &ListVerifiedUsersParams,
    ) -> Result<PaginatedList<VerifiedUser>> {
        self.http
            .get_with_query(&format!("{}/users", BASE_PATH), params)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_verified_user(&self, external_user_id: &str) -> Result<VerifiedUser> {
        self.http
            .get(&format!("{}/users/{}", BASE_PATH, segment(external_user_id)))
            .await
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn start_domain_verification(
        &self,
        params: &StartDomainVerificationParams,
    ) -> Result<DomainVerification> {
        self.http
            .post(&format!("{}/domain", BASE_PATH), params)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn check_domain_verification(&self, id: &str) -> Result<DomainCheckResponse> {
        self.http
            .post_empty(&format!("{}/domain/{}/check", BASE_PATH, segment(id)))
            .await
    }

    /// Polls until the verification reaches a terminal status.
    #[tracing::instrument(skip(self, options))]
    pub async fn wait_for_completion(
        &self,
        id: &str,
        options: &WaitOptions,
    ) -> Result<Verification> {
        poll_until_complete(
            self.http.runtime(),
            move || self.retrieve(id),
            VERIFICATION_TERMINAL_STATES,
            &format!("Verification {}", id),
            options,
        )
        .await
    }
}
