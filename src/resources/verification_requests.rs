use super::segment;
use crate::error::Result;
use crate::http::HttpClient;
use crate::polling::{WaitOptions, poll_until_complete};
use crate::types::{
    CreateVerificationRequestParams, ListVerificationRequestsParams, PaginatedList,
    VerificationRequest,
};

const BASE_PATH: &str = "/api/v1/verification-requests";

/// Statuses after which a verification request no longer changes.
///
/// `partial` is not terminal: the end user may still verify the remaining assets.
pub const REQUEST_TERMINAL_STATES: &[&str] = &["completed", "expired", "cancelled"];

/// Multi-asset verification requests completed by the end user on a hosted page.
#[derive(Clone)]
pub struct VerificationRequests {
    http: HttpClient,
}

impl VerificationRequests {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn create(
        &self,
        params: &CreateVerificationRequestParams,
    ) -> Result<VerificationRequest> {
        self.http.post(BASE_PATH, params).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<VerificationRequest> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, segment(id)))
            .await
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn list(
        &self,
        params: &ListVerificationRequestsParams,
    ) -> Result<PaginatedList<VerificationRequest>> {
        self.http.get_with_query(BASE_PATH, params).await
    }

    /// Looks a request up by the caller's own reference ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_reference(&self, reference_id: &str) -> Result<VerificationRequest> {
        self.http
            .get(&format!("{}/by-reference/{}", BASE_PATH, segment(reference_id)))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel(&self, id: &str) -> Result<VerificationRequest> {
        self.http
            .delete(&format!("{}/{}", BASE_PATH, segment(id)))
            .await
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn wait_for_completion(
        &self,
        id: &str,
        options: &WaitOptions,
    ) -> Result<VerificationRequest> {
        poll_until_complete(
            self.http.runtime(),
            move || self.retrieve(id),
            REQUEST_TERMINAL_STATES,
            &format!("Verification request {}", id),
            options,
        )
        .await
    }
}
