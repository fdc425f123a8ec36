use super::segment;
use crate::error::Result;
use crate::http::HttpClient;
use crate::polling::{WaitOptions, poll_until_complete};
use crate::types::{CreateSessionParams, Session};

const BASE_PATH: &str = "/api/v1/sessions";

pub const SESSION_TERMINAL_STATES: &[&str] = &["verified", "failed", "expired"];

/// Phone-first sessions: the end user messages a bot and the phone number is captured.
#[derive(Clone)]
pub struct Sessions {
    http: HttpClient,
}

impl Sessions {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(skip(self, params))]
    pub async fn create(&self, params: &CreateSessionParams) -> Result<Session> {
        self.http.post(BASE_PATH, params).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<Session> {
        self.http
            .get(&format!("{}/{}", BASE_PATH, segment(id)))
            .await
    }

    #[tracing::instrument(skip(self, options))]
    pub async fn wait_for_completion(&self, id: &str, options: &WaitOptions) -> Result<Session> {
        poll_until_complete(
            self.http.runtime(),
            move || self.retrieve(id),
            SESSION_TERMINAL_STATES,
            &format!("Session {}", id),
            options,
        )
        .await
    }
}
