use std::sync::Arc;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};
use log::debug;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use super::segment;
use crate::error::{ProofError, Result};
use crate::http::HttpClient;
use crate::types::{
    OfflineProofPayload, OfflineVerification, ProofValidation, RevocationList, RevokeResponse,
};

const BASE_PATH: &str = "/api/v1/proofs";
const JWKS_PATH: &str = "/.well-known/jwks.json";

/// `iss` claim every proof token must carry.
pub const PROOF_ISSUER: &str = "proof.holdings";

/// Clock skew tolerated on `exp`, `nbf` and `iat`, in seconds.
const CLOCK_LEEWAY_SECS: u64 = 5;

#[derive(Serialize)]
struct ValidateBody<'a> {
    proof_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<&'a str>,
}

#[derive(Serialize)]
struct RevokeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

#[derive(Error, Debug)]
enum OfflineError {
    #[error("Failed to fetch signing keys: {0}")]
    Jwks(#[from] ProofError),

    #[error("No signing key with kid '{0}'")]
    UnknownKey(String),

    #[error("Signing key set is empty")]
    NoKeys,

    #[error("Token verification failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Proof tokens issued for completed verifications.
#[derive(Clone)]
pub struct Proofs {
    http: HttpClient,
    jwks: Arc<RwLock<Option<Arc<JwkSet>>>>,
}

impl Proofs {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self {
            http,
            jwks: Arc::new(RwLock::new(None)),
        }
    }

    /// Checks a proof token online, optionally binding it to an identifier.
    ///
    /// An invalid or revoked token is not an error: the result has `valid: false`
    /// and a `reason`. An empty identifier is not sent.
    #[tracing::instrument(skip(self, proof_token))]
    pub async fn validate(
        &self,
        proof_token: &str,
        identifier: Option<&str>,
    ) -> Result<ProofValidation> {
        self.http
            .post(
                &format!("{}/validate", BASE_PATH),
                &ValidateBody {
                    proof_token,
                    identifier: identifier.filter(|s| !s.is_empty()),
                },
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn revoke(&self, verification_id: &str, reason: Option<&str>) -> Result<RevokeResponse> {
        self.http
            .post(
                &format!("{}/{}/revoke", BASE_PATH, segment(verification_id)),
                &RevokeBody {
                    reason: reason.filter(|s| !s.is_empty()),
                },
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_revoked(&self) -> Result<RevocationList> {
        self.http.get(&format!("{}/revoked", BASE_PATH)).await
    }

    /// Where the signing keys for offline token verification are published.
    pub fn jwks_url(&self) -> String {
        format!("{}{}", self.http.base_url(), JWKS_PATH)
    }

    /// Verifies a proof token's signature and claims without calling the API.
    ///
    /// Signing keys are fetched on first use and cached until [`refresh_jwks`](Self::refresh_jwks).
    /// Revocation is not checked; use [`validate`](Self::validate) for that.
    /// Never fails: a bad token, unknown key or unreachable key set yields
    /// `valid: false` with an `error`.
    #[tracing::instrument(skip(self, token))]
    pub async fn verify_offline(&self, token: &str) -> OfflineVerification {
        match self.verify_signed(token).await {
            Ok(payload) => OfflineVerification::verified(payload),
            Err(e) => {
                debug!("Offline proof verification rejected token: {}", e);
                OfflineVerification::rejected(e.to_string())
            }
        }
    }

    /// Drops the cached signing keys so the next offline verification refetches them.
    pub async fn refresh_jwks(&self) {
        *self.jwks.write().await = None;
    }

    async fn verify_signed(
        &self,
        token: &str,
    ) -> std::result::Result<OfflineProofPayload, OfflineError> {
        let header = decode_header(token)?;
        let jwks = self.jwks().await?;

        let jwk = match &header.kid {
            Some(kid) => jwks
                .find(kid)
                .ok_or_else(|| OfflineError::UnknownKey(kid.clone()))?,
            None => jwks.keys.first().ok_or(OfflineError::NoKeys)?,
        };
        let key = DecodingKey::from_jwk(jwk)?;

        let mut validation = Validation::new(header.alg);
        validation.set_issuer(&[PROOF_ISSUER]);
        validation.leeway = CLOCK_LEEWAY_SECS;

        Ok(decode::<OfflineProofPayload>(token, &key, &validation)?.claims)
    }

    async fn jwks(&self) -> Result<Arc<JwkSet>> {
        if let Some(jwks) = self.jwks.read().await.as_ref() {
            return Ok(Arc::clone(jwks));
        }

        let mut cache = self.jwks.write().await;
        if let Some(jwks) = cache.as_ref() {
            return Ok(Arc::clone(jwks));
        }

        debug!("Fetching signing keys from {}", self.jwks_url());
        let jwks: Arc<JwkSet> = Arc::new(self.http.get(JWKS_PATH).await?);
        *cache = Some(Arc::clone(&jwks));
        Ok(jwks)
    }
}
