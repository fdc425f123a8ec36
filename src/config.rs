//! Client configuration.

use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.proof.holdings";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Settings fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// API root (default: https://api.proof.holdings)
    pub base_url: String,
    /// Deadline for a single attempt (default: 30s)
    pub timeout: Duration,
    /// Retries after the first attempt (default: 2)
    pub max_retries: u32,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Parses the base URL, dropping any trailing slash, query and fragment.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            });
        }

        let path = url.path().trim_end_matches('/').to_string();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> Result<HeaderMap, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent())?);

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using API key for authentication: {}", mask_key(&self.api_key));

        Ok(headers)
    }
}

/// Client identifier sent as `User-Agent`.
pub fn user_agent() -> String {
    format!("proof-sdk-rust/{}", crate::VERSION)
}

/// Keeps the key prefix (`pk_live_`) and the last four characters.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
