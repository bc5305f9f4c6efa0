//! # MediRisk Clients
//!
//! HTTP implementations of the collaborator lookups consumed by the
//! assessment engine:
//! - `HttpPatientClient` for the patient service
//! - `HttpNotesClient` for the note service
//! - `Retrying`, an injectable retry/backoff wrapper around either lookup
//!
//! Both clients carry an enforced request timeout and send the configured
//! `X-Internal-Auth` header on every call; a timed-out or failed call
//! surfaces as `LookupError::Unavailable`, never a hang.

pub mod notes;
pub mod patients;
pub mod retry;

pub use notes::HttpNotesClient;
pub use patients::HttpPatientClient;
pub use retry::{Retrying, RetryPolicy};

use std::time::Duration;

use medirisk_core::{Collaborator, LookupError};

/// Connection settings for one collaborator client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    internal_auth_token: Option<String>,
}

impl ClientConfig {
    /// Settings for a collaborator at `base_url`, with a 5 second timeout
    /// and no auth header.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
            internal_auth_token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_internal_auth_token(mut self, token: impl Into<String>) -> Self {
        self.internal_auth_token = Some(token.into());
        self
    }

    /// Base URL with any trailing slash removed, ready for `{base}/{id}`.
    pub(crate) fn trimmed_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_owned()
    }
}

/// Failures constructing a collaborator client at startup.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("invalid X-Internal-Auth token: {0}")]
    InvalidAuthToken(#[from] reqwest::header::InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

pub(crate) fn build_http(config: &ClientConfig) -> Result<reqwest::Client, ClientBuildError> {
    let mut headers = reqwest::header::HeaderMap::new();
    if let Some(token) = &config.internal_auth_token {
        let mut value = reqwest::header::HeaderValue::from_str(token)?;
        value.set_sensitive(true);
        headers.insert("X-Internal-Auth", value);
    }

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

pub(crate) fn unavailable(collaborator: Collaborator, err: reqwest::Error) -> LookupError {
    let reason = if err.is_timeout() {
        "request timed out".to_owned()
    } else {
        err.to_string()
    };
    LookupError::Unavailable {
        collaborator,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:8081/api/patient/");
        assert_eq!(config.trimmed_base_url(), "http://localhost:8081/api/patient");
    }

    #[test]
    fn rejects_auth_tokens_with_invalid_header_bytes() {
        let config = ClientConfig::new("http://localhost:8081").with_internal_auth_token("bad\ntoken");
        assert!(matches!(
            build_http(&config),
            Err(ClientBuildError::InvalidAuthToken(_))
        ));
    }

    #[test]
    fn builds_with_a_valid_token() {
        let config = ClientConfig::new("http://localhost:8081")
            .with_timeout(Duration::from_millis(250))
            .with_internal_auth_token("secret");
        assert!(build_http(&config).is_ok());
    }
}
