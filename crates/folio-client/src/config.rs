//! Portfolio API client configuration.
//!
//! The base URL is resolved once, when the configuration is built, and
//! injected into [`ApiClient`](crate::ApiClient). The client never reads the
//! environment on its own.

use url::Url;

/// Environment variable holding the API base URL, e.g. `http://localhost:5000/api`.
pub const API_URL_VAR: &str = "FOLIO_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const API_TIMEOUT_VAR: &str = "FOLIO_API_TIMEOUT_SECS";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the portfolio backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL; endpoint paths are appended to it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Build a configuration for `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url(API_URL_VAR, base_url)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FOLIO_API_URL` (required)
    /// - `FOLIO_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url(API_URL_VAR)?,
            timeout_secs: std::env::var(API_TIMEOUT_VAR)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Configuration pointing at a local server (for testing).
    pub fn local(port: u16) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("localhost", &format!("http://127.0.0.1:{port}/api"))?,
            timeout_secs: 5,
        })
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full URL for an endpoint path such as `/projects`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

fn env_url(var: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).map_err(|_| ConfigError::MissingBaseUrl(var.to_string()))?;
    parse_url(var, &raw)
}

fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingBaseUrl(String),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
