//! Client error types.
//!
//! [`CallError`] carries the full cause of a failed call. It is logged and
//! then collapsed into the fixed-message [`folio_core::ApiError`] before it
//! reaches the caller.

/// Detailed failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    /// The backend returned a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

/// Errors building an [`ApiClient`](crate::ApiClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
