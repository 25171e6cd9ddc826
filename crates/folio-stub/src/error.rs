//! Stub error type and its HTTP mapping.
//!
//! Error bodies use the backend's `{"error": "..."}` shape.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubError {
    /// A contact submission is missing at least one required field.
    #[error("All fields are required")]
    MissingFields,

    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is not a JSON array of projects.
    #[error("invalid catalog {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = match &self {
            StubError::MissingFields => StatusCode::BAD_REQUEST,
            StubError::CatalogRead { .. } | StubError::CatalogFormat { .. } => {
                tracing::error!(error = %self, "catalog error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
