//! # folio-client: Typed Client for the Portfolio Backend
//!
//! Implements [`PortfolioApi`] over HTTP:
//!
//! | Method | Path        | Operation                 | Fixed error message          |
//! |--------|-------------|---------------------------|------------------------------|
//! | GET    | `/projects` | `fetch_projects`          | `Failed to fetch projects`   |
//! | POST   | `/contact`  | `send_contact_message`    | `Failed to send message`     |
//!
//! Paths are appended to the configured base URL. Each failure is logged
//! with its cause (status, body, transport error) and then reported as the
//! endpoint's fixed [`ApiError`]. There are no retries.

pub mod config;
pub mod error;

pub use config::{ApiConfig, ConfigError};
pub use error::{CallError, ClientError};
pub use folio_core::{ApiError, PortfolioApi};

use std::time::Duration;

use folio_core::{ContactForm, ContactReply, Project};

const PROJECTS_ENDPOINT: &str = "GET /projects";
const CONTACT_ENDPOINT: &str = "POST /contact";

/// HTTP client for the portfolio backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self { http, config })
    }

    /// Create a client from `FOLIO_API_URL` / `FOLIO_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_projects(&self) -> Result<Vec<Project>, CallError> {
        let url = self.config.endpoint("/projects");
        tracing::debug!(%url, "fetching projects");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CallError::Http {
                endpoint: PROJECTS_ENDPOINT,
                source: e,
            })?;

        parse_response(PROJECTS_ENDPOINT, resp).await
    }

    async fn post_contact(&self, form: &ContactForm) -> Result<ContactReply, CallError> {
        let url = self.config.endpoint("/contact");
        tracing::debug!(%url, "sending contact message");

        // `.json()` sets `Content-Type: application/json`.
        let resp = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| CallError::Http {
                endpoint: CONTACT_ENDPOINT,
                source: e,
            })?;

        parse_response(CONTACT_ENDPOINT, resp).await
    }
}

impl PortfolioApi for ApiClient {
    async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        match self.get_projects().await {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "fetched projects");
                Ok(projects)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching projects");
                Err(ApiError::FetchProjects)
            }
        }
    }

    async fn send_contact_message(&self, form: &ContactForm) -> Result<ContactReply, ApiError> {
        self.post_contact(form).await.map_err(|e| {
            tracing::error!(error = %e, "Error sending contact message");
            ApiError::SendMessage
        })
    }
}

/// Check the status and decode a JSON body.
async fn parse_response<T: serde::de::DeserializeOwned>(
    endpoint: &'static str,
    resp: reqwest::Response,
) -> Result<T, CallError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(CallError::Status {
            endpoint,
            status,
            body,
        });
    }

    resp.json()
        .await
        .map_err(|e| CallError::Deserialization {
            endpoint,
            source: e,
        })
}
