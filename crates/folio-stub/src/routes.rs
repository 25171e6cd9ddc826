//! Route definitions for the portfolio backend stub.
//!
//! Responses deserialize cleanly into the `folio-core` types the client
//! expects.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use folio_core::{ContactForm, Project};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::StubError;
use crate::store::AppState;

/// Reply sent for every accepted contact submission.
pub const CONTACT_REPLY: &str = "Thanks for reaching out";

/// Build the complete router with all stub routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/projects", get(list_projects))
        .route("/api/contact", post(contact))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.projects().to_vec())
}

async fn contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Value>, StubError> {
    if !form.is_complete() {
        tracing::warn!(missing = ?form.missing_fields(), "rejected contact submission");
        return Err(StubError::MissingFields);
    }

    tracing::info!(
        name = %form.name,
        email = %form.email,
        message = %form.message,
        "contact form submitted"
    );
    state.record_submission(form);

    Ok(Json(json!({ "message": CONTACT_REPLY })))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
