//! Portfolio backend stub: standalone development server.
//!
//! Serves the endpoints `folio-client` calls from memory, so the front end
//! can be exercised without the real backend.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default   | Description                      |
//! |-----------------------|----------|-----------|----------------------------------|
//! | `FOLIO_STUB_PORT`     | no       | `5000`    | Listening port                   |
//! | `FOLIO_STUB_PROJECTS` | no       | demo data | JSON file with the project list  |
//! | `RUST_LOG`            | no       | `info`    | `tracing` filter directives      |

use std::net::SocketAddr;
use std::process::ExitCode;

use folio_stub::{router, AppState, StubConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StubConfig::from_env();

    let state = match &config.projects_file {
        Some(path) => match AppState::from_catalog_file(path) {
            Ok(state) => state,
            Err(e) => {
                tracing::error!(error = %e, "failed to load project catalog");
                return ExitCode::FAILURE;
            }
        },
        None => AppState::new(),
    };
    tracing::info!(projects = state.projects().len(), "project catalog loaded");

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("folio-stub listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
