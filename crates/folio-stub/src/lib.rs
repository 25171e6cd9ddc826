//! # folio-stub: Portfolio Backend Stub
//!
//! In-memory implementation of the two endpoints the portfolio client
//! calls, mounted under `/api`:
//!
//! - `GET /api/projects` returns the project catalog.
//! - `POST /api/contact` requires non-empty `name`, `email`, `message`
//!   (`400 {"error": "All fields are required"}` otherwise) and answers
//!   `200 {"message": "Thanks for reaching out"}`.
//! - `GET /health` returns `200`.
//!
//! Storage is in-memory with no persistence. Contact submissions are
//! logged and kept only for inspection in tests.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

pub use config::StubConfig;
pub use error::StubError;
pub use routes::router;
pub use store::AppState;
