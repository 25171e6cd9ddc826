//! # folio-core: Domain Types for the Portfolio Client
//!
//! Defines the records exchanged with the portfolio backend and the pure
//! logic that operates on them. Every other `folio-*` crate depends on
//! this one; it depends on nothing internal and performs no I/O.
//!
//! ## Contents
//!
//! - **Projects** (`project.rs`): `Project`, `ProjectId`, `ProjectStatus`.
//!   Decoding is lenient: missing or mistyped fields fall back to defaults
//!   instead of rejecting the whole listing.
//!
//! - **Filtering** (`filter.rs`): `StatusFilter` and `ProjectQuery`, the
//!   combined status + case-insensitive substring predicate. Filtering is
//!   stable and never re-sorts.
//!
//! - **Contact** (`contact.rs`): the `ContactForm` draft and the
//!   `ContactReply` returned by the backend.
//!
//! - **API seam** (`api.rs`): the `PortfolioApi` trait implemented by the
//!   HTTP client and by test stubs, plus the fixed-message `ApiError`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `folio-*` crates.
//! - No `.unwrap()` outside tests.

pub mod api;
pub mod contact;
pub mod error;
pub mod filter;
pub mod project;

pub use api::{ApiError, PortfolioApi};
pub use contact::{ContactField, ContactForm, ContactReply};
pub use error::CoreError;
pub use filter::{filter_projects, ProjectQuery, StatusFilter};
pub use project::{Project, ProjectId, ProjectStatus};
