//! # folio-state: Project List and Contact Form Controllers
//!
//! Each screen is modelled as a reducer: a state struct plus an event enum,
//! with `reduce(state, event) -> state` as a pure function that can be
//! tested without a renderer or a network. Views are projections of the
//! state, never stored.
//!
//! ## Reducers
//!
//! - **Project list** (`projects.rs`): `Load`, `LoadSucceeded`,
//!   `LoadFailed`, `FilterChanged`, `SearchChanged`. Request tokens make
//!   late completions of superseded loads no-ops.
//!
//! - **Contact form** (`contact.rs`): `FieldChanged`, `SubmitStarted`,
//!   `SubmitSucceeded`, `SubmitFailed`. The banner and the submit button
//!   are derived from the submission status.
//!
//! ## Controllers
//!
//! `controller.rs` wraps each reducer in a `parking_lot::Mutex` and drives
//! it from any [`folio_core::PortfolioApi`]. The lock is never held across
//! an `.await`.

pub mod contact;
pub mod controller;
pub mod projects;

pub use contact::{
    Banner, BannerKind, ContactEvent, ContactFormState, SubmissionStatus,
    DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};
pub use controller::{ContactFormController, LoadOutcome, ProjectListController, SubmitOutcome};
pub use projects::{
    LoadPhase, ProjectListEvent, ProjectListState, ProjectListView, RequestToken, EMPTY_MESSAGE,
};
