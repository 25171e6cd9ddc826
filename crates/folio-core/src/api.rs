//! # Portfolio API Seam
//!
//! The two backend calls the controllers depend on, expressed as a trait so
//! the HTTP client and in-process test stubs are interchangeable.
//!
//! ## Error Contract
//!
//! Every failure of an endpoint (transport error, non-2xx status, or an
//! undecodable body) collapses into one [`ApiError`] variant per endpoint
//! with a fixed message. Status codes and response bodies are logged by the
//! implementation and never reach the caller.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::contact::{ContactForm, ContactReply};
use crate::project::Project;

/// Fixed-message failure of a portfolio API call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// `GET /projects` failed.
    #[error("Failed to fetch projects")]
    FetchProjects,

    /// `POST /contact` failed.
    #[error("Failed to send message")]
    SendMessage,
}

/// Backend operations used by the portfolio controllers.
pub trait PortfolioApi: Send + Sync {
    /// `GET {base}/projects`.
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send;

    /// `POST {base}/contact` with `form` as the JSON body.
    fn send_contact_message(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<ContactReply, ApiError>> + Send;
}

impl<T: PortfolioApi + ?Sized> PortfolioApi for Arc<T> {
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send {
        (**self).fetch_projects()
    }

    fn send_contact_message(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<ContactReply, ApiError>> + Send {
        (**self).send_contact_message(form)
    }
}
