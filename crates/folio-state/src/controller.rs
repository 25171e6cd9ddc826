//! # Async Controllers
//!
//! Drive the reducers from backend calls. Each controller owns its state
//! behind a `parking_lot::Mutex`; the lock is taken to dispatch an event or
//! read a snapshot and is always released before awaiting the API.

use folio_core::{ContactField, ContactForm, PortfolioApi, Project, StatusFilter};
use parking_lot::Mutex;

use crate::contact::{ContactEvent, ContactFormState, SubmissionStatus};
use crate::projects::{ProjectListEvent, ProjectListState};

// ─── Project List ────────────────────────────────────────────────────

/// Result of one [`ProjectListController::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch succeeded with this many projects.
    Loaded(usize),
    /// The fetch failed; the list is now empty.
    Failed,
    /// A newer load started while this one was in flight.
    Stale,
}

pub struct ProjectListController<A> {
    api: A,
    state: Mutex<ProjectListState>,
}

impl<A: PortfolioApi> ProjectListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ProjectListState::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the project list and move to `Ready`.
    pub async fn load(&self) -> LoadOutcome {
        let request = {
            let mut state = self.state.lock();
            let request = state.next_request();
            state.dispatch(ProjectListEvent::Load { request });
            request
        };
        tracing::debug!(%request, "loading projects");

        let result = self.api.fetch_projects().await;

        let mut state = self.state.lock();
        if !state.is_current(request) {
            tracing::debug!(%request, "discarding stale project load");
            return LoadOutcome::Stale;
        }
        match result {
            Ok(projects) => {
                let count = projects.len();
                state.dispatch(ProjectListEvent::LoadSucceeded { request, projects });
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::error!(error = %e, %request, "project load failed");
                state.dispatch(ProjectListEvent::LoadFailed {
                    request,
                    reason: e.to_string(),
                });
                LoadOutcome::Failed
            }
        }
    }

    pub fn set_status_filter(&self, status: StatusFilter) {
        self.state
            .lock()
            .dispatch(ProjectListEvent::FilterChanged(status));
    }

    pub fn set_search_term(&self, search: impl Into<String>) {
        self.state
            .lock()
            .dispatch(ProjectListEvent::SearchChanged(search.into()));
    }

    /// Owned copy of the filtered view.
    pub fn filtered_projects(&self) -> Vec<Project> {
        self.state
            .lock()
            .filtered_projects()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> ProjectListState {
        self.state.lock().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ProjectListState) -> R) -> R {
        f(&self.state.lock())
    }
}

// ─── Contact Form ────────────────────────────────────────────────────

/// Result of one [`ContactFormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing was sent.
    Ignored,
    /// Some fields are empty; nothing was sent and the status is unchanged.
    Incomplete(Vec<ContactField>),
    /// Sent and accepted. Carries the banner text.
    Succeeded(String),
    /// Sent and rejected, or not delivered. Carries the banner text.
    Failed(String),
}

pub struct ContactFormController<A> {
    api: A,
    state: Mutex<ContactFormState>,
}

impl<A: PortfolioApi> ContactFormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ContactFormState::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        self.state
            .lock()
            .dispatch(ContactEvent::FieldChanged(field, value.into()));
    }

    /// Send the current draft.
    ///
    /// The `Submitting` check and the transition into it happen under one
    /// lock, so overlapping calls issue at most one request.
    pub async fn submit(&self) -> SubmitOutcome {
        let draft: ContactForm = {
            let mut state = self.state.lock();
            if state.status().is_submitting() {
                tracing::debug!("submit ignored, already submitting");
                return SubmitOutcome::Ignored;
            }
            let missing = state.draft().missing_fields();
            if !missing.is_empty() {
                tracing::debug!(?missing, "submit skipped, draft incomplete");
                return SubmitOutcome::Incomplete(missing);
            }
            state.dispatch(ContactEvent::SubmitStarted);
            state.draft().clone()
        };

        let event = match self.api.send_contact_message(&draft).await {
            Ok(reply) => ContactEvent::SubmitSucceeded {
                message: reply.message,
            },
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                ContactEvent::SubmitFailed {
                    message: Some(e.to_string()),
                }
            }
        };

        let mut state = self.state.lock();
        state.dispatch(event);
        match state.status() {
            SubmissionStatus::Succeeded(text) => SubmitOutcome::Succeeded(text.clone()),
            SubmissionStatus::Failed(text) => SubmitOutcome::Failed(text.clone()),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => {
                SubmitOutcome::Failed(crate::contact::DEFAULT_FAILURE_MESSAGE.to_string())
            }
        }
    }

    pub fn snapshot(&self) -> ContactFormState {
        self.state.lock().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ContactFormState) -> R) -> R {
        f(&self.state.lock())
    }
}
