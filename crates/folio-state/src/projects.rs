//! # Project List State
//!
//! ## States
//!
//! ```text
//! Loading ──LoadSucceeded──▶ Ready (projects)
//!    │
//!    └──────LoadFailed─────▶ Ready (empty, load_error recorded)
//! ```
//!
//! `FilterChanged` and `SearchChanged` are accepted in either phase and
//! only change the query; the filtered view is derived on demand.
//!
//! ## Request Tokens
//!
//! Every `Load` carries a fresh [`RequestToken`]. A completion whose token
//! is not the most recently issued one is stale and leaves the state
//! untouched, so overlapping loads cannot overwrite newer data.

use std::fmt;

use folio_core::{Project, ProjectQuery, StatusFilter};
use serde::{Deserialize, Serialize};

/// Static text shown when the filtered view is empty.
pub const EMPTY_MESSAGE: &str = "No projects found.";

// ─── Request Token ───────────────────────────────────────────────────

/// Identifies one `load()` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ─── Phase ───────────────────────────────────────────────────────────

/// Fetch lifecycle of the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadPhase {
    /// A fetch is in flight (or none has completed yet).
    #[default]
    Loading,
    /// The last current fetch completed, successfully or not.
    Ready,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Loading => "LOADING",
            Self::Ready => "READY",
        };
        f.write_str(s)
    }
}

// ─── Events ──────────────────────────────────────────────────────────

/// Named transitions of the project list.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectListEvent {
    /// A fetch was started.
    Load { request: RequestToken },
    /// The fetch identified by `request` returned `projects`.
    LoadSucceeded {
        request: RequestToken,
        projects: Vec<Project>,
    },
    /// The fetch identified by `request` failed.
    LoadFailed {
        request: RequestToken,
        reason: String,
    },
    FilterChanged(StatusFilter),
    SearchChanged(String),
}

// ─── View ────────────────────────────────────────────────────────────

/// What the project list renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectListView<'a> {
    Spinner,
    /// Nothing passes the filter. The message does not say why.
    Empty(&'static str),
    Populated(Vec<&'a Project>),
}

// ─── State ───────────────────────────────────────────────────────────

/// Project list state: fetched collection, query, and fetch bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListState {
    phase: LoadPhase,
    projects: Vec<Project>,
    query: ProjectQuery,
    load_error: Option<String>,
    latest_request: Option<RequestToken>,
}

impl ProjectListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event`, producing the next state.
    pub fn reduce(mut self, event: ProjectListEvent) -> Self {
        match event {
            ProjectListEvent::Load { request } => {
                self.phase = LoadPhase::Loading;
                self.latest_request = Some(request);
            }
            ProjectListEvent::LoadSucceeded { request, projects } => {
                if self.is_current(request) {
                    self.phase = LoadPhase::Ready;
                    self.projects = projects;
                    self.load_error = None;
                }
            }
            ProjectListEvent::LoadFailed { request, reason } => {
                if self.is_current(request) {
                    self.phase = LoadPhase::Ready;
                    self.projects.clear();
                    self.load_error = Some(reason);
                }
            }
            ProjectListEvent::FilterChanged(status) => self.query.status = status,
            ProjectListEvent::SearchChanged(search) => self.query.search = search,
        }
        self
    }

    /// In-place form of [`reduce`](Self::reduce).
    pub fn dispatch(&mut self, event: ProjectListEvent) {
        *self = std::mem::take(self).reduce(event);
    }

    /// Token for the next `Load`; strictly greater than any issued so far.
    pub fn next_request(&self) -> RequestToken {
        RequestToken(self.latest_request.map_or(1, |r| r.0 + 1))
    }

    /// Whether a completion for `request` would be applied.
    pub fn is_current(&self, request: RequestToken) -> bool {
        self.latest_request == Some(request)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// The unfiltered collection from the last current fetch.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn query(&self) -> &ProjectQuery {
        &self.query
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.query.status
    }

    pub fn search_term(&self) -> &str {
        &self.query.search
    }

    /// Reason the last current fetch failed, if it did.
    ///
    /// The default view ignores this: a failed fetch renders exactly like
    /// an empty catalog.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Projects passing the current filter and search, in source order.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        self.query.apply(&self.projects)
    }

    pub fn view(&self) -> ProjectListView<'_> {
        match self.phase {
            LoadPhase::Loading => ProjectListView::Spinner,
            LoadPhase::Ready => {
                let filtered = self.filtered_projects();
                if filtered.is_empty() {
                    ProjectListView::Empty(EMPTY_MESSAGE)
                } else {
                    ProjectListView::Populated(filtered)
                }
            }
        }
    }
}
