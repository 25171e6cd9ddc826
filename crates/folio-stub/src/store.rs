//! In-memory storage backend.
//!
//! The project catalog is fixed at startup. Contact submissions are
//! appended to a `parking_lot::Mutex<Vec<_>>`; the lock is never held
//! across an `.await`.

use std::path::Path;
use std::sync::Arc;

use folio_core::{ContactForm, Project, ProjectStatus};
use parking_lot::Mutex;

use crate::error::StubError;

struct Inner {
    projects: Vec<Project>,
    submissions: Mutex<Vec<ContactForm>>,
}

/// Shared application state.
///
/// Cheaply cloneable via `Arc`; all clones share the same data.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl AppState {
    /// State serving the built-in demo catalog.
    pub fn new() -> Self {
        Self::with_projects(demo_catalog())
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            inner: Arc::new(Inner {
                projects,
                submissions: Mutex::new(Vec::new()),
            }),
        }
    }

    /// State serving the catalog stored in a JSON file.
    pub fn from_catalog_file(path: &Path) -> Result<Self, StubError> {
        Ok(Self::with_projects(load_catalog(path)?))
    }

    pub fn projects(&self) -> &[Project] {
        &self.inner.projects
    }

    pub fn record_submission(&self, form: ContactForm) {
        self.inner.submissions.lock().push(form);
    }

    pub fn submissions(&self) -> Vec<ContactForm> {
        self.inner.submissions.lock().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a JSON array of projects from `path`.
pub fn load_catalog(path: &Path) -> Result<Vec<Project>, StubError> {
    let raw = std::fs::read_to_string(path).map_err(|e| StubError::CatalogRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| StubError::CatalogFormat {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Demo catalog served when no catalog file is configured.
pub fn demo_catalog() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "Project Alpha",
            "Personal portfolio front end built with React and Vite.",
            ProjectStatus::Active,
            "https://github.com/example/project-alpha",
        ),
        Project::new(
            2,
            "Project Beta",
            "Flask REST API serving portfolio content.",
            ProjectStatus::Active,
            "https://github.com/example/project-beta",
        ),
        Project::new(
            3,
            "Project Gamma",
            "Command-line habit tracker, no longer maintained.",
            ProjectStatus::Inactive,
            "https://github.com/example/project-gamma",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn demo_catalog_has_unique_ids() {
        let catalog = demo_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn load_catalog_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "name": "From file", "status": "inactive"}}]"#
        )
        .unwrap();

        let state = AppState::from_catalog_file(file.path()).unwrap();
        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.projects()[0].name, "From file");
        assert_eq!(state.projects()[0].status, ProjectStatus::Inactive);
    }

    #[test]
    fn load_catalog_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1}}"#).unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, StubError::CatalogFormat { .. }));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/folio/catalog.json")).unwrap_err();
        assert!(matches!(err, StubError::CatalogRead { .. }));
    }

    #[test]
    fn submissions_are_shared_between_clones() {
        let state = AppState::new();
        let clone = state.clone();
        clone.record_submission(ContactForm::new("Ada", "ada@example.com", "Hi"));
        assert_eq!(state.submissions().len(), 1);
    }
}
