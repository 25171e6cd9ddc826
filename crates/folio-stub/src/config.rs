//! Stub server configuration loaded from environment variables.

use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Stub server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubConfig {
    /// Listening port.
    pub port: u16,
    /// JSON file holding the project catalog. The built-in demo catalog is
    /// served when unset.
    pub projects_file: Option<PathBuf>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            projects_file: None,
        }
    }
}

impl StubConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default    |
    /// |-----------------------|------------|
    /// | `FOLIO_STUB_PORT`     | `5000`     |
    /// | `FOLIO_STUB_PROJECTS` | demo data  |
    pub fn from_env() -> Self {
        let port = std::env::var("FOLIO_STUB_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let projects_file = std::env::var("FOLIO_STUB_PROJECTS")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            port,
            projects_file,
        }
    }
}
