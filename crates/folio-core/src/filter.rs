//! # Project Filtering
//!
//! The filter predicate combines a status filter with a free-text search:
//!
//! ```text
//! included(p) = (filter == All || p.status == filter)
//!            && (search == "" || lower(p.name) ⊇ lower(search)
//!                             || lower(p.description) ⊇ lower(search))
//! ```
//!
//! Matching is plain substring containment after lowercasing, not tokenized
//! or fuzzy. The result preserves source order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::project::{Project, ProjectStatus};

/// Which project statuses are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every project, whatever its status.
    #[default]
    All,
    /// Only `active` projects.
    Active,
    /// Only `inactive` projects.
    Inactive,
}

impl StatusFilter {
    /// All filter values in display order.
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Active, Self::Inactive];

    /// Whether a project with `status` passes this filter.
    pub fn admits(self, status: &ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => *status == ProjectStatus::Active,
            Self::Inactive => *status == ProjectStatus::Inactive,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        };
        f.write_str(s)
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(CoreError::UnknownStatusFilter(other.to_string())),
        }
    }
}

/// The active status filter plus search term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectQuery {
    pub status: StatusFilter,
    pub search: String,
}

impl ProjectQuery {
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            status,
            search: search.into(),
        }
    }

    /// Whether `project` is part of the filtered view.
    pub fn matches(&self, project: &Project) -> bool {
        self.status.admits(&project.status) && matches_search(project, &self.search)
    }

    /// Stable filter over `projects`.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter `projects` by `status` and case-insensitive `search`.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a Project> {
    ProjectQuery::new(status, search).apply(projects)
}

fn matches_search(project: &Project, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    project.name.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![
            Project::new(1, "Alpha", "A React dashboard", ProjectStatus::Active, ""),
            Project::new(2, "Beta", "CLI tooling in Rust", ProjectStatus::Inactive, ""),
            Project::new(3, "Gamma", "react-native app", ProjectStatus::Active, ""),
            Project::new(4, "Delta", "Mystery", ProjectStatus::default(), ""),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn all_with_empty_search_returns_everything() {
        let projects = sample();
        let out = filter_projects(&projects, StatusFilter::All, "");
        assert_eq!(ids(&out), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn active_filter_returns_only_active() {
        let projects = vec![
            Project::new(1, "On", "", ProjectStatus::Active, ""),
            Project::new(2, "Off", "", ProjectStatus::Inactive, ""),
        ];
        let out = filter_projects(&projects, StatusFilter::Active, "");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "On");
    }

    #[test]
    fn inactive_filter_returns_only_inactive() {
        let projects = sample();
        let out = filter_projects(&projects, StatusFilter::Inactive, "");
        assert_eq!(ids(&out), vec!["2"]);
    }

    #[test]
    fn unknown_status_only_visible_under_all() {
        let projects = sample();
        assert!(filter_projects(&projects, StatusFilter::Active, "mystery").is_empty());
        assert!(filter_projects(&projects, StatusFilter::Inactive, "mystery").is_empty());
        assert_eq!(filter_projects(&projects, StatusFilter::All, "mystery").len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let projects = sample();
        let out = filter_projects(&projects, StatusFilter::All, "REACT");
        assert_eq!(ids(&out), vec!["1", "3"]);
    }

    #[test]
    fn search_matches_name_or_description() {
        let projects = sample();
        assert_eq!(ids(&filter_projects(&projects, StatusFilter::All, "beta")), vec!["2"]);
        assert_eq!(ids(&filter_projects(&projects, StatusFilter::All, "rust")), vec!["2"]);
    }

    #[test]
    fn search_is_substring_not_tokenized() {
        let projects = sample();
        assert_eq!(ids(&filter_projects(&projects, StatusFilter::All, "act-nat")), vec!["3"]);
        assert!(filter_projects(&projects, StatusFilter::All, "react rust").is_empty());
    }

    #[test]
    fn status_and_search_combine() {
        let projects = sample();
        let out = filter_projects(&projects, StatusFilter::Inactive, "react");
        assert!(out.is_empty());
    }

    #[test]
    fn query_apply_matches_free_function() {
        let projects = sample();
        let query = ProjectQuery::new(StatusFilter::Active, "dash");
        assert_eq!(
            ids(&query.apply(&projects)),
            ids(&filter_projects(&projects, StatusFilter::Active, "dash"))
        );
    }

    #[test]
    fn status_filter_parse_and_display() {
        for f in StatusFilter::ALL {
            assert_eq!(f.to_string().parse::<StatusFilter>().unwrap(), f);
        }
        assert_eq!(
            "archived".parse::<StatusFilter>(),
            Err(CoreError::UnknownStatusFilter("archived".into()))
        );
    }
}
