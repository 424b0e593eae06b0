//! Core GitHub domain types
//!
//! This module contains the repository and workflow types returned by the
//! Actions API, independent of any concrete HTTP client.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// A repository identified by `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name:  String
}

impl FromStr for RepoId {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self { owner: owner.to_string(), name: name.to_string() })
            }
            _ => Err(DispatchError::Configuration(format!("invalid repository '{}', expected owner/name", s)))
        }
    }
}

impl Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One workflow definition as listed by the Actions API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Opaque workflow identifier used for dispatch and favorites
    pub id:    u64,
    /// Human-readable workflow name
    pub name:  String,
    /// Path of the manifest file inside the repository
    pub path:  String,
    /// Lifecycle state as reported by the API ("active", "disabled_manually", ...)
    #[serde(default)]
    pub state: String
}

impl Workflow {
    /// Last path component of the manifest path, e.g. `ci.yml`.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn is_active(&self) -> bool {
        self.state == "active"
    }

    /// Browser URL of the workflow's runs page.
    pub fn browser_url(&self, repo: &RepoId) -> String {
        format!("https://github.com/{}/actions/workflows/{}", repo, self.file_name())
    }
}

impl Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A branch of the target repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String
}

/// Repository metadata needed to populate the branch selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryData {
    /// Name of the default branch, preselected in the branch dropdown
    pub default_branch: String,
    /// All branches available as dispatch refs
    pub branches:       Vec<Branch>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_name() {
        let repo: RepoId = "octo/widgets".parse().unwrap();
        assert_eq!(repo.owner, "octo");
        assert_eq!(repo.name, "widgets");
        assert_eq!(repo.to_string(), "octo/widgets");
    }

    #[test]
    fn rejects_malformed_repository() {
        assert!("just-a-name".parse::<RepoId>().is_err());
        assert!("/missing-owner".parse::<RepoId>().is_err());
        assert!("missing-name/".parse::<RepoId>().is_err());
    }

    #[test]
    fn file_name_is_last_path_component() {
        let workflow = Workflow {
            id:    1,
            name:  "CI".to_string(),
            path:  ".github/workflows/ci.yml".to_string(),
            state: "active".to_string()
        };
        assert_eq!(workflow.file_name(), "ci.yml");
    }

    #[test]
    fn browser_url_points_at_the_runs_page() {
        let workflow = Workflow {
            id:    1,
            name:  "CI".to_string(),
            path:  ".github/workflows/ci.yml".to_string(),
            state: "active".to_string()
        };
        let repo: RepoId = "octo/widgets".parse().unwrap();
        assert_eq!(workflow.browser_url(&repo), "https://github.com/octo/widgets/actions/workflows/ci.yml");
    }
}
