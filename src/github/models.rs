//! Typed views over GitHub payloads
//!
//! Only the fields the aggregates use are modelled; everything else stays
//! available through [`crate::response::ApiResponse`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub login: String,
}

/// A team member entry
pub type Member = User;

/// A team entry from `/orgs/{org}/teams`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A repository entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub archived: bool,
}

/// A branch entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub protected: bool,
}

/// A pull request entry from `/repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub user: User,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
}

/// One row of the team pull request report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PullRequestSummary {
    pub repository: String,
    pub title: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub url: String,
}

impl PullRequestSummary {
    /// Summarise a pull request of `repository`
    pub fn from_pull_request(repository: &str, pr: PullRequest) -> Self {
        Self {
            repository: repository.to_string(),
            title: pr.title,
            created_by: pr.user.login,
            created_at: pr.created_at,
            url: pr.html_url,
        }
    }
}
