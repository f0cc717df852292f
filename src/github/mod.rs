//! GitHub REST API module
//!
//! Endpoint families built on the paginating client:
//! - [`TeamRequests`] - teams, members, team repositories
//! - [`RepoRequests`] - pull requests, issues, commits, branches, collaborators
//! - [`PullRequestActions`] - reviews, comments, merges
//! - [`TeamOverview`] - cross-repository aggregates using bounded fan-out

mod client;
mod models;
mod overview;
mod pulls;
mod repos;
mod teams;

pub use client::{GitHubClient, API_URL_ENV_VAR};
pub use models::{Branch, Member, PullRequest, PullRequestSummary, Repository, Team, User};
pub use overview::{RepositoryBranches, TeamOverview};
pub use pulls::{PullRequestActions, PullRequestUpdate};
pub use repos::RepoRequests;
pub use teams::TeamRequests;
