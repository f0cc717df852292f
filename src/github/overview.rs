//! Team-wide aggregates
//!
//! Each aggregate lists a team's repositories and then fans out one call
//! per repository. A repository whose call fails is logged and left out;
//! the rest of the report is still produced.

use super::client::GitHubClient;
use super::models::{Branch, Member, PullRequest, PullRequestSummary, Repository, Team};
use super::repos::RepoRequests;
use super::teams::TeamRequests;
use crate::error::{Error, Result};
use crate::fanout::{fan_out, FanOut, DEFAULT_CONCURRENCY};
use crate::types::PullRequestState;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

/// Branch names of one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryBranches {
    pub repository: String,
    pub branches: Vec<String>,
}

/// Aggregated queries over a team's repositories
#[derive(Debug, Clone)]
pub struct TeamOverview<'a> {
    client: &'a GitHubClient,
    concurrency: usize,
    ignored_repositories: HashSet<String>,
}

impl<'a> TeamOverview<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self {
            client,
            concurrency: DEFAULT_CONCURRENCY,
            ignored_repositories: HashSet::new(),
        }
    }

    /// Cap on concurrent per-repository calls
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Repositories to leave out, by name or `owner/name`
    #[must_use]
    pub fn with_ignored_repositories<I, S>(mut self, repos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_repositories = repos.into_iter().map(Into::into).collect();
        self
    }

    /// Team slugs of an organisation
    pub async fn team_slugs(&self, org: &str) -> Result<Vec<String>> {
        info!("Fetching teams in {org}");
        let teams: Vec<Team> = TeamRequests::new(self.client, org, "")
            .list_teams()
            .await?
            .parse_as()?;
        Ok(teams.into_iter().map(|t| t.slug).collect())
    }

    /// Logins of a team's members
    pub async fn team_members(&self, org: &str, team: &str) -> Result<Vec<String>> {
        info!("Fetching team members from {team} in {org}");
        let members: Vec<Member> = TeamRequests::new(self.client, org, team)
            .members()
            .await?
            .parse_as()?;
        Ok(members.into_iter().map(|m| m.login).collect())
    }

    /// Full names of a team's repositories, minus ignored ones
    pub async fn team_repositories(&self, org: &str, team: &str) -> Result<Vec<String>> {
        info!("Fetching repositories for team {team} in {org}");
        let repos: Vec<Repository> = TeamRequests::new(self.client, org, team)
            .repos()
            .await?
            .parse_as()?;

        let names: Vec<String> = repos
            .into_iter()
            .filter(|r| {
                !self.ignored_repositories.contains(&r.name)
                    && !self.ignored_repositories.contains(&r.full_name)
            })
            .map(|r| r.full_name)
            .collect();
        info!("Found {} repositories", names.len());
        Ok(names)
    }

    /// Branch names of one `owner/repo`
    pub async fn repository_branches(&self, full_name: &str) -> Result<Vec<String>> {
        let branches: Vec<Branch> = self.repo(full_name)?.branches().await?.parse_as()?;
        Ok(branches.into_iter().map(|b| b.name).collect())
    }

    /// Branches of every team repository
    pub async fn team_branches(&self, org: &str, team: &str) -> Result<Vec<RepositoryBranches>> {
        Ok(self.team_branches_report(org, team).await?.into_values())
    }

    /// Like [`team_branches`](Self::team_branches), keeping the
    /// repositories whose call failed alongside their errors
    pub async fn team_branches_report(
        &self,
        org: &str,
        team: &str,
    ) -> Result<FanOut<String, RepositoryBranches>> {
        let repos = self.team_repositories(org, team).await?;

        let outcome = fan_out(repos, self.concurrency, |repository| async move {
            let branches = self.repository_branches(&repository).await?;
            Ok(RepositoryBranches {
                repository,
                branches,
            })
        })
        .await;

        if !outcome.is_complete() {
            warn!(
                "{} of the {team} repositories could not be read",
                outcome.failed.len()
            );
        }
        Ok(outcome)
    }

    /// Open pull requests of one `owner/repo`
    ///
    /// `creators` filters on the author login; an empty filter keeps all.
    pub async fn repository_pull_requests(
        &self,
        full_name: &str,
        creators: &[String],
    ) -> Result<Vec<PullRequestSummary>> {
        info!("Fetching pull requests from {full_name}");
        let prs: Vec<PullRequest> = self
            .repo(full_name)?
            .pull_requests(PullRequestState::Open)
            .await?
            .parse_as()?;

        Ok(prs
            .into_iter()
            .filter(|pr| creators.is_empty() || creators.contains(&pr.user.login))
            .map(|pr| PullRequestSummary::from_pull_request(full_name, pr))
            .collect())
    }

    /// Open pull requests across a team's repositories, in repository order
    pub async fn open_pull_requests(
        &self,
        org: &str,
        team: &str,
        creators: &[String],
    ) -> Result<Vec<PullRequestSummary>> {
        let repos = self.team_repositories(org, team).await?;
        Ok(self.pull_requests_for(repos, creators).await)
    }

    /// Open pull requests across the given repositories
    pub async fn pull_requests_for(
        &self,
        repos: Vec<String>,
        creators: &[String],
    ) -> Vec<PullRequestSummary> {
        let outcome = fan_out(repos, self.concurrency, |repository| async move {
            self.repository_pull_requests(&repository, creators).await
        })
        .await;

        outcome.into_values().into_iter().flatten().collect()
    }

    fn repo(&self, full_name: &str) -> Result<RepoRequests<'a>> {
        RepoRequests::from_full_name(self.client, full_name).ok_or_else(|| {
            Error::invalid_argument("repository", format!("expected owner/name, got '{full_name}'"))
        })
    }
}
