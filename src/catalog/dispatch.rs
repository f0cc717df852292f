//! Running catalog operations against the API

use super::types::{Args, OperationKind, OperationSpec};
use crate::error::{Error, Result};
use crate::fanout::DEFAULT_CONCURRENCY;
use crate::github::{
    GitHubClient, PullRequestActions, PullRequestUpdate, RepoRequests, TeamOverview, TeamRequests,
};
use crate::response::ApiResponse;
use crate::settings::Settings;
use crate::types::{MergeMethod, PullRequestState};
use serde::Serialize;
use tracing::info;

/// Runs operations with one client and one settings snapshot
#[derive(Debug)]
pub struct Dispatcher<'a> {
    client: &'a GitHubClient,
    settings: &'a Settings,
    concurrency: usize,
}

impl<'a> Dispatcher<'a> {
    pub fn new(client: &'a GitHubClient, settings: &'a Settings) -> Self {
        Self {
            client,
            settings,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Run `op` with already resolved arguments
    pub async fn execute(&self, op: &OperationSpec, args: &Args) -> Result<ApiResponse> {
        info!("Running {}", op.name);
        match op.kind {
            OperationKind::TeamSlugs => {
                let slugs = self.overview().team_slugs(args.text("org")?).await?;
                to_response(&slugs)
            }
            OperationKind::TeamMembers => {
                let members = self
                    .overview()
                    .team_members(args.text("org")?, args.text("team")?)
                    .await?;
                to_response(&members)
            }
            OperationKind::TeamRepositories => {
                let repos = self
                    .overview()
                    .team_repositories(args.text("org")?, args.text("team")?)
                    .await?;
                to_response(&repos)
            }
            OperationKind::TeamBranches => {
                let branches = self
                    .overview()
                    .team_branches(args.text("org")?, args.text("team")?)
                    .await?;
                to_response(&branches)
            }
            OperationKind::TeamPullRequests => {
                let prs = self
                    .overview()
                    .open_pull_requests(
                        args.text("org")?,
                        args.text("team")?,
                        args.list("creators")?,
                    )
                    .await?;
                to_response(&prs)
            }
            OperationKind::AddTeamMember => {
                self.team(args)?
                    .add_member(args.text("username")?, args.text("role")?)
                    .await
            }
            OperationKind::RemoveTeamMember => {
                self.team(args)?.remove_member(args.text("username")?).await
            }
            OperationKind::Repository => self.repo(args)?.get().await,
            OperationKind::PullRequests => self.repo(args)?.pull_requests(state(args)?).await,
            OperationKind::PullRequest => {
                self.repo(args)?
                    .pull_request(args.integer("number")?)
                    .await
            }
            OperationKind::Issues => self.repo(args)?.issues(state(args)?).await,
            OperationKind::Issue => self.repo(args)?.issue(args.integer("number")?).await,
            OperationKind::Commits => self.repo(args)?.commits().await,
            OperationKind::Commit => self.repo(args)?.commit(args.text("sha")?).await,
            OperationKind::Branches => self.repo(args)?.branches().await,
            OperationKind::Collaborators => self.repo(args)?.collaborators().await,
            OperationKind::Reviews => self.pulls(args)?.reviews(args.integer("number")?).await,
            OperationKind::PullRequestFiles => {
                self.pulls(args)?.files(args.integer("number")?).await
            }
            OperationKind::PullRequestComments => {
                self.pulls(args)?.comments(args.integer("number")?).await
            }
            OperationKind::AddComment => {
                self.pulls(args)?
                    .add_comment(args.integer("number")?, args.text("body")?)
                    .await
            }
            OperationKind::Approve => {
                self.pulls(args)?
                    .approve(args.integer("number")?, args.text("body")?)
                    .await
            }
            OperationKind::RequestChanges => {
                self.pulls(args)?
                    .request_changes(args.integer("number")?, args.text("body")?)
                    .await
            }
            OperationKind::Merge => {
                let method: MergeMethod = args
                    .text("method")?
                    .parse()
                    .map_err(|e: String| Error::invalid_argument("method", e))?;
                self.pulls(args)?
                    .merge(args.integer("number")?, args.optional_text("title"), method)
                    .await
            }
            OperationKind::Close => {
                let update = PullRequestUpdate {
                    state: Some("closed".to_string()),
                    ..Default::default()
                };
                self.pulls(args)?
                    .update(args.integer("number")?, &update)
                    .await
            }
        }
    }

    fn overview(&self) -> TeamOverview<'a> {
        TeamOverview::new(self.client)
            .with_concurrency(self.concurrency)
            .with_ignored_repositories(self.settings.github.ignored_repositories.iter().cloned())
    }

    fn team(&self, args: &Args) -> Result<TeamRequests<'a>> {
        Ok(TeamRequests::new(
            self.client,
            args.text("org")?,
            args.text("team")?,
        ))
    }

    fn repo(&self, args: &Args) -> Result<RepoRequests<'a>> {
        let (owner, name) = split_repo(args.text("repo")?, self.settings)?;
        Ok(RepoRequests::new(self.client, owner, name))
    }

    fn pulls(&self, args: &Args) -> Result<PullRequestActions<'a>> {
        let (owner, name) = split_repo(args.text("repo")?, self.settings)?;
        Ok(PullRequestActions::new(self.client, owner, name))
    }
}

/// `owner/name`, or a bare name owned by the configured organisation
pub fn split_repo(raw: &str, settings: &Settings) -> Result<(String, String)> {
    let raw = raw.trim();
    let invalid = || Error::invalid_argument("repo", format!("expected owner/name, got '{raw}'"));

    match raw.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        Some(_) => Err(invalid()),
        None if raw.is_empty() => Err(invalid()),
        None => settings
            .organisation()
            .map(|org| (org.to_string(), raw.to_string()))
            .ok_or_else(invalid),
    }
}

fn state(args: &Args) -> Result<PullRequestState> {
    args.text("state")?
        .parse()
        .map_err(|e: String| Error::invalid_argument("state", e))
}

fn to_response<T: Serialize>(value: &T) -> Result<ApiResponse> {
    Ok(ApiResponse::new(serde_json::to_value(value)?))
}
