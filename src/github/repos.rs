//! Repository endpoints

use super::client::GitHubClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::PullRequestState;
use serde_json::json;
use std::collections::HashMap;

/// Requests scoped to one repository
#[derive(Debug, Clone)]
pub struct RepoRequests<'a> {
    client: &'a GitHubClient,
    owner: String,
    repo: String,
}

impl<'a> RepoRequests<'a> {
    pub fn new(client: &'a GitHubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Build from an `owner/repo` full name
    pub fn from_full_name(client: &'a GitHubClient, full_name: &str) -> Option<Self> {
        let (owner, repo) = full_name.split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::new(client, owner, repo))
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub async fn get(&self) -> Result<ApiResponse> {
        self.client.get(&self.path("")).await
    }

    pub async fn pull_requests(&self, state: PullRequestState) -> Result<ApiResponse> {
        self.client
            .get_with_query(&self.path("/pulls"), &state_query(state))
            .await
    }

    pub async fn pull_request(&self, number: u64) -> Result<ApiResponse> {
        self.client.get(&self.path(&format!("/pulls/{number}"))).await
    }

    pub async fn issues(&self, state: PullRequestState) -> Result<ApiResponse> {
        self.client
            .get_with_query(&self.path("/issues"), &state_query(state))
            .await
    }

    pub async fn issue(&self, number: u64) -> Result<ApiResponse> {
        self.client.get(&self.path(&format!("/issues/{number}"))).await
    }

    pub async fn commits(&self) -> Result<ApiResponse> {
        self.client.get(&self.path("/commits")).await
    }

    pub async fn commit(&self, sha: &str) -> Result<ApiResponse> {
        self.client.get(&self.path(&format!("/commits/{sha}"))).await
    }

    pub async fn branches(&self) -> Result<ApiResponse> {
        self.client.get(&self.path("/branches")).await
    }

    pub async fn branch(&self, name: &str) -> Result<ApiResponse> {
        self.client.get(&self.path(&format!("/branches/{name}"))).await
    }

    pub async fn collaborators(&self) -> Result<ApiResponse> {
        self.client.get(&self.path("/collaborators")).await
    }

    /// Invite or update a collaborator; `permission` e.g. `pull`, `push`, `admin`
    pub async fn add_collaborator(&self, username: &str, permission: &str) -> Result<ApiResponse> {
        self.client
            .put(
                &self.path(&format!("/collaborators/{username}")),
                json!({ "permission": permission }),
            )
            .await
    }

    pub async fn remove_collaborator(&self, username: &str) -> Result<ApiResponse> {
        self.client
            .delete(&self.path(&format!("/collaborators/{username}")))
            .await
    }

    fn path(&self, suffix: &str) -> String {
        format!("/repos/{}/{}{suffix}", self.owner, self.repo)
    }
}

fn state_query(state: PullRequestState) -> HashMap<String, String> {
    let mut query = HashMap::new();
    query.insert("state".to_string(), state.as_str().to_string());
    query
}
