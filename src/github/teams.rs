//! Team endpoints

use super::client::GitHubClient;
use crate::error::Result;
use crate::response::ApiResponse;
use serde_json::json;

/// Requests scoped to one team of an organisation
#[derive(Debug, Clone)]
pub struct TeamRequests<'a> {
    client: &'a GitHubClient,
    org: String,
    team: String,
}

impl<'a> TeamRequests<'a> {
    pub fn new(client: &'a GitHubClient, org: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            client,
            org: org.into(),
            team: team.into(),
        }
    }

    /// All teams of the organisation
    pub async fn list_teams(&self) -> Result<ApiResponse> {
        self.client.get(&format!("/orgs/{}/teams", self.org)).await
    }

    pub async fn members(&self) -> Result<ApiResponse> {
        self.client
            .get(&format!("/orgs/{}/teams/{}/members", self.org, self.team))
            .await
    }

    pub async fn repos(&self) -> Result<ApiResponse> {
        self.client
            .get(&format!("/orgs/{}/teams/{}/repos", self.org, self.team))
            .await
    }

    /// Add or update a membership; `role` is `member` or `maintainer`
    pub async fn add_member(&self, username: &str, role: &str) -> Result<ApiResponse> {
        self.client
            .put(&self.membership_path(username), json!({ "role": role }))
            .await
    }

    pub async fn remove_member(&self, username: &str) -> Result<ApiResponse> {
        self.client.delete(&self.membership_path(username)).await
    }

    fn membership_path(&self, username: &str) -> String {
        format!(
            "/orgs/{}/teams/{}/memberships/{username}",
            self.org, self.team
        )
    }
}
