//! Pull request actions

use super::client::GitHubClient;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::types::{MergeMethod, ReviewEvent};
use serde::Serialize;
use serde_json::json;

/// Fields to change on a pull request; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct PullRequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Review, comment and merge actions on one repository's pull requests
#[derive(Debug, Clone)]
pub struct PullRequestActions<'a> {
    client: &'a GitHubClient,
    owner: String,
    repo: String,
}

impl<'a> PullRequestActions<'a> {
    pub fn new(client: &'a GitHubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn reviews(&self, number: u64) -> Result<ApiResponse> {
        self.client
            .get(&self.path(&format!("/pulls/{number}/reviews")))
            .await
    }

    pub async fn create_review(
        &self,
        number: u64,
        body: &str,
        event: ReviewEvent,
    ) -> Result<ApiResponse> {
        self.client
            .post(
                &self.path(&format!("/pulls/{number}/reviews")),
                json!({ "body": body, "event": event }),
            )
            .await
    }

    /// Submit a pending review
    pub async fn submit_review(
        &self,
        number: u64,
        review_id: u64,
        body: &str,
        event: ReviewEvent,
    ) -> Result<ApiResponse> {
        self.client
            .post(
                &self.path(&format!("/pulls/{number}/reviews/{review_id}/events")),
                json!({ "body": body, "event": event }),
            )
            .await
    }

    pub async fn merge(
        &self,
        number: u64,
        commit_title: Option<&str>,
        method: MergeMethod,
    ) -> Result<ApiResponse> {
        let mut body = json!({ "merge_method": method });
        if let Some(title) = commit_title {
            body["commit_title"] = json!(title);
        }
        self.client
            .put(&self.path(&format!("/pulls/{number}/merge")), body)
            .await
    }

    /// Review comments on the diff
    pub async fn comments(&self, number: u64) -> Result<ApiResponse> {
        self.client
            .get(&self.path(&format!("/pulls/{number}/comments")))
            .await
    }

    /// Conversation comment (pull requests share the issue comment thread)
    pub async fn add_comment(&self, number: u64, body: &str) -> Result<ApiResponse> {
        self.client
            .post(
                &self.path(&format!("/issues/{number}/comments")),
                json!({ "body": body }),
            )
            .await
    }

    pub async fn update(&self, number: u64, update: &PullRequestUpdate) -> Result<ApiResponse> {
        self.client
            .patch(
                &self.path(&format!("/pulls/{number}")),
                serde_json::to_value(update)?,
            )
            .await
    }

    pub async fn files(&self, number: u64) -> Result<ApiResponse> {
        self.client
            .get(&self.path(&format!("/pulls/{number}/files")))
            .await
    }

    pub async fn approve(&self, number: u64, body: &str) -> Result<ApiResponse> {
        self.create_review(number, body, ReviewEvent::Approve).await
    }

    pub async fn request_changes(&self, number: u64, body: &str) -> Result<ApiResponse> {
        self.create_review(number, body, ReviewEvent::RequestChanges)
            .await
    }

    fn path(&self, suffix: &str) -> String {
        format!("/repos/{}/{}{suffix}", self.owner, self.repo)
    }
}
