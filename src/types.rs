//! Common types used throughout gh-navigator
//!
//! Small enums shared by the HTTP layer, the GitHub requests and the catalog.

use serde::{Deserialize, Serialize};

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PUT => reqwest::Method::PUT,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Pull Request Types
// ============================================================================

/// Pull request list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    #[default]
    Open,
    Closed,
    All,
}

impl PullRequestState {
    /// Query parameter value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

impl std::str::FromStr for PullRequestState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "all" => Ok(Self::All),
            other => Err(format!("expected open, closed or all, got '{other}'")),
        }
    }
}

/// Review event submitted with a pull request review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    #[default]
    Comment,
    Approve,
    RequestChanges,
}

/// Merge strategy for a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMethod {
    #[default]
    Merge,
    Squash,
    Rebase,
}

impl std::str::FromStr for MergeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            other => Err(format!("expected merge, squash or rebase, got '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::PATCH), reqwest::Method::PATCH);
        assert_eq!(Method::default(), Method::GET);
        assert_eq!(Method::DELETE.to_string(), "DELETE");
    }

    #[test]
    fn test_pull_request_state_parse() {
        assert_eq!("OPEN".parse::<PullRequestState>(), Ok(PullRequestState::Open));
        assert_eq!("all".parse::<PullRequestState>(), Ok(PullRequestState::All));
        assert!("merged".parse::<PullRequestState>().is_err());
        assert_eq!("Rebase".parse::<MergeMethod>(), Ok(MergeMethod::Rebase));
        assert!("fast-forward".parse::<MergeMethod>().is_err());
    }

    #[test]
    fn test_review_event_serialization() {
        let json = serde_json::to_value(ReviewEvent::RequestChanges).unwrap();
        assert_eq!(json, "REQUEST_CHANGES");
        let json = serde_json::to_value(MergeMethod::Squash).unwrap();
        assert_eq!(json, "squash");
    }
}
