//! The operation table

use super::types::{OperationKind, OperationSpec, ParamKind, ParamSpec, Section};
use crate::error::{Error, Result};

const ORG: ParamSpec = ParamSpec::from_setting("org", ParamKind::Text, "github.organisation");
const TEAM: ParamSpec = ParamSpec::from_setting("team", ParamKind::Text, "github.team");
const REPO: ParamSpec = ParamSpec::required("repo", ParamKind::Text);
const NUMBER: ParamSpec = ParamSpec::required("number", ParamKind::Integer);
const STATE: ParamSpec = ParamSpec::optional("state", ParamKind::Text, "open");

/// Every runnable operation, grouped by section in display order
pub static OPERATIONS: &[OperationSpec] = &[
    // Team
    OperationSpec {
        name: "team-slugs",
        section: Section::Team,
        summary: "Teams in the organisation",
        kind: OperationKind::TeamSlugs,
        params: &[ORG],
    },
    OperationSpec {
        name: "team-members",
        section: Section::Team,
        summary: "Logins of the team's members",
        kind: OperationKind::TeamMembers,
        params: &[ORG, TEAM],
    },
    OperationSpec {
        name: "team-repos",
        section: Section::Team,
        summary: "Repositories the team can access, minus ignored ones",
        kind: OperationKind::TeamRepositories,
        params: &[ORG, TEAM],
    },
    OperationSpec {
        name: "team-branches",
        section: Section::Team,
        summary: "Branch names of every team repository",
        kind: OperationKind::TeamBranches,
        params: &[ORG, TEAM],
    },
    OperationSpec {
        name: "team-pull-requests",
        section: Section::Team,
        summary: "Open pull requests across team repositories",
        kind: OperationKind::TeamPullRequests,
        params: &[
            ORG,
            TEAM,
            ParamSpec::from_setting("creators", ParamKind::List, "github.active-team-members"),
        ],
    },
    OperationSpec {
        name: "add-team-member",
        section: Section::Team,
        summary: "Add or update a team membership",
        kind: OperationKind::AddTeamMember,
        params: &[
            ORG,
            TEAM,
            ParamSpec::required("username", ParamKind::Text),
            ParamSpec::optional("role", ParamKind::Text, "member"),
        ],
    },
    OperationSpec {
        name: "remove-team-member",
        section: Section::Team,
        summary: "Remove a team membership",
        kind: OperationKind::RemoveTeamMember,
        params: &[ORG, TEAM, ParamSpec::required("username", ParamKind::Text)],
    },
    // Repository
    OperationSpec {
        name: "repo",
        section: Section::Repository,
        summary: "Repository details",
        kind: OperationKind::Repository,
        params: &[REPO],
    },
    OperationSpec {
        name: "pull-requests",
        section: Section::Repository,
        summary: "Pull requests of a repository",
        kind: OperationKind::PullRequests,
        params: &[REPO, STATE],
    },
    OperationSpec {
        name: "pull-request",
        section: Section::Repository,
        summary: "One pull request",
        kind: OperationKind::PullRequest,
        params: &[REPO, NUMBER],
    },
    OperationSpec {
        name: "issues",
        section: Section::Repository,
        summary: "Issues of a repository",
        kind: OperationKind::Issues,
        params: &[REPO, STATE],
    },
    OperationSpec {
        name: "issue",
        section: Section::Repository,
        summary: "One issue",
        kind: OperationKind::Issue,
        params: &[REPO, NUMBER],
    },
    OperationSpec {
        name: "commits",
        section: Section::Repository,
        summary: "Commits on the default branch",
        kind: OperationKind::Commits,
        params: &[REPO],
    },
    OperationSpec {
        name: "commit",
        section: Section::Repository,
        summary: "One commit",
        kind: OperationKind::Commit,
        params: &[REPO, ParamSpec::required("sha", ParamKind::Text)],
    },
    OperationSpec {
        name: "branches",
        section: Section::Repository,
        summary: "Branches of a repository",
        kind: OperationKind::Branches,
        params: &[REPO],
    },
    OperationSpec {
        name: "collaborators",
        section: Section::Repository,
        summary: "Collaborators of a repository",
        kind: OperationKind::Collaborators,
        params: &[REPO],
    },
    // Pull requests
    OperationSpec {
        name: "reviews",
        section: Section::PullRequest,
        summary: "Reviews on a pull request",
        kind: OperationKind::Reviews,
        params: &[REPO, NUMBER],
    },
    OperationSpec {
        name: "pr-files",
        section: Section::PullRequest,
        summary: "Files changed by a pull request",
        kind: OperationKind::PullRequestFiles,
        params: &[REPO, NUMBER],
    },
    OperationSpec {
        name: "pr-comments",
        section: Section::PullRequest,
        summary: "Review comments on a pull request",
        kind: OperationKind::PullRequestComments,
        params: &[REPO, NUMBER],
    },
    OperationSpec {
        name: "comment",
        section: Section::PullRequest,
        summary: "Comment on a pull request",
        kind: OperationKind::AddComment,
        params: &[REPO, NUMBER, ParamSpec::required("body", ParamKind::Text)],
    },
    OperationSpec {
        name: "approve",
        section: Section::PullRequest,
        summary: "Approve a pull request",
        kind: OperationKind::Approve,
        params: &[REPO, NUMBER, ParamSpec::optional("body", ParamKind::Text, "")],
    },
    OperationSpec {
        name: "request-changes",
        section: Section::PullRequest,
        summary: "Request changes on a pull request",
        kind: OperationKind::RequestChanges,
        params: &[REPO, NUMBER, ParamSpec::required("body", ParamKind::Text)],
    },
    OperationSpec {
        name: "merge",
        section: Section::PullRequest,
        summary: "Merge a pull request",
        kind: OperationKind::Merge,
        params: &[
            REPO,
            NUMBER,
            ParamSpec::optional("method", ParamKind::Text, "merge"),
            ParamSpec::optional("title", ParamKind::Text, ""),
        ],
    },
    OperationSpec {
        name: "close",
        section: Section::PullRequest,
        summary: "Close a pull request without merging",
        kind: OperationKind::Close,
        params: &[REPO, NUMBER],
    },
];

/// Look up an operation by name
pub fn find(name: &str) -> Result<&'static OperationSpec> {
    OPERATIONS
        .iter()
        .find(|op| op.name == name)
        .ok_or_else(|| Error::unknown_operation(name))
}

/// Operations of one section, in table order
pub fn in_section(section: Section) -> Vec<&'static OperationSpec> {
    OPERATIONS.iter().filter(|op| op.section == section).collect()
}
