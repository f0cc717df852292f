// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gh-navigator
//!
//! Paginated GitHub REST access with chainable, read-only projections over
//! the results, plus a small catalog of team-oriented operations that can be
//! run from the command line or an interactive prompt.
//!
//! ## Features
//!
//! - **Pagination**: page counter or `Link: rel="next"`, concatenated in order
//! - **Projections**: `get_fields`, `pluck`, `head`, `last`, `take`, `limit`
//! - **Team aggregates**: branches and open pull requests across a team's
//!   repositories with bounded concurrency
//! - **Export**: pretty JSON or CSV
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gh_navigator::{GitHubClient, HttpClientConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = GitHubClient::from_env(HttpClientConfig::default())?;
//!
//!     let repos = client.get("/orgs/acme/teams/core/repos").await?;
//!     println!("{}", repos.get_fields(["name", "owner.login"]).pretty_print());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │            CLI: list / run / interactive / settings          │
//! └──────────────────────────────┬───────────────────────────────┘
//! ┌──────────────┬───────────────┴──────┬────────────────────────┐
//! │   Catalog    │       GitHub         │   Settings / Output    │
//! ├──────────────┼──────────────────────┼────────────────────────┤
//! │ Operations   │ Teams, Repos, Pulls  │ YAML store             │
//! │ Navigator    │ TeamOverview fan-out │ CSV export             │
//! └──────────────┴──────────┬───────────┴────────────────────────┘
//! ┌──────────┬──────────────┴───┬───────────────┬───────────────┐
//! │   Auth   │      HTTP        │   Paginate    │   Response    │
//! ├──────────┼──────────────────┼───────────────┼───────────────┤
//! │ Bearer   │ GET/POST/PUT/... │ Page number   │ Projections   │
//! │ token    │ Timeout          │ Link header   │ Pretty print  │
//! └──────────┴──────────────────┴───────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bearer token authentication
pub mod auth;

/// HTTP client
pub mod http;

/// Pagination strategies and the paginated fetcher
pub mod pagination;

/// Response wrapper and projections
pub mod response;

/// Bounded concurrent fan-out
pub mod fanout;

/// GitHub endpoint families and team aggregates
pub mod github;

/// YAML settings store
pub mod settings;

/// CSV export
pub mod output;

/// Operation catalog and navigator
pub mod catalog;

/// Logging setup
pub mod logging;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use github::{GitHubClient, TeamOverview};
pub use http::HttpClientConfig;
pub use response::ApiResponse;
pub use settings::{Settings, SettingsStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
