//! Settings document

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The whole settings document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub github: GithubSettings,
    pub local: LocalSettings,
}

/// GitHub defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GithubSettings {
    /// Logins used as the default creator filter for team pull requests
    pub active_team_members: Vec<String>,
    pub organisation: String,
    pub team: String,
    /// Repository names (or `owner/name`) left out of team aggregates
    pub ignored_repositories: Vec<String>,
}

/// Machine-local settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocalSettings {
    pub active_working_directory: String,
}

impl Settings {
    /// Keys accepted by [`Settings::get`] and [`Settings::set`]
    pub const KEYS: &'static [&'static str] = &[
        "github.organisation",
        "github.team",
        "github.active-team-members",
        "github.ignored-repositories",
        "local.active-working-directory",
    ];

    /// Organisation, if one is configured
    pub fn organisation(&self) -> Option<&str> {
        non_empty(&self.github.organisation)
    }

    /// Team slug, if one is configured
    pub fn team(&self) -> Option<&str> {
        non_empty(&self.github.team)
    }

    /// Read a value by dotted key; list values are comma-joined
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "github.organisation" => self.github.organisation.clone(),
            "github.team" => self.github.team.clone(),
            "github.active-team-members" => self.github.active_team_members.join(","),
            "github.ignored-repositories" => self.github.ignored_repositories.join(","),
            "local.active-working-directory" => self.local.active_working_directory.clone(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Return a copy with one value replaced; list values are comma-separated
    pub fn set(&self, key: &str, value: &str) -> Result<Settings> {
        let mut next = self.clone();
        match key {
            "github.organisation" => next.github.organisation = value.trim().to_string(),
            "github.team" => next.github.team = value.trim().to_string(),
            "github.active-team-members" => next.github.active_team_members = split_list(value),
            "github.ignored-repositories" => next.github.ignored_repositories = split_list(value),
            "local.active-working-directory" => {
                next.local.active_working_directory = value.trim().to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(next)
    }
}

/// Split a comma-separated list, dropping blank entries
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn unknown_key(key: &str) -> Error {
    Error::settings(format!(
        "unknown key '{key}', expected one of: {}",
        Settings::KEYS.join(", ")
    ))
}
