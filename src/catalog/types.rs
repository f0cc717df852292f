//! Catalog types

use crate::error::{Error, Result};
use crate::settings::Settings;
use std::collections::BTreeMap;
use std::fmt;

/// Group of related operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Team,
    Repository,
    PullRequest,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Team, Section::Repository, Section::PullRequest];

    pub fn title(self) -> &'static str {
        match self {
            Section::Team => "Team",
            Section::Repository => "Repository",
            Section::PullRequest => "Pull requests",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How a raw argument is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    /// Non-negative integer
    Integer,
    /// Comma-separated list
    List,
}

impl ParamKind {
    /// Parse a raw, non-blank value
    pub fn parse(self, param: &str, raw: &str) -> Result<ArgValue> {
        let raw = raw.trim();
        match self {
            ParamKind::Text => Ok(ArgValue::Text(raw.to_string())),
            ParamKind::Integer => raw.parse::<u64>().map(ArgValue::Integer).map_err(|_| {
                Error::invalid_argument(param, format!("expected a whole number, got '{raw}'"))
            }),
            ParamKind::List => Ok(ArgValue::List(crate::settings::split_list(raw))),
        }
    }
}

/// Where a parameter's value comes from when none is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    /// Must be supplied
    Required,
    /// Fixed value, parsed like user input
    Value(&'static str),
    /// A settings key such as `github.organisation`; required if that is blank
    Setting(&'static str),
}

/// One declared parameter of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub default: ParamDefault,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            default: ParamDefault::Required,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default: ParamDefault::Value(default),
        }
    }

    pub const fn from_setting(name: &'static str, kind: ParamKind, key: &'static str) -> Self {
        Self {
            name,
            kind,
            default: ParamDefault::Setting(key),
        }
    }

    /// Raw default text, if any, with settings looked up
    pub fn default_text(&self, settings: &Settings) -> Option<String> {
        match self.default {
            ParamDefault::Required => None,
            ParamDefault::Value(value) => Some(value.to_string()),
            ParamDefault::Setting(key) => settings
                .get(key)
                .ok()
                .filter(|value| !value.trim().is_empty()),
        }
    }

    /// Resolve a raw answer; blank input falls back to the default
    ///
    /// A blank settings value counts as missing, except for lists, where it
    /// means an empty list.
    pub fn resolve(&self, raw: Option<&str>, settings: &Settings) -> Result<ArgValue> {
        if let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) {
            return self.kind.parse(self.name, raw);
        }
        match (self.default, self.default_text(settings)) {
            (ParamDefault::Value(""), _) => Ok(self.kind.empty()),
            (_, Some(text)) => self.kind.parse(self.name, &text),
            (ParamDefault::Setting(_), None) if self.kind == ParamKind::List => {
                Ok(self.kind.empty())
            }
            (_, None) => Err(Error::invalid_argument(self.name, "a value is required")),
        }
    }
}

impl ParamKind {
    fn empty(self) -> ArgValue {
        match self {
            ParamKind::List => ArgValue::List(Vec::new()),
            _ => ArgValue::Text(String::new()),
        }
    }
}

/// A parsed argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Integer(u64),
    List(Vec<String>),
}

/// Arguments of one call, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(BTreeMap<String, ArgValue>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        match self.0.get(name) {
            Some(ArgValue::Text(s)) => Ok(s),
            _ => Err(missing(name)),
        }
    }

    /// Text argument, `None` when blank
    pub fn optional_text(&self, name: &str) -> Option<&str> {
        self.text(name).ok().filter(|s| !s.is_empty())
    }

    pub fn integer(&self, name: &str) -> Result<u64> {
        match self.0.get(name) {
            Some(ArgValue::Integer(n)) => Ok(*n),
            _ => Err(missing(name)),
        }
    }

    pub fn list(&self, name: &str) -> Result<&[String]> {
        match self.0.get(name) {
            Some(ArgValue::List(items)) => Ok(items),
            _ => Err(missing(name)),
        }
    }
}

fn missing(name: &str) -> Error {
    Error::invalid_argument(name, "missing or of the wrong kind")
}

/// Identifies what an operation does; matched exhaustively on dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    TeamSlugs,
    TeamMembers,
    TeamRepositories,
    TeamBranches,
    TeamPullRequests,
    AddTeamMember,
    RemoveTeamMember,
    Repository,
    PullRequests,
    PullRequest,
    Issues,
    Issue,
    Commits,
    Commit,
    Branches,
    Collaborators,
    Reviews,
    PullRequestFiles,
    PullRequestComments,
    AddComment,
    Approve,
    RequestChanges,
    Merge,
    Close,
}

/// One runnable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Name used on the command line
    pub name: &'static str,
    pub section: Section,
    pub summary: &'static str,
    pub kind: OperationKind,
    pub params: &'static [ParamSpec],
}

impl OperationSpec {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Resolve named raw arguments against the declared parameters
    ///
    /// Unknown names are rejected; missing ones take their defaults.
    pub fn resolve_args<'r, I>(&self, raw: I, settings: &Settings) -> Result<Args>
    where
        I: IntoIterator<Item = (&'r str, &'r str)>,
    {
        let mut given: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, value) in raw {
            if self.param(name).is_none() {
                return Err(Error::invalid_argument(
                    name,
                    format!("'{}' takes no such parameter", self.name),
                ));
            }
            given.insert(name, value);
        }

        let mut args = Args::new();
        for param in self.params {
            let value = param.resolve(given.get(param.name).copied(), settings)?;
            args.insert(param.name, value);
        }
        Ok(args)
    }
}
