//! CLI commands and argument parsing

use crate::fanout::DEFAULT_CONCURRENCY;
use crate::settings::DEFAULT_SETTINGS_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Navigate GitHub team repositories, members, branches and pull requests
#[derive(Parser, Debug)]
#[command(name = "gh-navigator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Maximum concurrent requests for team-wide operations
    #[arg(long, global = true, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available operations
    List,

    /// Run one operation
    Run {
        /// Operation name (see `list`)
        operation: String,

        /// Argument as name=value (repeatable)
        #[arg(short, long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Keep only these fields (comma-separated dot-paths)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Write the result as CSV to this file instead of printing JSON
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Pick operations and enter arguments at prompts
    Interactive,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// `settings` subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the settings document
    Show,

    /// Set one key, e.g. `github.organisation acme`
    Set {
        key: String,
        /// Lists are comma-separated
        value: String,
    },
}

/// Split `name=value`
pub fn parse_arg(raw: &str) -> Option<(&str, &str)> {
    let (name, value) = raw.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then_some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::parse_from([
            "gh-navigator",
            "run",
            "pull-request",
            "--arg",
            "repo=acme/api",
            "-a",
            "number=3",
            "--fields",
            "title,user.login",
            "--concurrency",
            "2",
        ]);

        assert_eq!(cli.concurrency, 2);
        assert_eq!(cli.settings, PathBuf::from(DEFAULT_SETTINGS_PATH));
        let Commands::Run {
            operation,
            args,
            fields,
            csv,
        } = cli.command
        else {
            panic!("expected run");
        };
        assert_eq!(operation, "pull-request");
        assert_eq!(args, vec!["repo=acme/api", "number=3"]);
        assert_eq!(fields, vec!["title", "user.login"]);
        assert!(csv.is_none());
    }

    #[test]
    fn test_parse_settings_set() {
        let cli = Cli::parse_from([
            "gh-navigator",
            "--settings",
            "/tmp/s.yaml",
            "settings",
            "set",
            "github.team",
            "core",
        ]);
        assert_eq!(cli.settings, PathBuf::from("/tmp/s.yaml"));
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: SettingsAction::Set { .. }
            }
        ));
    }

    #[test]
    fn test_parse_arg() {
        assert_eq!(parse_arg("repo=acme/api"), Some(("repo", "acme/api")));
        assert_eq!(parse_arg("body=a=b"), Some(("body", "a=b")));
        assert_eq!(parse_arg("title="), Some(("title", "")));
        assert_eq!(parse_arg("=x"), None);
        assert_eq!(parse_arg("repo"), None);
    }
}
