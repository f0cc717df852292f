//! CLI module
//!
//! Command-line interface for the navigator.
//!
//! # Commands
//!
//! - `list` - Show the operation catalog
//! - `run` - Run one operation with `name=value` arguments
//! - `interactive` - Pick operations and answer prompts
//! - `settings` - Show or change the settings document

mod commands;
mod runner;

pub use commands::{parse_arg, Cli, Commands, SettingsAction};
pub use runner::{interact, project, render_catalog, Runner};
