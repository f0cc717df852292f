//! Settings module
//!
//! A small YAML document holding the organisation, team and local defaults
//! used to fill in operation arguments.
//!
//! - `Settings` - the document, with kebab-case keys on disk
//! - `SettingsStore` - explicit load / reload / save against one file
//!
//! Nothing here is global: callers hold the snapshot they loaded and ask the
//! store for a fresh one when they need it.

mod store;
mod types;

pub use store::{SettingsStore, DEFAULT_SETTINGS_PATH};
pub(crate) use types::split_list;
pub use types::{GithubSettings, LocalSettings, Settings};
