//! File-backed settings store

use super::types::Settings;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings file used when none is given
pub const DEFAULT_SETTINGS_PATH: &str = "settings.yaml";

/// Reads and rewrites one settings document
///
/// The store holds no cached copy; every [`reload`](Self::reload) reads the
/// file again and hands back an owned snapshot.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_PATH)
    }
}

impl SettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the document; a missing file is an error
    pub fn reload(&self) -> Result<Settings> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::settings(format!(
                "Failed to read settings file {}: {e}",
                self.path.display()
            ))
        })?;
        let settings = parse(&contents)?;
        debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Read the document, falling back to empty settings if the file is absent
    pub fn load(&self) -> Result<Settings> {
        if self.exists() {
            self.reload()
        } else {
            info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            Ok(Settings::default())
        }
    }

    /// Rewrite the whole document
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let contents = serde_yaml::to_string(settings)?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, contents).map_err(|e| {
            Error::settings(format!("Failed to write settings file: {e}"))
        })?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::settings(format!("Failed to rename settings file: {e}"))
        })?;

        info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Set one key and save, returning the new snapshot
    pub fn update(&self, key: &str, value: &str) -> Result<Settings> {
        let settings = self.load()?.set(key, value)?;
        self.save(&settings)?;
        Ok(settings)
    }
}

/// Parse a settings document; an empty file yields defaults
pub(crate) fn parse(contents: &str) -> Result<Settings> {
    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}
