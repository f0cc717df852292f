//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt subscriber on stderr. `RUST_LOG`
//! overrides the level chosen from [`LogConfig`]. An optional debug log file
//! receives every event at DEBUG and above; the file sits behind a mutex
//! that is held only while one event is written.

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// How the process logs
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Log at DEBUG instead of INFO
    pub verbose: bool,
    /// Append debug output to this file as well
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    pub fn new(verbose: bool, log_file: Option<PathBuf>) -> Self {
        Self { verbose, log_file }
    }

    /// Level used when `RUST_LOG` is not set
    pub fn level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level()).into())
            .from_env_lossy()
    }

    fn open_log_file(&self) -> Result<Option<File>> {
        let Some(path) = &self.log_file else {
            return Ok(None);
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::config(format!("Cannot open log file {}: {e}", path.display())))?;
        Ok(Some(file))
    }
}

/// Install the global subscriber
///
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(config: &LogConfig) -> Result<()> {
    let file_layer = config.open_log_file()?.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(config.env_filter()))
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialise logging: {e}")))
}
