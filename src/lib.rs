#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Dotsync - Dotfile Synchronizer
//!
//! Dotsync copies configuration files between a user's home directory and a
//! snapshot directory (usually a git checkout), keeping a manifest of where
//! every file originally lived so it can be reinstalled later.
//!
//! ## Architecture
//!
//! - [`diff`]: Content comparison of a live file against its snapshot copy
//! - [`tracking`]: The `INDEX` manifest, candidate collection and change filtering
//! - [`selector`]: Interactive approval of changed files
//! - [`sync`]: The save and install flows
//! - [`config`]: Configuration parsing and validation
//! - [`output`]: Output formatting and verbosity control
//!
//! ## Example Usage
//!
//! ```no_run
//! use dotsync::DotsyncContext;
//! use std::path::PathBuf;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = DotsyncContext::new_explicit(
//!     PathBuf::from("/home/user"),
//!     PathBuf::from("/home/user/dotfiles"),
//! )?;
//!
//! // Copy ~/.bashrc and friends into the snapshot, approving everything
//! dotsync::commands::save::execute(&ctx, true)?;
//!
//! // Later, on another machine
//! dotsync::commands::install::execute(&ctx)?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations for `save` and `install`.
pub mod commands;

/// Configuration parsing, validation, and management.
pub mod config;

/// Content comparison between live files and snapshot copies.
pub mod diff;

/// Tracing subscriber setup.
pub mod logging;

/// Output formatting and verbosity control.
pub mod output;

/// Interactive approval of changed files.
pub mod selector;

/// Save and install orchestration.
pub mod sync;

/// Manifest, candidate collection, and change filtering.
pub mod tracking;

/// Utility functions and helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the dotsync binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path relative to home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/dotsync/config.toml";

/// Name of the manifest file kept inside the snapshot directory.
pub const INDEX_FILE: &str = "INDEX";

/// Central context for all dotsync operations.
///
/// Holds the two directories every operation works between, plus the loaded
/// configuration.
#[derive(Debug, Clone)]
pub struct DotsyncContext {
    /// The live configuration tree being tracked.
    pub home_dir: PathBuf,

    /// Directory holding copies of collected files plus the `INDEX` manifest.
    pub snapshot_dir: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl DotsyncContext {
    /// Creates a context from explicit (or environment-derived) locations.
    ///
    /// `home_dir` falls back to [`dirs::home_dir`], `snapshot_dir` to the
    /// current working directory and `config_path` to `DOTSYNC_CONFIG_PATH`
    /// or [`DEFAULT_CONFIG_PATH`] under home.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, the
    /// current directory cannot be read, or the configuration is invalid.
    pub fn new(
        home_dir: Option<PathBuf>,
        snapshot_dir: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> Result<Self> {
        let home_dir = match home_dir.filter(|p| !p.as_os_str().is_empty()) {
            Some(home) => home,
            None => dirs::home_dir().context("Could not find home directory: $HOME is not set")?,
        };

        let snapshot_dir = match snapshot_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let config_path = if let Some(path) = config_path {
            path
        } else if let Ok(path) = std::env::var("DOTSYNC_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            home_dir.join(DEFAULT_CONFIG_PATH)
        };

        let config = config::Config::load(&config_path)?;
        config.validate()?;

        tracing::debug!(
            home = %home_dir.display(),
            snapshot = %snapshot_dir.display(),
            "Context initialised"
        );

        Ok(Self {
            home_dir,
            snapshot_dir,
            config,
        })
    }

    /// Creates a context with explicit paths and default configuration.
    /// Used by tests to avoid environment variable manipulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the default configuration fails validation.
    pub fn new_explicit(home_dir: PathBuf, snapshot_dir: PathBuf) -> Result<Self> {
        let config = config::Config::default();
        config.validate()?;
        Ok(Self {
            home_dir,
            snapshot_dir,
            config,
        })
    }

    /// Path of the manifest file for this context's snapshot directory.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.snapshot_dir.join(INDEX_FILE)
    }
}
