//! Configuration loading and validation.
//!
//! The configuration file is optional TOML. Every field has a default, so a
//! missing file or a missing section behaves exactly like the stock rules:
//! collect `*rc` files and `xmonad.hs` from home and from `~/.config`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Candidate collection rules
    #[serde(default)]
    pub collect: CollectConfig,
}

/// Rules deciding which files under home are candidates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectConfig {
    /// Exact file names that are always selected
    #[serde(default = "default_reserved_names")]
    pub reserved_names: Vec<String>,
    /// Literal name suffix that selects a file
    #[serde(default = "default_suffix")]
    pub suffix: String,
    /// Subdirectory of home that is walked recursively
    #[serde(default = "default_nested_dir")]
    pub nested_dir: PathBuf,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            reserved_names: default_reserved_names(),
            suffix: default_suffix(),
            nested_dir: default_nested_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Check the configuration for values that cannot work.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `collect.suffix` is empty (it would select every file)
    /// - `collect.nested_dir` is absolute or escapes home with `..`
    pub fn validate(&self) -> Result<()> {
        if self.collect.suffix.is_empty() {
            anyhow::bail!("collect.suffix must not be empty");
        }

        let nested = &self.collect.nested_dir;
        if nested.as_os_str().is_empty()
            || nested
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            anyhow::bail!(
                "collect.nested_dir must be a relative path inside home: {}",
                nested.display()
            );
        }

        Ok(())
    }
}

// Default functions for serde
fn default_reserved_names() -> Vec<String> {
    vec!["xmonad.hs".to_string()]
}

fn default_suffix() -> String {
    "rc".to_string()
}

fn default_nested_dir() -> PathBuf {
    PathBuf::from(".config")
}
