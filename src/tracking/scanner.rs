//! Candidate discovery in the home directory.
//!
//! The `Collector` gathers files whose names look like configuration files:
//! anything ending in the configured suffix (`rc` by default) plus a short
//! list of reserved names (`xmonad.hs`). Home itself is scanned one level
//! deep; the nested configuration directory (`.config`) is walked fully.

use crate::config::CollectConfig;
use anyhow::{Context, Result};
use std::fs::{self, Metadata};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lists the immediate children of `path` (no recursion), in file-name
/// order, calling `visit` with each child's path and metadata.
///
/// Metadata errors for a single entry are handed to `visit`, which decides
/// whether they matter. The first error returned by `visit` aborts the walk.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or `visit` fails.
pub fn flat_walk<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path, io::Result<Metadata>) -> Result<()>,
{
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list directory: {}", path.display()))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        visit(&entry.path(), entry.metadata())?;
    }

    Ok(())
}

/// Accumulates candidate files matching the naming convention.
#[derive(Debug, Clone)]
pub struct Collector {
    /// Names always selected regardless of suffix
    reserved_names: Vec<String>,
    /// Literal suffix selecting a file
    suffix: String,
    /// Paths selected so far, in discovery order
    candidates: Vec<PathBuf>,
}

impl Collector {
    /// Creates an empty collector using the configured naming rules.
    #[must_use]
    pub fn new(rules: &CollectConfig) -> Self {
        Self {
            reserved_names: rules.reserved_names.clone(),
            suffix: rules.suffix.clone(),
            candidates: Vec::new(),
        }
    }

    /// Whether a file with this name is a candidate.
    #[must_use]
    pub fn is_candidate_name(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|reserved| reserved == name) || name.ends_with(&self.suffix)
    }

    /// Visitor for [`flat_walk`]: records matching files, skips directories,
    /// and logs-and-skips entries whose metadata could not be read.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the walk callback.
    pub fn visit(&mut self, path: &Path, metadata: io::Result<Metadata>) -> Result<()> {
        let metadata = match metadata {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error walking, skipping entry");
                return Ok(());
            }
        };

        if metadata.is_dir() {
            return Ok(());
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!(path = %path.display(), "Skipping non UTF-8 file name");
            return Ok(());
        };

        if self.is_candidate_name(name) {
            debug!(path = %path.display(), "Candidate found");
            self.candidates.push(path.to_path_buf());
        }

        Ok(())
    }

    /// Scans the immediate children of `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be listed.
    pub fn collect_shallow(&mut self, dir: &Path) -> Result<()> {
        flat_walk(dir, |path, metadata| self.visit(path, metadata))
    }

    /// Walks `dir` recursively. Every traversal error, including a missing
    /// `dir`, is logged and skipped.
    pub fn collect_recursive(&mut self, dir: &Path) {
        for entry in WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    let metadata = entry.metadata().map_err(io::Error::from);
                    // visit only fails through its signature
                    let _ = self.visit(entry.path(), metadata);
                }
                Err(e) => {
                    let path = e.path().unwrap_or(dir).to_path_buf();
                    match e.io_error().map(io::Error::kind) {
                        Some(ErrorKind::NotFound) => {
                            debug!(path = %path.display(), "Directory not found, skipping");
                        }
                        _ => warn!(path = %path.display(), error = %e, "Error walking, skipping entry"),
                    }
                }
            }
        }
    }

    /// Candidates collected so far.
    #[must_use]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Consumes the collector, returning the candidates.
    #[must_use]
    pub fn into_candidates(self) -> Vec<PathBuf> {
        self.candidates
    }
}

/// Collects every candidate under `home`: a shallow scan of home followed by
/// a recursive walk of the nested configuration directory.
///
/// # Errors
///
/// Returns an error if home itself cannot be listed.
pub fn collect_candidates(home: &Path, rules: &CollectConfig) -> Result<Vec<PathBuf>> {
    let mut collector = Collector::new(rules);
    collector.collect_shallow(home)?;
    collector.collect_recursive(&home.join(&rules.nested_dir));

    debug!(count = collector.candidates().len(), "Collection complete");
    Ok(collector.into_candidates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn create_test_structure(home: &Path) -> Result<()> {
        // home/
        //   .bashrc
        //   .vimrc
        //   notes.txt
        //   xmonad.hs
        //   projectrc/        (directory, skipped)
        //     innerrc
        //   .config/
        //     i3/
        //       i3rc
        //       config
        //     deep/er/
        //       zshrc
        fs::write(home.join(".bashrc"), "# bashrc")?;
        fs::write(home.join(".vimrc"), "syntax on")?;
        fs::write(home.join("notes.txt"), "notes")?;
        fs::write(home.join("xmonad.hs"), "main = xmonad def")?;
        fs::create_dir_all(home.join("projectrc"))?;
        fs::write(home.join("projectrc/innerrc"), "nested")?;
        fs::create_dir_all(home.join(".config/i3"))?;
        fs::write(home.join(".config/i3/i3rc"), "i3")?;
        fs::write(home.join(".config/i3/config"), "i3 config")?;
        fs::create_dir_all(home.join(".config/deep/er"))?;
        fs::write(home.join(".config/deep/er/zshrc"), "zsh")?;
        Ok(())
    }

    #[rstest]
    #[case("bashrc", true)]
    #[case(".bashrc", true)]
    #[case("xmonad.hs", true)]
    #[case("notes.txt", false)]
    #[case("rc.local", false)]
    #[case("xmonad.hs.bak", false)]
    #[case("rc", true)]
    fn test_candidate_predicate(#[case] name: &str, #[case] expected: bool) {
        let collector = Collector::new(&CollectConfig::default());
        assert_eq!(collector.is_candidate_name(name), expected);
    }

    #[test]
    fn test_flat_walk_is_shallow() -> Result<()> {
        let temp = TempDir::new()?;
        create_test_structure(temp.path())?;

        let mut seen = Vec::new();
        flat_walk(temp.path(), |path, _| {
            seen.push(path.file_name().unwrap().to_string_lossy().into_owned());
            Ok(())
        })?;

        assert_eq!(
            seen,
            vec![".bashrc", ".config", ".vimrc", "notes.txt", "projectrc", "xmonad.hs"]
        );
        Ok(())
    }

    #[test]
    fn test_flat_walk_stops_on_visitor_error() -> Result<()> {
        let temp = TempDir::new()?;
        create_test_structure(temp.path())?;

        let mut calls = 0;
        let result = flat_walk(temp.path(), |_, _| {
            calls += 1;
            anyhow::bail!("stop")
        });

        assert!(result.is_err());
        assert_eq!(calls, 1);
        Ok(())
    }

    #[test]
    fn test_flat_walk_missing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(flat_walk(&temp.path().join("missing"), |_, _| Ok(())).is_err());
    }

    #[test]
    fn test_collect_shallow() -> Result<()> {
        let temp = TempDir::new()?;
        create_test_structure(temp.path())?;

        let mut collector = Collector::new(&CollectConfig::default());
        collector.collect_shallow(temp.path())?;

        assert_eq!(
            collector.into_candidates(),
            vec![
                temp.path().join(".bashrc"),
                temp.path().join(".vimrc"),
                temp.path().join("xmonad.hs"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_visit_skips_metadata_errors() -> Result<()> {
        let mut collector = Collector::new(&CollectConfig::default());
        collector.visit(
            Path::new("/nowhere/.bashrc"),
            Err(io::Error::new(ErrorKind::PermissionDenied, "denied")),
        )?;

        assert!(collector.candidates().is_empty());
        Ok(())
    }

    #[test]
    fn test_collect_candidates_includes_nested_config() -> Result<()> {
        let temp = TempDir::new()?;
        create_test_structure(temp.path())?;

        let candidates = collect_candidates(temp.path(), &CollectConfig::default())?;

        assert_eq!(
            candidates,
            vec![
                temp.path().join(".bashrc"),
                temp.path().join(".vimrc"),
                temp.path().join("xmonad.hs"),
                temp.path().join(".config/deep/er/zshrc"),
                temp.path().join(".config/i3/i3rc"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_collect_candidates_without_nested_dir() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join(".bashrc"), "x")?;

        let candidates = collect_candidates(temp.path(), &CollectConfig::default())?;

        assert_eq!(candidates, vec![temp.path().join(".bashrc")]);
        Ok(())
    }

    #[test]
    fn test_custom_rules() -> Result<()> {
        let temp = TempDir::new()?;
        fs::write(temp.path().join("init.lua"), "x")?;
        fs::write(temp.path().join(".bashrc"), "x")?;
        fs::write(temp.path().join("kitty.conf"), "x")?;

        let rules = CollectConfig {
            reserved_names: vec!["init.lua".to_string()],
            suffix: ".conf".to_string(),
            nested_dir: PathBuf::from(".config"),
        };
        let candidates = collect_candidates(temp.path(), &rules)?;

        assert_eq!(
            candidates,
            vec![temp.path().join("init.lua"), temp.path().join("kitty.conf")]
        );
        Ok(())
    }
}
