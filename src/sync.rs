//! Save and install flows between home and the snapshot directory.
//!
//! Save: collect candidates → drop unchanged → ask the operator → copy each
//! accepted file into the snapshot directory and record it in the manifest.
//!
//! Install: for every manifest entry, recreate the parent directories under
//! home and copy the snapshot copy back to its recorded location.
//!
//! Any I/O failure aborts the whole operation. Files already copied stay
//! where they are.

use crate::DotsyncContext;
use crate::config::CollectConfig;
use crate::selector::{Prompt, Selector};
use crate::tracking::{Manifest, collect_candidates, filter_changed};
use crate::utils::{copy_file, copy_into_dir, ensure_parent_dirs, strip_home};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::{Level, debug, info, span};

/// Result of a save run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Absolute paths whose content differed from the snapshot
    pub changed: Vec<PathBuf>,
    /// Home-relative paths that were copied and recorded
    pub saved: Vec<PathBuf>,
}

/// Result of an install run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Home-relative paths that were written
    pub installed: Vec<PathBuf>,
}

/// Moves files between a home directory and a snapshot directory.
pub struct SyncEngine<'a> {
    /// The live configuration tree
    home_dir: &'a Path,
    /// Where copies and the manifest live
    snapshot_dir: &'a Path,
    /// Candidate naming rules
    rules: &'a CollectConfig,
}

impl<'a> SyncEngine<'a> {
    /// Create an engine over explicit directories.
    #[must_use]
    pub const fn new(home_dir: &'a Path, snapshot_dir: &'a Path, rules: &'a CollectConfig) -> Self {
        Self {
            home_dir,
            snapshot_dir,
            rules,
        }
    }

    /// Create an engine from a context.
    #[must_use]
    pub fn from_context(ctx: &'a DotsyncContext) -> Self {
        Self::new(&ctx.home_dir, &ctx.snapshot_dir, &ctx.config.collect)
    }

    /// Collects candidates and keeps those not identical to their snapshot copy.
    ///
    /// # Errors
    ///
    /// Returns an error if home cannot be listed or any comparison fails.
    pub fn find_changed(&self) -> Result<Vec<PathBuf>> {
        let candidates = collect_candidates(self.home_dir, self.rules)?;
        filter_changed(&candidates, self.snapshot_dir)
    }

    /// Runs the full save flow, writing progress lines to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error on any collection, comparison, prompt, copy or
    /// manifest failure.
    pub fn save(
        &self,
        selector: &mut Selector,
        prompt: &mut dyn Prompt,
        out: &mut dyn Write,
    ) -> Result<SaveReport> {
        let span = span!(Level::DEBUG, "save", home = %self.home_dir.display());
        let _guard = span.enter();

        writeln!(out, "Finding changed files")?;
        let changed = self.find_changed()?;

        if changed.is_empty() {
            writeln!(out, "No files found")?;
            return Ok(SaveReport::default());
        }

        writeln!(out, "Files changed:")?;
        for path in &changed {
            writeln!(out, "{}", path.display())?;
        }

        let accepted = selector.select(changed.clone(), prompt)?;
        let saved = self.save_files(&accepted)?;

        Ok(SaveReport { changed, saved })
    }

    /// Copies each file into the snapshot directory and records its
    /// home-relative path in the manifest. Returns the recorded paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is outside home, a copy fails, or the
    /// manifest cannot be read or written.
    pub fn save_files(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if files.is_empty() {
            debug!("Nothing accepted, manifest untouched");
            return Ok(Vec::new());
        }

        let mut manifest = Manifest::open(self.snapshot_dir)?;
        let mut saved = Vec::with_capacity(files.len());

        for source in files {
            let relative = strip_home(source, self.home_dir)?;
            copy_into_dir(source, self.snapshot_dir)?;
            manifest.update(&relative)?;
            info!(path = %relative.display(), "Saved");
            saved.push(relative);
        }

        manifest.close();
        Ok(saved)
    }

    /// Copies every tracked file from the snapshot back into home, creating
    /// missing parent directories. Stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be loaded, an entry points
    /// outside home, a directory cannot be created, or a copy fails.
    pub fn install(&self) -> Result<InstallReport> {
        let span = span!(Level::DEBUG, "install", home = %self.home_dir.display());
        let _guard = span.enter();

        let manifest = Manifest::open(self.snapshot_dir)?;
        let mut names = manifest.list_files();
        names.sort();

        let mut installed = Vec::with_capacity(names.len());
        for name in names {
            let Some(relative) = manifest.get(&name) else {
                continue;
            };
            if !is_home_relative(relative) {
                anyhow::bail!(
                    "Manifest entry {} does not point inside home",
                    relative.display()
                );
            }

            let target = self.home_dir.join(relative);
            ensure_parent_dirs(&target)
                .with_context(|| format!("Failed to prepare {}", target.display()))?;
            copy_file(&self.snapshot_dir.join(&name), &target)?;

            info!(path = %relative.display(), "Installed");
            installed.push(relative.to_path_buf());
        }

        manifest.close();
        Ok(InstallReport { installed })
    }
}

/// Whether `path` is a plain relative path that stays inside its base.
fn is_home_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.file_name().is_some()
}
