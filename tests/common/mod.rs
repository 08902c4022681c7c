#![allow(dead_code)]

use anyhow::Result;
use dotsync::DotsyncContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory paired with a separate snapshot directory.
pub struct TestEnv {
    pub home: TempDir,
    pub snapshot: TempDir,
    pub ctx: DotsyncContext,
}

impl TestEnv {
    /// Create empty home and snapshot directories with default rules
    pub fn new() -> Result<Self> {
        let home = TempDir::new()?;
        let snapshot = TempDir::new()?;
        let ctx =
            DotsyncContext::new_explicit(home.path().to_path_buf(), snapshot.path().to_path_buf())?;
        Ok(Self {
            home,
            snapshot,
            ctx,
        })
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    pub fn snapshot_path(&self) -> &Path {
        self.snapshot.path()
    }

    /// Write a file under home, creating parents
    pub fn write_home(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        write_under(self.home.path(), relative, contents)
    }

    /// Write a file under the snapshot directory
    pub fn write_snapshot(&self, name: &str, contents: &str) -> Result<PathBuf> {
        write_under(self.snapshot.path(), name, contents)
    }

    pub fn index_contents(&self) -> Result<String> {
        Ok(fs::read_to_string(self.ctx.index_path())?)
    }
}

fn write_under(base: &Path, relative: &str, contents: &str) -> Result<PathBuf> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    Ok(path)
}
