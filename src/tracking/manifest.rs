//! The `INDEX` manifest mapping snapshot file names to their original paths.
//!
//! The snapshot directory stores every collected file flat, under its base
//! name. The manifest remembers where each one came from (relative to home)
//! so `install` can put it back.
//!
//! # On-disk format
//!
//! Plain UTF-8 text, one original path per line, each terminated by `\n`.
//! The base-name key is not stored; it is derived from each line on load.
//! Empty lines are ignored.
//!
//! Every change rewrites the whole file (truncate, then write all entries),
//! which costs O(entries) per update. Updates that would not change the
//! mapping do not touch the disk at all.

use crate::INDEX_FILE;
use crate::utils::base_name;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Persistent base-name → original-path mapping backed by an open file.
#[derive(Debug)]
pub struct Manifest {
    /// Location of the backing file
    path: PathBuf,
    /// Open handle, held until [`Manifest::close`] or drop
    file: File,
    /// Base name → original path
    entries: HashMap<String, PathBuf>,
    /// Number of full rewrites performed since opening
    writes: usize,
}

impl Manifest {
    /// Opens (creating if absent) the `INDEX` file in `dir` and loads it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The backing file cannot be created or opened
    /// - The file cannot be read or is not valid UTF-8
    /// - A line has no usable base name
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir.join(INDEX_FILE);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open manifest: {}", path.display()))?;

        let mut manifest = Self {
            path,
            file,
            entries: HashMap::new(),
            writes: 0,
        };
        manifest.read_in()?;

        debug!(
            path = %manifest.path.display(),
            entries = manifest.entries.len(),
            "Manifest loaded"
        );

        Ok(manifest)
    }

    /// Parses the backing file into memory.
    fn read_in(&mut self) -> Result<()> {
        let mut contents = String::new();
        self.file
            .read_to_string(&mut contents)
            .with_context(|| format!("Failed to read manifest: {}", self.path.display()))?;

        for (line_no, line) in contents.split('\n').enumerate() {
            if line.is_empty() {
                continue;
            }
            let original = PathBuf::from(line);
            let name = base_name(&original).with_context(|| {
                format!(
                    "Corrupted manifest {} at line {}",
                    self.path.display(),
                    line_no + 1
                )
            })?;
            self.entries.insert(name.to_string(), original.clone());
        }

        Ok(())
    }

    /// Records `source` under its base name, rewriting the file if the
    /// mapping changed.
    ///
    /// Returns `true` if the file was rewritten, `false` if the entry was
    /// already identical.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` has no base name, is not UTF-8, contains
    /// a newline, or the rewrite fails. The in-memory mapping must not be
    /// relied on after a failed rewrite.
    pub fn update(&mut self, source: &Path) -> Result<bool> {
        let name = base_name(source)?;
        if self.entries.get(name).is_some_and(|p| p == source) {
            trace!(name, "Manifest entry unchanged");
            return Ok(false);
        }

        let line = source
            .to_str()
            .with_context(|| format!("Path is not valid UTF-8: {}", source.display()))?;
        if line.contains('\n') {
            anyhow::bail!("Path contains a newline: {line:?}");
        }

        self.entries.insert(name.to_string(), source.to_path_buf());
        self.write()?;
        debug!(name, path = line, "Manifest entry recorded");
        Ok(true)
    }

    /// Truncates the backing file and writes every entry.
    fn write(&mut self) -> Result<()> {
        let mut lines: Vec<&PathBuf> = self.entries.values().collect();
        lines.sort();

        self.file
            .set_len(0)
            .with_context(|| format!("Failed to truncate manifest: {}", self.path.display()))?;
        self.file
            .seek(SeekFrom::Start(0))
            .with_context(|| format!("Failed to rewind manifest: {}", self.path.display()))?;

        let mut writer = BufWriter::new(&self.file);
        for original in lines {
            // update() only admits UTF-8 paths and load reads a String
            writeln!(writer, "{}", original.to_string_lossy())
                .with_context(|| format!("Failed to write manifest: {}", self.path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write manifest: {}", self.path.display()))?;

        self.writes += 1;
        Ok(())
    }

    /// Returns the original path recorded for a base name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Returns all tracked base names, in unspecified order.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of tracked files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times the backing file has been rewritten since opening.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Releases the backing file handle. Does not write anything: every
    /// change has already been persisted by [`Manifest::update`].
    pub fn close(self) {
        debug!(path = %self.path.display(), "Manifest closed");
    }
}
