//! Pruning candidates whose snapshot copy is already up to date.

use crate::diff::{Comparison, diff_file};
use crate::utils::base_name;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keeps the candidates whose content is not identical to the copy in
/// `snapshot_dir` (looked up by base name). Candidates with no copy yet are
/// kept too.
///
/// # Errors
///
/// Returns an error if any comparison fails; the whole filter is aborted.
pub fn filter_changed(candidates: &[PathBuf], snapshot_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut changed = Vec::new();

    for candidate in candidates {
        let snapshot_copy = snapshot_dir.join(base_name(candidate)?);
        let comparison = diff_file(candidate, &snapshot_copy)?;
        debug!(path = %candidate.display(), ?comparison, "Compared with snapshot");

        if comparison != Comparison::Identical {
            changed.push(candidate.clone());
        }
    }

    Ok(changed)
}
