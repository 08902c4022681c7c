//! Utility functions and helpers.
//!
//! - Path manipulation (base names, home-relative paths, parent creation)
//! - The byte-copy primitive used by save and install

/// Path manipulation and resolution utilities
pub mod paths;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub use paths::{base_name, ensure_parent_dirs, strip_home};

/// Copies the bytes of `src` to `dest`, creating or truncating `dest`.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or `dest` cannot be written.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    fs::copy(src, dest)
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))
}

/// Copies `src` into `dir`, keeping only its base name.
///
/// # Errors
///
/// Returns an error if `src` has no usable file name or the copy fails.
pub fn copy_into_dir(src: &Path, dir: &Path) -> Result<PathBuf> {
    let dest = dir.join(base_name(src)?);
    copy_file(src, &dest)?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_into_dir_uses_base_name() -> Result<()> {
        let src_dir = tempdir()?;
        let dest_dir = tempdir()?;
        let nested = src_dir.path().join("deep/er");
        fs::create_dir_all(&nested)?;
        let src = nested.join(".vimrc");
        fs::write(&src, "syntax on")?;

        let dest = copy_into_dir(&src, dest_dir.path())?;

        assert_eq!(dest, dest_dir.path().join(".vimrc"));
        assert_eq!(fs::read_to_string(&dest)?, "syntax on");
        Ok(())
    }

    #[test]
    fn test_copy_file_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::write(&src, "new")?;
        fs::write(&dest, "old contents that are longer")?;

        copy_file(&src, &dest)?;

        assert_eq!(fs::read_to_string(&dest)?, "new");
        Ok(())
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dir = tempdir().unwrap();
        let err = copy_file(&dir.path().join("absent"), &dir.path().join("dest")).unwrap_err();
        assert!(err.to_string().contains("Failed to copy"));
    }
}
