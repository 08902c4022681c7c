use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the last path segment as UTF-8.
///
/// # Errors
///
/// Returns an error if the path has no file name (e.g. `/` or ends in `..`)
/// or the name is not valid UTF-8.
pub fn base_name(path: &Path) -> Result<&str> {
    let name = path
        .file_name()
        .with_context(|| format!("Path has no file name: {}", path.display()))?;
    name.to_str()
        .with_context(|| format!("File name is not valid UTF-8: {}", path.display()))
}

/// Strips the home directory prefix from `path`, yielding a home-relative path.
///
/// # Errors
///
/// Returns an error if `path` does not live strictly inside `home`.
pub fn strip_home(path: &Path, home: &Path) -> Result<PathBuf> {
    match path.strip_prefix(home) {
        Ok(relative) if !relative.as_os_str().is_empty() => Ok(relative.to_path_buf()),
        _ => anyhow::bail!(
            "{} is not inside the home directory {}",
            path.display(),
            home.display()
        ),
    }
}

/// Ensures parent directories exist for a given path
///
/// # Errors
///
/// Returns an error if the parent directories cannot be created
pub fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create parent directories for {}", path.display())
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_base_name() -> Result<()> {
        assert_eq!(base_name(Path::new("/home/user/.bashrc"))?, ".bashrc");
        assert_eq!(base_name(Path::new(".config/i3/i3rc"))?, "i3rc");
        assert_eq!(base_name(Path::new("plain"))?, "plain");
        assert!(base_name(Path::new("/")).is_err());
        assert!(base_name(Path::new("a/..")).is_err());
        Ok(())
    }

    #[test]
    fn test_strip_home() -> Result<()> {
        let home = Path::new("/home/user");

        assert_eq!(
            strip_home(Path::new("/home/user/.bashrc"), home)?,
            PathBuf::from(".bashrc")
        );
        assert_eq!(
            strip_home(Path::new("/home/user/.config/foo/barrc"), home)?,
            PathBuf::from(".config/foo/barrc")
        );
        Ok(())
    }

    #[test]
    fn test_strip_home_rejects_outside_paths() {
        let home = Path::new("/home/user");

        assert!(strip_home(Path::new("/etc/bashrc"), home).is_err());
        // shared prefix but a different directory
        assert!(strip_home(Path::new("/home/username/.bashrc"), home).is_err());
        assert!(strip_home(home, home).is_err());
    }

    #[test]
    fn test_ensure_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_file = temp_dir.path().join("a/b/c/file.txt");

        ensure_parent_dirs(&nested_file).unwrap();
        assert!(nested_file.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_parent_dirs_bare_name() {
        ensure_parent_dirs(Path::new("file.txt")).unwrap();
    }
}
