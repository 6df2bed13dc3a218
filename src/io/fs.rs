//! Directory helpers

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`config_dir`]
pub const CONFIG_DIR_ENV: &str = "ARRAYSTORE_CONFIG_DIR";

/// Make sure `path` is a directory, creating it and any missing parents.
///
/// Fails with [`Error::NotADirectory`] when the path exists as something else.
pub fn ensure_dir_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    if path.exists() {
        if !path.is_dir() {
            return Err(Error::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        return Ok(());
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Ensure the parent directory of a file path exists
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => ensure_dir_exists(parent),
        None => Ok(()),
    }
}

/// Per-user configuration directory.
///
/// `$ARRAYSTORE_CONFIG_DIR` when set, otherwise `.arraystore` in the home
/// directory. Falls back to a relative `.arraystore` when no home is known.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default();
    home.join(".arraystore")
}
