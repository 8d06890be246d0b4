//! Database path resolution.
//!
//! Provides the canonical path to the juso settings database file.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, ensure_dir, normalize_user_path};

/// File name of the settings database inside the data root.
pub const DATABASE_FILE_NAME: &str = "juso.db";

/// Get the path to the juso settings database.
///
/// Returns the path to `juso.db` in the user data directory. The directory
/// is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?;
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

/// Resolve the database path, honoring an explicit override.
///
/// The override may use `~` and may be relative to the working directory.
/// Its parent directory is created if needed.
pub fn resolve_database_path(override_path: Option<&str>) -> Result<PathBuf, PathError> {
    let Some(raw) = override_path else {
        return database_path();
    };

    let path = normalize_user_path(raw)?;
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(path)
}
