//! Platform-specific path resolution.
//!
//! Private helpers for resolving platform-appropriate paths. Public API is
//! exposed through sibling modules.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable that overrides the data root.
pub(super) const DATA_DIR_ENV: &str = "JUSO_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `JUSO_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/juso`)
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        return normalize_user_path(&path);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("juso"))
}

/// Create `dir` and its parents if missing.
pub(super) fn ensure_dir(dir: &Path) -> Result<(), PathError> {
    fs::create_dir_all(dir).map_err(|e| PathError::CreateFailed {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_user_path("  "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_normalize_keeps_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().to_string_lossy().to_string();
        assert_eq!(normalize_user_path(&raw).unwrap(), dir.path());
    }

    #[test]
    fn test_normalize_makes_relative_absolute() {
        let path = normalize_user_path("settings/juso.db").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("settings/juso.db"));
    }

    #[test]
    fn test_normalize_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_user_path("~").unwrap(), home);
            assert_eq!(normalize_user_path("~/juso").unwrap(), home.join("juso"));
        }
    }
}
