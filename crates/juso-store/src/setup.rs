//! Store setup and initialization.
//!
//! This module provides the `setup_store()` function for initializing the
//! `SQLite` settings database. Entry points call this with the resolved
//! database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;

/// Sets up the `SQLite` connection pool and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and database file if they don't exist
/// 2. Creates the key-value table
///
/// # Errors
///
/// Returns an error if:
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use juso_store::setup_store;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let db_path = Path::new("/path/to/juso.db");
/// let pool = setup_store(db_path).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_store(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    tracing::debug!(path = %db_path.display(), "Settings store ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` store for testing.
///
/// Uses a single connection: every connection to `sqlite::memory:` is a
/// separate database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_store() -> Result<SqlitePool> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the key-value table.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS storage_kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_store() {
        let pool = setup_test_store().await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM storage_kv")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_setup_store_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("juso.db");

        let pool = setup_store(&db_path).await.unwrap();
        assert!(db_path.exists());

        // Idempotent
        create_schema(&pool).await.unwrap();
    }
}
