//! `SQLite` implementation of the `PersistentStore` trait.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use juso_core::{PersistentStore, StoreError};

/// `SQLite` implementation of the `PersistentStore` trait.
///
/// Each top-level key is one row whose value is the JSON text of the entry.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new `SQLite` store.
    ///
    /// The pool must come from `setup_store()` (or `setup_test_store()`) so the
    /// table exists.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[async_trait]
impl PersistentStore for SqliteStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
        let mut entries = Map::new();
        if keys.is_empty() {
            return Ok(entries);
        }

        let placeholders = vec!["?"; keys.len()].join(", ");
        let sql = format!("SELECT key, value FROM storage_kv WHERE key IN ({placeholders})");
        let mut query = sqlx::query(&sql);
        for key in keys {
            query = query.bind(*key);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(storage_error)?;
        for row in rows {
            let key: String = row.get("key");
            let json: String = row.get("value");
            let value = serde_json::from_str(&json)
                .map_err(|e| StoreError::Serialization(format!("{key}: {e}")))?;
            entries.insert(key, value);
        }

        debug!(requested = keys.len(), found = entries.len(), "Loaded store entries");
        Ok(entries)
    }

    async fn set(&self, entries: Map<String, Value>) -> Result<(), StoreError> {
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let count = entries.len();

        let mut tx = self.pool.begin().await.map_err(storage_error)?;
        for (key, value) in entries {
            let json = serde_json::to_string(&value)
                .map_err(|e| StoreError::Serialization(format!("{key}: {e}")))?;
            sqlx::query(
                "INSERT OR REPLACE INTO storage_kv (key, value, updated_at) VALUES (?, ?, ?)",
            )
            .bind(&key)
            .bind(&json)
            .bind(&updated_at)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;
        }
        tx.commit().await.map_err(storage_error)?;

        debug!(count, "Committed store entries");
        Ok(())
    }
}
