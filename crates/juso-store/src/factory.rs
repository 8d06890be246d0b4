//! Composition utilities for building `PersistentStore` backends.
//!
//! This module provides factory functions for wiring up front-ends with a
//! `SQLite` store. It is focused purely on construction and should not
//! contain any domain logic.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use juso_core::PersistentStore;

use crate::setup::setup_store;
use crate::stores::SqliteStore;

/// Factory for creating `PersistentStore` instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Open (creating if needed) the `SQLite` store at `db_path`.
    ///
    /// This is the recommended single-step way for front-ends to obtain a
    /// store for an extension-mode `HostContext`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use juso_core::{HostContext, database_path};
    /// use juso_store::StoreFactory;
    ///
    /// let store = StoreFactory::open_sqlite(&database_path()?).await?;
    /// let host = HostContext::extension(store);
    /// ```
    pub async fn open_sqlite(db_path: &Path) -> anyhow::Result<Arc<dyn PersistentStore>> {
        let pool = setup_store(db_path).await?;
        Ok(Self::build_store(pool))
    }

    /// Wrap an existing pool as a trait object.
    pub fn build_store(pool: SqlitePool) -> Arc<dyn PersistentStore> {
        Arc::new(SqliteStore::new(pool))
    }
}
