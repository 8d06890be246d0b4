//! In-memory `PersistentStore` for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Map, Value};

use juso_core::{PersistentStore, StoreError};

/// A `PersistentStore` that keeps entries in memory.
///
/// Writes can be made to fail with [`MemoryStore::fail_writes`] to exercise
/// rollback paths; every attempted `set` is counted either way.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Map<String, Value>>,
    fail_writes: AtomicBool,
    set_calls: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries(entries: Map<String, Value>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of `set` calls seen so far, including failed ones.
    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    /// Copy of everything currently stored.
    pub fn snapshot(&self) -> Map<String, Value> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PersistentStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(keys
            .iter()
            .filter_map(|key| entries.get(*key).map(|v| ((*key).to_string(), v.clone())))
            .collect())
    }

    async fn set(&self, entries: Map<String, Value>) -> Result<(), StoreError> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("memory store is read-only".to_string()));
        }
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_failed_write_leaves_entries_untouched() {
        let store = MemoryStore::new();
        let mut first = Map::new();
        first.insert("addressData".to_string(), json!([]));
        assert_ok!(store.set(first).await);

        store.fail_writes(true);
        let mut second = Map::new();
        second.insert("addressData".to_string(), json!([{ "zipNo": "05000" }]));
        assert_err!(store.set(second).await);

        assert_eq!(store.snapshot()["addressData"], json!([]));
        assert_eq!(store.set_calls(), 2);
    }

    #[tokio::test]
    async fn test_get_returns_only_requested_keys() {
        let mut initial = Map::new();
        initial.insert("searchResult".to_string(), json!({ "showEng": true }));
        initial.insert("other".to_string(), json!(1));
        let store = MemoryStore::with_entries(initial);

        let loaded = store.get(&["searchResult", "prevSearchKey"]).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["searchResult"], json!({ "showEng": true }));
    }
}
