//! Persistent key-value store trait definition.
//!
//! This port is the single source of truth for settings across sessions.
//! Implementations handle all storage details internally.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::StoreError;

/// Asynchronous key-value storage that outlives the process.
///
/// # Design Rules
///
/// - Values are arbitrary JSON; keys are plain strings
/// - `get` omits keys that have never been stored instead of returning nulls
/// - `set` is atomic: either every entry is written or none is
#[async_trait]
pub trait PersistentStore: Send + Sync {
    /// Read the given keys.
    ///
    /// The returned map only contains keys that exist in the store. An empty
    /// map means none of the keys have been stored yet.
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError>;

    /// Write all entries in a single atomic operation.
    ///
    /// Returns once the write has been acknowledged by the backend.
    async fn set(&self, entries: Map<String, Value>) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn PersistentStore>) {}
}
