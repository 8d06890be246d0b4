//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Storage is a flat key-value map of JSON values
//! - Address lookup speaks in normalized queries and `AddressRecord`s

pub mod address_lookup;
pub mod cache_sink;
pub mod persistent_store;

use thiserror::Error;

pub use address_lookup::{AddressLookupError, AddressLookupPort};
pub use cache_sink::{CacheWriteSink, NoopCacheSink};
pub use persistent_store::PersistentStore;

/// Domain-specific errors for storage operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
