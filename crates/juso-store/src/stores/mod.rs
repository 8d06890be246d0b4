//! `PersistentStore` implementations.

#[cfg(any(test, feature = "test-utils"))]
mod memory_store;
mod sqlite_store;

#[cfg(any(test, feature = "test-utils"))]
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;
