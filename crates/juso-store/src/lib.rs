//! `PersistentStore` implementations for juso.
//!
//! - [`SqliteStore`] keeps each top-level settings key as a JSON value in a
//!   `SQLite` key-value table and writes every `set` in one transaction.
//! - `MemoryStore` (feature `test-utils`) keeps entries in memory and can be
//!   told to fail, for front-end tests.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod setup;
pub mod stores;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
#[cfg(any(test, feature = "test-utils"))]
pub use stores::MemoryStore;
pub use stores::SqliteStore;

// Re-export setup functions for convenient access
pub use setup::setup_store;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_store;

// sqlx links against the bundled SQLite through this crate
use libsqlite3_sys as _;
