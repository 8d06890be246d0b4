//! Path utilities for juso data directories.
//!
//! This module provides the canonical path resolution for the settings
//! database used by the persistent store.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod database;
mod error;
mod platform;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::data_root;

// Database
pub use database::{DATABASE_FILE_NAME, database_path, resolve_database_path};
