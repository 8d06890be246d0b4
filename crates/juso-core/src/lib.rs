//! Core domain types, ports and services for juso.
//!
//! This crate holds the settings and search-state synchronization layer:
//! a settings document mirrored in memory and persisted through the
//! [`PersistentStore`] port, and an address search service that caches its
//! results in that document. Infrastructure lives in adapter crates
//! (`juso-store`, `juso-api`); front-ends compose them with a
//! [`HostContext`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod host;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{AddressQuery, AddressRecord, SearchParams};
pub use host::{HostContext, RuntimeKind};
pub use ports::{
    AddressLookupError, AddressLookupPort, CacheWriteSink, NoopCacheSink, PersistentStore,
    StoreError,
};
pub use services::{AddressManager, SettingsManager};
pub use settings::{
    DisplayField, PrevSearchKey, PrevSearchKeyPatch, SearchResultDisplay,
    SearchResultDisplayPatch, SettingsDocument, SettingsError, SettingsPatch, SettingsSchema,
};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path, resolve_database_path};
