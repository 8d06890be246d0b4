//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage, HTTP, terminal output).
//!
//! # Structure
//!
//! - `address` - Address records and search parameters

mod address;

pub use address::{
    AddressQuery, AddressRecord, DEFAULT_COUNT_PER_PAGE, DEFAULT_CURRENT_PAGE,
    MAX_COUNT_PER_PAGE, SearchParams,
};
