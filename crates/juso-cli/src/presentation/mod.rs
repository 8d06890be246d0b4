//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Functions return `String`s; handlers decide where to print them

pub mod address_list;

// Re-export commonly used items
pub use address_list::{
    EMPTY_RESULTS, EMPTY_RESULTS_HINT, field_label, render_address_list, render_toggles,
};
