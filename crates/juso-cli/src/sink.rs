//! Terminal reporting for background cache writes.

use juso_core::{CacheWriteSink, SettingsError};

/// Tells the user on stderr that a search was shown but not saved.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalCacheSink;

impl CacheWriteSink for TerminalCacheSink {
    fn cache_write_failed(&self, keyword: &str, error: &SettingsError) {
        eprintln!("warning: results for \"{keyword}\" were not saved: {error}");
    }
}
