//! Observer for best-effort post-search cache writes.
//!
//! A search that succeeded stays successful even if caching its results
//! fails. The failure is reported here instead.

use crate::settings::SettingsError;

/// Receives failures of the detached cache write that follows a search.
///
/// # Implementations
///
/// - `NoopCacheSink` - For contexts that only need the `tracing` warning
/// - Front-end specific sinks (status line, toast, test recorder)
pub trait CacheWriteSink: Send + Sync {
    /// Called once per failed cache write, from the background task.
    ///
    /// This method should not block.
    fn cache_write_failed(&self, keyword: &str, error: &SettingsError);
}

/// A sink that discards cache write failures.
#[derive(Debug, Clone, Default)]
pub struct NoopCacheSink;

impl NoopCacheSink {
    /// Create a new no-op sink.
    pub const fn new() -> Self {
        Self
    }
}

impl CacheWriteSink for NoopCacheSink {
    fn cache_write_failed(&self, _keyword: &str, _error: &SettingsError) {
        // Intentionally do nothing
    }
}
