//! Host capabilities injected into the core.
//!
//! The front-end decides once, at its composition root, which kind of host
//! it is running in and whether a persistent store exists there. Services
//! receive that decision as a value and never probe the environment
//! themselves.

use std::fmt;
use std::sync::Arc;

use crate::ports::PersistentStore;

/// Kind of host the front-end is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeKind {
    /// Unknown host with no storage and no lookup transport.
    Other,
    /// Standalone page: can render, cannot persist or search.
    Page,
    /// Installed front-end with a persistent store.
    Extension,
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Other => "other",
            Self::Page => "page",
            Self::Extension => "extension",
        };
        f.write_str(name)
    }
}

/// The capabilities of the current host.
#[derive(Clone)]
pub enum HostContext {
    /// Installed front-end; settings persist through `store`.
    Extension { store: Arc<dyn PersistentStore> },
    /// Standalone page load.
    Page,
    /// Anything else.
    Other,
}

impl HostContext {
    /// Host backed by the given store.
    pub fn extension(store: Arc<dyn PersistentStore>) -> Self {
        Self::Extension { store }
    }

    /// Which kind of host this is.
    pub const fn runtime(&self) -> RuntimeKind {
        match self {
            Self::Extension { .. } => RuntimeKind::Extension,
            Self::Page => RuntimeKind::Page,
            Self::Other => RuntimeKind::Other,
        }
    }

    /// The persistent store, if this host has one.
    pub fn store(&self) -> Option<&Arc<dyn PersistentStore>> {
        match self {
            Self::Extension { store } => Some(store),
            Self::Page | Self::Other => None,
        }
    }

    /// Whether settings can be persisted in this host.
    pub const fn has_store(&self) -> bool {
        matches!(self, Self::Extension { .. })
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("runtime", &self.runtime())
            .field("has_store", &self.has_store())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StoreError;
    use async_trait::async_trait;
    use serde_json::{Map, Value};

    struct NullStore;

    #[async_trait]
    impl PersistentStore for NullStore {
        async fn get(&self, _keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
            Ok(Map::new())
        }

        async fn set(&self, _entries: Map<String, Value>) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn test_extension_has_store() {
        let host = HostContext::extension(Arc::new(NullStore));
        assert_eq!(host.runtime(), RuntimeKind::Extension);
        assert!(host.has_store());
        assert!(host.store().is_some());
    }

    #[test]
    fn test_page_and_other_have_no_store() {
        for host in [HostContext::Page, HostContext::Other] {
            assert!(!host.has_store());
            assert!(host.store().is_none());
        }
        assert_eq!(HostContext::Page.runtime().to_string(), "page");
        assert_eq!(HostContext::Other.runtime().to_string(), "other");
    }

    #[test]
    fn test_debug_hides_store() {
        let debug = format!("{:?}", HostContext::extension(Arc::new(NullStore)));
        assert!(debug.contains("Extension"));
        assert!(debug.contains("has_store: true"));
    }
}
