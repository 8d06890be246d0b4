//! Two-state readiness lifecycle for a loaded document.

/// Callback run once a document has finished loading.
pub type ReadyHandler<T> = Box<dyn FnOnce(&T) + Send + 'static>;

/// Whether the document has been loaded yet.
///
/// `Pending` queues handlers until the single load completes; `Ready` holds
/// the current document. There is no way back from `Ready`.
pub(crate) enum Lifecycle<T> {
    Pending { waiters: Vec<ReadyHandler<T>> },
    Ready { settings: T },
}

impl<T> Lifecycle<T> {
    pub(crate) const fn new() -> Self {
        Self::Pending {
            waiters: Vec::new(),
        }
    }

    pub(crate) const fn settings(&self) -> Option<&T> {
        match self {
            Self::Pending { .. } => None,
            Self::Ready { settings } => Some(settings),
        }
    }

    /// Queue `handler`, or hand it back if the document is already loaded.
    ///
    /// The caller runs a returned handler itself, after releasing any lock
    /// around the lifecycle.
    pub(crate) fn subscribe(&mut self, handler: ReadyHandler<T>) -> Option<ReadyHandler<T>> {
        match self {
            Self::Pending { waiters } => {
                waiters.push(handler);
                None
            }
            Self::Ready { .. } => Some(handler),
        }
    }

    /// Move to `Ready`, returning the handlers that were waiting.
    ///
    /// Returns `None` if the lifecycle was already resolved; the document is
    /// then left as it was.
    pub(crate) fn resolve(&mut self, settings: T) -> Option<Vec<ReadyHandler<T>>> {
        match self {
            Self::Pending { waiters } => {
                let waiters = std::mem::take(waiters);
                *self = Self::Ready { settings };
                Some(waiters)
            }
            Self::Ready { .. } => None,
        }
    }

    /// Replace the loaded document. Has no effect while pending.
    pub(crate) fn commit(&mut self, settings: T) {
        if let Self::Ready { settings: current } = self {
            *current = settings;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler(counter: &Arc<AtomicUsize>) -> ReadyHandler<u32> {
        let counter = Arc::clone(counter);
        Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_pending_queues_handlers() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.subscribe(counting_handler(&counter)).is_none());
        assert!(lifecycle.subscribe(counting_handler(&counter)).is_none());
        assert!(lifecycle.settings().is_none());

        let waiters = lifecycle.resolve(7).unwrap();
        assert_eq!(waiters.len(), 2);
        for handler in waiters {
            handler(&7);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(lifecycle.settings(), Some(&7));
    }

    #[test]
    fn test_ready_hands_handler_back() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut lifecycle = Lifecycle::new();
        lifecycle.resolve(1);
        let handler = lifecycle.subscribe(counting_handler(&counter)).unwrap();
        handler(&1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_only_once() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.resolve(1).is_some());
        assert!(lifecycle.resolve(2).is_none());
        assert_eq!(lifecycle.settings(), Some(&1));
    }

    #[test]
    fn test_commit_requires_ready() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.commit(5);
        assert!(lifecycle.settings().is_none());

        lifecycle.resolve(1);
        lifecycle.commit(5);
        assert_eq!(lifecycle.settings(), Some(&5));
    }
}
