//! Settings manager - the authoritative in-memory view of persisted settings.
//!
//! The manager loads its document once, fires readiness handlers, and from
//! then on mutates the mirror only through `update_settings`, which writes
//! the whole merged document back before committing it in memory.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::readiness::Lifecycle;
use crate::host::HostContext;
use crate::ports::PersistentStore;
use crate::settings::{SettingsError, SettingsSchema, apply_defaults, merge_partial, to_entries};

/// Service owning the in-memory mirror of a persisted settings document.
pub struct SettingsManager<T: SettingsSchema> {
    host: HostContext,
    state: Mutex<Lifecycle<T>>,
    /// Serializes writes so the store sees them in call order.
    write_lane: tokio::sync::Mutex<()>,
    /// Set while the mirror holds defaults standing in for a store that
    /// could not be read.
    unsynced: AtomicBool,
}

impl<T: SettingsSchema> SettingsManager<T> {
    fn pending(host: HostContext) -> Self {
        Self {
            host,
            state: Mutex::new(Lifecycle::new()),
            write_lane: tokio::sync::Mutex::new(()),
            unsynced: AtomicBool::new(false),
        }
    }

    /// Create a manager and start loading its document in the background.
    ///
    /// Must be called from within a tokio runtime. Register handlers with
    /// [`once_ready`](Self::once_ready) or await
    /// [`wait_ready`](Self::wait_ready) before reading settings.
    pub fn spawn(host: HostContext) -> Arc<Self> {
        let manager = Arc::new(Self::pending(host));
        let loader = Arc::clone(&manager);
        tokio::spawn(async move {
            loader.load().await;
        });
        manager
    }

    /// Create a manager and wait until its document is loaded.
    pub async fn open(host: HostContext) -> Arc<Self> {
        let manager = Self::spawn(host);
        manager.wait_ready().await;
        manager
    }

    /// The host this manager was created for.
    pub const fn host(&self) -> &HostContext {
        &self.host
    }

    /// Snapshot of the current document, or `None` before readiness.
    pub fn settings(&self) -> Option<T> {
        self.lock_state().settings().cloned()
    }

    /// Whether the initial load has completed.
    pub fn is_ready(&self) -> bool {
        self.lock_state().settings().is_some()
    }

    /// Run `handler` once the document has loaded.
    ///
    /// Runs immediately if the document is already loaded. Every handler
    /// registered before the load completes is run exactly once.
    pub fn once_ready<F>(&self, handler: F)
    where
        F: FnOnce(&T) + Send + 'static,
    {
        let immediate = {
            let mut state = self.lock_state();
            state
                .subscribe(Box::new(handler))
                .zip(state.settings().cloned())
        };

        if let Some((handler, settings)) = immediate {
            handler(&settings);
        }
    }

    /// Wait for the document to load and return a snapshot of it.
    pub async fn wait_ready(&self) -> T {
        let (tx, rx) = oneshot::channel();
        self.once_ready(move |settings: &T| {
            // Receiver only goes away if the caller stopped waiting
            let _ = tx.send(settings.clone());
        });

        match rx.await {
            Ok(settings) => settings,
            Err(_) => self.settings().unwrap_or_else(T::defaults),
        }
    }

    /// Deep-merge `partial` into the document and persist the result.
    ///
    /// The merged document is written to the store as a whole and only
    /// replaces the in-memory mirror once the store acknowledges it. On
    /// error the mirror is unchanged.
    ///
    /// If the initial load could not read the store, the store is read
    /// again first; while it stays unreadable every update fails and
    /// nothing is written.
    pub async fn update_settings(&self, partial: T::Partial) -> Result<(), SettingsError> {
        let Some(store) = self.host.store().cloned() else {
            return Err(SettingsError::PersistenceUnavailable {
                reason: format!("no persistent store in {} host", self.host.runtime()),
            });
        };

        let _lane = self.write_lane.lock().await;
        let mut current = self.wait_ready().await;
        if self.unsynced.load(Ordering::SeqCst) {
            current = Self::reload(store.as_ref()).await?;
            self.lock_state().commit(current.clone());
            self.unsynced.store(false, Ordering::SeqCst);
            info!("Settings store readable again; reloaded settings");
        }

        let merged = merge_partial(&current, &partial)?;
        let entries = to_entries(&merged)?;

        store
            .set(entries)
            .await
            .map_err(|e| SettingsError::PersistenceUnavailable {
                reason: e.to_string(),
            })?;

        self.lock_state().commit(merged);
        debug!("Settings updated");
        Ok(())
    }

    async fn load(&self) {
        let settings = match self.host.store() {
            Some(store) => {
                let (settings, synced) = Self::load_from(store.as_ref()).await;
                self.unsynced.store(!synced, Ordering::SeqCst);
                settings
            }
            None => {
                debug!(
                    runtime = %self.host.runtime(),
                    "No persistent store; using default settings"
                );
                T::defaults()
            }
        };
        self.resolve(settings);
    }

    /// Read the document, falling back to defaults.
    ///
    /// The flag is `false` when the defaults stand in for stored data that
    /// could not be read.
    async fn load_from(store: &dyn PersistentStore) -> (T, bool) {
        match store.get(T::KEYS).await {
            Ok(stored) if stored.is_empty() => {
                let defaults = T::defaults();
                match to_entries(&defaults) {
                    Ok(entries) => match store.set(entries).await {
                        Ok(()) => info!("Initialized settings store with defaults"),
                        Err(e) => warn!(error = %e, "Failed to write default settings"),
                    },
                    Err(e) => warn!(error = %e, "Failed to encode default settings"),
                }
                (defaults, true)
            }
            Ok(stored) => {
                debug!(keys = stored.len(), "Loaded stored settings");
                match apply_defaults(stored) {
                    Ok(settings) => (settings, true),
                    Err(e) => {
                        warn!(error = %e, "Stored settings unreadable; using defaults");
                        (T::defaults(), false)
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to load settings; using defaults");
                (T::defaults(), false)
            }
        }
    }

    async fn reload(store: &dyn PersistentStore) -> Result<T, SettingsError> {
        let stored = store
            .get(T::KEYS)
            .await
            .map_err(|e| SettingsError::PersistenceUnavailable {
                reason: format!("settings could not be read: {e}"),
            })?;
        apply_defaults(stored)
    }

    fn resolve(&self, settings: T) {
        let waiters = self.lock_state().resolve(settings.clone());
        for handler in waiters.into_iter().flatten() {
            handler(&settings);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, Lifecycle<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
