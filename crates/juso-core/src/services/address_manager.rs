//! Address manager - runs searches and caches their results.

use std::sync::{Arc, OnceLock};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::SettingsManager;
use crate::domain::{AddressQuery, AddressRecord, SearchParams};
use crate::ports::{AddressLookupError, AddressLookupPort, CacheWriteSink, NoopCacheSink};
use crate::settings::{SettingsDocument, SettingsPatch};

/// Work queued on the cache-write lane.
enum CacheJob {
    Write {
        query: AddressQuery,
        records: Vec<AddressRecord>,
    },
    Flush(oneshot::Sender<()>),
}

/// Service adapting UI search requests to the address lookup port.
///
/// Every successful search is cached through the settings manager by a
/// background writer so the front-end can restore it when reopened. Cache
/// writes are applied in the order their searches completed, and keep
/// running after the manager is dropped.
pub struct AddressManager {
    lookup: Arc<dyn AddressLookupPort>,
    settings: Arc<SettingsManager<SettingsDocument>>,
    sink: Arc<dyn CacheWriteSink>,
    cache_lane: OnceLock<mpsc::UnboundedSender<CacheJob>>,
}

impl AddressManager {
    /// Create a new address manager.
    ///
    /// The manager searches only in hosts where `settings` can persist.
    pub fn new(
        lookup: Arc<dyn AddressLookupPort>,
        settings: Arc<SettingsManager<SettingsDocument>>,
    ) -> Self {
        Self {
            lookup,
            settings,
            sink: Arc::new(NoopCacheSink::new()),
            cache_lane: OnceLock::new(),
        }
    }

    /// Report failed cache writes to `sink`.
    ///
    /// Takes effect for a manager that has not searched yet.
    #[must_use]
    pub fn with_cache_sink(mut self, sink: Arc<dyn CacheWriteSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run a search.
    ///
    /// - `Ok(None)`: not attempted. The host has no store, or the keyword
    ///   is blank. No request was made.
    /// - `Ok(Some(records))`: records in the order the service returned
    ///   them, possibly empty.
    /// - `Err(e)`: the lookup error, unmodified.
    ///
    /// On success the results and query are cached in the background; a
    /// failed cache write never fails the search.
    pub async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<Option<Vec<AddressRecord>>, AddressLookupError> {
        if !self.settings.host().has_store() {
            debug!(
                runtime = %self.settings.host().runtime(),
                "Search not attempted: host cannot persist"
            );
            return Ok(None);
        }

        let Some(query) = params.normalize() else {
            debug!("Search not attempted: blank keyword");
            return Ok(None);
        };

        let records = self.lookup.search(&query).await?;
        debug!(
            keyword = %query.keyword,
            page = query.current_page,
            count = records.len(),
            "Search completed"
        );

        self.queue_cache_write(query, records.clone());
        Ok(Some(records))
    }

    /// Wait for every cache write queued so far to finish.
    pub async fn flush_cache_writes(&self) {
        let Some(lane) = self.cache_lane.get() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        if lane.send(CacheJob::Flush(tx)).is_err() || rx.await.is_err() {
            warn!("Cache write lane stopped before flushing");
        }
    }

    fn queue_cache_write(&self, query: AddressQuery, records: Vec<AddressRecord>) {
        let lane = self.cache_lane.get_or_init(|| {
            let (tx, rx) = mpsc::unbounded_channel();
            tokio::spawn(run_cache_writes(
                Arc::clone(&self.settings),
                Arc::clone(&self.sink),
                rx,
            ));
            tx
        });

        if lane.send(CacheJob::Write { query, records }).is_err() {
            warn!("Cache write lane closed; search results not cached");
        }
    }
}

/// Apply queued cache writes one at a time, in queue order.
///
/// Runs until every sender is gone and the queue is drained.
async fn run_cache_writes(
    settings: Arc<SettingsManager<SettingsDocument>>,
    sink: Arc<dyn CacheWriteSink>,
    mut jobs: mpsc::UnboundedReceiver<CacheJob>,
) {
    while let Some(job) = jobs.recv().await {
        match job {
            CacheJob::Write { query, records } => {
                let patch = SettingsPatch::cached_search(&query, records);
                if let Err(e) = settings.update_settings(patch).await {
                    warn!(keyword = %query.keyword, error = %e, "Failed to cache search results");
                    sink.cache_write_failed(&query.keyword, &e);
                }
            }
            CacheJob::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    debug!("Cache write lane closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostContext;
    use crate::ports::{PersistentStore, StoreError};
    use crate::settings::SettingsError;
    use async_trait::async_trait;
    use serde_json::{Map, Value};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct MockStore {
        entries: Mutex<Map<String, Value>>,
        fail_writes: AtomicBool,
        slow_next_write: AtomicBool,
    }

    #[async_trait]
    impl PersistentStore for MockStore {
        async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
            let entries = self.entries.lock().unwrap();
            Ok(keys
                .iter()
                .filter_map(|key| entries.get(*key).map(|v| ((*key).to_string(), v.clone())))
                .collect())
        }

        async fn set(&self, entries: Map<String, Value>) -> Result<(), StoreError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StoreError::Storage("read-only".to_string()));
            }
            if self.slow_next_write.swap(false, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(30)).await;
            }
            self.entries.lock().unwrap().extend(entries);
            Ok(())
        }
    }

    struct MockLookup {
        result: Result<Vec<AddressRecord>, AddressLookupError>,
        calls: AtomicUsize,
        last_query: Mutex<Option<AddressQuery>>,
    }

    impl MockLookup {
        fn returning(result: Result<Vec<AddressRecord>, AddressLookupError>) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl AddressLookupPort for MockLookup {
        async fn search(
            &self,
            query: &AddressQuery,
        ) -> Result<Vec<AddressRecord>, AddressLookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query.clone());
            self.result.clone()
        }
    }

    /// Returns one record whose road address is the searched keyword.
    struct EchoLookup;

    #[async_trait]
    impl AddressLookupPort for EchoLookup {
        async fn search(
            &self,
            query: &AddressQuery,
        ) -> Result<Vec<AddressRecord>, AddressLookupError> {
            Ok(vec![AddressRecord::new("00000", &query.keyword, "", "")])
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        failures: Mutex<Vec<String>>,
    }

    impl CacheWriteSink for RecordingSink {
        fn cache_write_failed(&self, keyword: &str, _error: &SettingsError) {
            self.failures.lock().unwrap().push(keyword.to_string());
        }
    }

    fn records() -> Vec<AddressRecord> {
        vec![
            AddressRecord::new("06232", "강남대로 382", "역삼동 825", "382 Gangnam-daero"),
            AddressRecord::new("06120", "강남대로 476", "논현동 201", "476 Gangnam-daero"),
        ]
    }

    async fn manager_with(
        store: &Arc<MockStore>,
        lookup: &Arc<MockLookup>,
    ) -> (AddressManager, Arc<SettingsManager<SettingsDocument>>) {
        let host = HostContext::extension(Arc::clone(store) as Arc<dyn PersistentStore>);
        let settings = SettingsManager::open(host).await;
        let manager = AddressManager::new(
            Arc::clone(lookup) as Arc<dyn AddressLookupPort>,
            Arc::clone(&settings),
        );
        (manager, settings)
    }

    #[tokio::test]
    async fn test_search_returns_records_and_caches_them() {
        let store = Arc::new(MockStore::default());
        let lookup = Arc::new(MockLookup::returning(Ok(records())));
        let (manager, settings) = manager_with(&store, &lookup).await;

        let result = manager
            .search(&SearchParams::new("강남대로", "1", "20"))
            .await
            .unwrap();
        assert_eq!(result, Some(records()));

        manager.flush_cache_writes().await;
        let cached = settings.settings().unwrap();
        assert_eq!(cached.address_data, records());
        let prev = cached.prev_search_key.unwrap();
        assert_eq!(prev.keyword, "강남대로");
        assert_eq!(prev.current_page, "1");
        assert_eq!(prev.count_per_page, "20");
    }

    #[tokio::test]
    async fn test_search_passes_normalized_query() {
        let store = Arc::new(MockStore::default());
        let lookup = Arc::new(MockLookup::returning(Ok(Vec::new())));
        let (manager, _settings) = manager_with(&store, &lookup).await;

        let result = manager
            .search(&SearchParams::new(" 자양동 ", "x", "1000"))
            .await
            .unwrap();
        assert_eq!(result, Some(Vec::new()));

        let query = lookup.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query.keyword, "자양동");
        assert_eq!(query.current_page, 1);
        assert_eq!(query.count_per_page, 100);
    }

    #[tokio::test]
    async fn test_search_without_store_is_not_attempted() {
        let lookup = Arc::new(MockLookup::returning(Ok(records())));
        let settings = SettingsManager::open(HostContext::Page).await;
        let manager = AddressManager::new(
            Arc::clone(&lookup) as Arc<dyn AddressLookupPort>,
            settings,
        );

        let result = manager.search(&SearchParams::new("강남대로", "1", "20")).await;
        assert_eq!(result, Ok(None));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_keyword_is_not_attempted() {
        let store = Arc::new(MockStore::default());
        let lookup = Arc::new(MockLookup::returning(Ok(records())));
        let (manager, _settings) = manager_with(&store, &lookup).await;

        let result = manager.search(&SearchParams::new("  ", "1", "20")).await;
        assert_eq!(result, Ok(None));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lookup_error_propagates_and_cache_is_untouched() {
        let store = Arc::new(MockStore::default());
        let error = AddressLookupError::Network {
            message: "timed out".to_string(),
        };
        let lookup = Arc::new(MockLookup::returning(Err(error.clone())));
        let (manager, settings) = manager_with(&store, &lookup).await;
        settings
            .update_settings(SettingsPatch {
                address_data: Some(records()),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = manager.search(&SearchParams::new("강남대로", "1", "20")).await;
        assert_eq!(result, Err(error));

        manager.flush_cache_writes().await;
        assert_eq!(settings.settings().unwrap().address_data, records());
    }

    #[tokio::test]
    async fn test_cache_failure_does_not_fail_search() {
        let store = Arc::new(MockStore::default());
        let lookup = Arc::new(MockLookup::returning(Ok(records())));
        let (manager, settings) = manager_with(&store, &lookup).await;
        let sink = Arc::new(RecordingSink::default());
        let manager = manager.with_cache_sink(Arc::clone(&sink) as Arc<dyn CacheWriteSink>);
        store.fail_writes.store(true, Ordering::SeqCst);

        let result = manager
            .search(&SearchParams::new("강남대로", "1", "20"))
            .await
            .unwrap();
        assert_eq!(result, Some(records()));

        manager.flush_cache_writes().await;
        assert_eq!(*sink.failures.lock().unwrap(), vec!["강남대로".to_string()]);
        assert!(settings.settings().unwrap().address_data.is_empty());
    }

    #[tokio::test]
    async fn test_dropped_manager_still_caches_results() {
        let store = Arc::new(MockStore::default());
        let lookup = Arc::new(MockLookup::returning(Ok(records())));
        let (manager, settings) = manager_with(&store, &lookup).await;
        store.slow_next_write.store(true, Ordering::SeqCst);

        manager
            .search(&SearchParams::new("강남대로", "1", "20"))
            .await
            .unwrap();
        drop(manager);

        let mut cached = settings.settings().unwrap();
        for _ in 0..100 {
            if cached.prev_search_key.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
            cached = settings.settings().unwrap();
        }

        assert_eq!(cached.address_data, records());
        assert_eq!(cached.prev_search_key.unwrap().keyword, "강남대로");
        assert!(store.entries.lock().unwrap().contains_key("prevSearchKey"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cache_writes_follow_search_order() {
        let store = Arc::new(MockStore::default());
        let host = HostContext::extension(Arc::clone(&store) as Arc<dyn PersistentStore>);
        let settings = SettingsManager::open(host).await;
        let manager = AddressManager::new(Arc::new(EchoLookup), Arc::clone(&settings));
        store.slow_next_write.store(true, Ordering::SeqCst);

        for keyword in ["자양동", "역삼동", "논현동"] {
            manager
                .search(&SearchParams::new(keyword, "1", "10"))
                .await
                .unwrap();
        }
        manager.flush_cache_writes().await;

        let cached = settings.settings().unwrap();
        assert_eq!(cached.prev_search_key.unwrap().keyword, "논현동");
        assert_eq!(cached.address_data[0].road_addr, "논현동");
    }

    #[tokio::test]
    async fn test_flush_without_searches_returns() {
        let store = Arc::new(MockStore::default());
        let lookup = Arc::new(MockLookup::returning(Ok(records())));
        let (manager, settings) = manager_with(&store, &lookup).await;

        manager.flush_cache_writes().await;
        assert!(settings.settings().unwrap().prev_search_key.is_none());
    }
}
