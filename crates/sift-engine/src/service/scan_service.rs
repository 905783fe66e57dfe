//! Filter Scan Service
//!
//! Orchestrates the batch dispatcher, the installed watch set, and the
//! watch set provider behind the `FilterScanApi` port.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::info;

use crate::dispatch::BatchDispatcher;
use crate::domain::{EngineConfig, MatchJob, MatchResult, WatchSet};
use crate::error::EngineError;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::ports::{FilterScanApi, WatchSetProvider};

/// Filter Scan Service implementation
///
/// Implements the `FilterScanApi` port using an injected watch set
/// provider. The active watch set is an `Arc` swapped under a lock, so
/// in-flight scans keep the set they started with while a reload installs
/// the next one.
pub struct FilterScanService<P: WatchSetProvider> {
    /// Watched script source (driven port)
    provider: Arc<P>,
    /// Lane-parallel batch executor
    dispatcher: BatchDispatcher,
    /// Engine configuration the dispatcher was built from
    config: EngineConfig,
    /// Currently installed watch set
    watch: RwLock<Arc<WatchSet>>,
    /// Operation counters
    metrics: Metrics,
}

impl<P: WatchSetProvider> FilterScanService<P> {
    /// Create a new service with the default configuration.
    pub fn new(provider: Arc<P>) -> Self {
        let config = EngineConfig::default();
        Self {
            provider,
            dispatcher: BatchDispatcher::new(&config),
            config,
            watch: RwLock::new(Arc::new(WatchSet::empty())),
            metrics: Metrics::new(),
        }
    }

    /// Create with a custom configuration, validating it first.
    pub fn with_config(provider: Arc<P>, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            provider,
            dispatcher: BatchDispatcher::new(&config),
            config,
            watch: RwLock::new(Arc::new(WatchSet::empty())),
            metrics: Metrics::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Handle to the currently installed watch set.
    pub fn watch_snapshot(&self) -> Arc<WatchSet> {
        let guard = self.watch.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Build a watch set from raw scripts and install it directly,
    /// bypassing the provider.
    ///
    /// The previous set stays active if the new one is rejected.
    pub fn install_watch_items<I>(&self, scripts: I) -> Result<usize, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let watch = WatchSet::from_scripts(scripts)?;
        if watch.len() > self.config.max_watch_items {
            return Err(EngineError::WatchSetTooLarge {
                count: watch.len(),
                max: self.config.max_watch_items,
            });
        }

        let items = watch.len();
        *self.watch.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(watch);
        self.metrics.record_reload();
        info!(items, "watch set installed");
        Ok(items)
    }
}

#[async_trait]
impl<P: WatchSetProvider + 'static> FilterScanApi for FilterScanService<P> {
    async fn reload_watch_set(&self) -> Result<usize, EngineError> {
        let scripts = self.provider.watched_scripts().await?;
        self.install_watch_items(scripts)
    }

    fn scan(&self, job: &MatchJob) -> Result<bool, EngineError> {
        let watch = self.watch_snapshot();

        let start = Instant::now();
        let result = self.dispatcher.run_job(&watch, job);
        let elapsed = start.elapsed();

        match result {
            Ok(matched) => {
                let outcome = if matched {
                    MatchResult::Match
                } else {
                    MatchResult::NoMatch
                };
                self.metrics.record_scan(&outcome, elapsed);
                Ok(matched)
            }
            Err(err) => {
                self.metrics
                    .record_scan(&MatchResult::Invalid(err.clone()), elapsed);
                Err(EngineError::Filter(err))
            }
        }
    }

    fn scan_batch(&self, jobs: &[MatchJob]) -> Vec<MatchResult> {
        let watch = self.watch_snapshot();

        let start = Instant::now();
        let results = self.dispatcher.dispatch(&watch, jobs);
        self.metrics.record_batch(&results, start.elapsed());
        results
    }

    fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
