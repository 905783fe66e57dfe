//! Metrics for scan engine operations
//!
//! Thread-safe counters for batch throughput, match and rejection rates,
//! and watch set churn.
//!
//! ## Usage
//!
//! ```ignore
//! use sift_engine::metrics::Metrics;
//!
//! let metrics = Metrics::new();
//!
//! let start = std::time::Instant::now();
//! let results = dispatcher.dispatch(&watch, &jobs);
//! metrics.record_batch(&results, start.elapsed());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::MatchResult;

/// Metrics collector for scan operations
#[derive(Default)]
pub struct Metrics {
    /// Total batches dispatched
    pub batches_dispatched: AtomicU64,
    /// Total jobs scanned, batched or single
    pub jobs_processed: AtomicU64,
    /// Jobs that reported a match
    pub jobs_matched: AtomicU64,
    /// Jobs rejected as malformed
    pub jobs_invalid: AtomicU64,
    /// Watch set installations
    pub watch_reloads: AtomicU64,
    /// Cumulative scan wall time in nanoseconds
    pub scan_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one dispatched batch and its per-job outcomes.
    pub fn record_batch(&self, results: &[MatchResult], duration: Duration) {
        self.batches_dispatched.fetch_add(1, Ordering::Relaxed);
        self.scan_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        for result in results {
            self.record_outcome(result);
        }
    }

    /// Record one single-job scan.
    pub fn record_scan(&self, result: &MatchResult, duration: Duration) {
        self.scan_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        self.record_outcome(result);
    }

    /// Record a watch set installation.
    pub fn record_reload(&self) {
        self.watch_reloads.fetch_add(1, Ordering::Relaxed);
    }

    fn record_outcome(&self, result: &MatchResult) {
        self.jobs_processed.fetch_add(1, Ordering::Relaxed);
        match result {
            MatchResult::Match => {
                self.jobs_matched.fetch_add(1, Ordering::Relaxed);
            }
            MatchResult::NoMatch => {}
            MatchResult::Invalid(_) => {
                self.jobs_invalid.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            batches_dispatched: self.batches_dispatched.load(Ordering::Relaxed),
            jobs_processed: self.jobs_processed.load(Ordering::Relaxed),
            jobs_matched: self.jobs_matched.load(Ordering::Relaxed),
            jobs_invalid: self.jobs_invalid.load(Ordering::Relaxed),
            watch_reloads: self.watch_reloads.load(Ordering::Relaxed),
            avg_job_ns: self.avg_job_time_ns(),
        }
    }

    /// Average scan wall time per job in nanoseconds
    pub fn avg_job_time_ns(&self) -> u64 {
        let total = self.scan_time_ns.load(Ordering::Relaxed);
        let count = self.jobs_processed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of matching jobs to all processed jobs
    ///
    /// Includes false positives; with a known watch set this approximates
    /// the filters' combined hit rate.
    pub fn observed_match_rate(&self) -> f64 {
        let total = self.jobs_processed.load(Ordering::Relaxed);
        let matched = self.jobs_matched.load(Ordering::Relaxed);
        if total > 0 {
            matched as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.batches_dispatched.store(0, Ordering::Relaxed);
        self.jobs_processed.store(0, Ordering::Relaxed);
        self.jobs_matched.store(0, Ordering::Relaxed);
        self.jobs_invalid.store(0, Ordering::Relaxed);
        self.watch_reloads.store(0, Ordering::Relaxed);
        self.scan_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default)]
pub struct MetricsSnapshot {
    pub batches_dispatched: u64,
    pub jobs_processed: u64,
    pub jobs_matched: u64,
    pub jobs_invalid: u64,
    pub watch_reloads: u64,
    pub avg_job_ns: u64,
}
