//! Inbound Ports (Driving Ports)
//!
//! These traits define the API that external components use to interact
//! with the scan engine.

use async_trait::async_trait;

use crate::domain::{MatchJob, MatchResult};
use crate::error::EngineError;
use crate::metrics::MetricsSnapshot;

/// Primary scan API (Driving Port)
#[async_trait]
pub trait FilterScanApi: Send + Sync {
    /// Pull the current scripts from the provider and install them as the
    /// active watch set.
    ///
    /// # Returns
    /// The number of items installed. An empty set is valid; every
    /// subsequent scan then reports no match.
    async fn reload_watch_set(&self) -> Result<usize, EngineError>;

    /// Scan a single filter against the active watch set.
    fn scan(&self, job: &MatchJob) -> Result<bool, EngineError>;

    /// Scan a batch of filters, one result per job in job order.
    ///
    /// Malformed filters report [`MatchResult::Invalid`] in place; they
    /// never abort the rest of the batch.
    fn scan_batch(&self, jobs: &[MatchJob]) -> Vec<MatchResult>;

    /// Point-in-time metrics for this engine.
    fn metrics(&self) -> MetricsSnapshot;
}
