//! Batch dispatcher: fans filter scans out across worker lanes
//!
//! A batch of jobs is split into contiguous units and each unit is scanned
//! on a Rayon worker. Unit geometry follows the lane count, capped by the
//! configured unit capacity, so small batches stay on few lanes and large
//! ones saturate all of them. Results come back in job order.
//!
//! A filter that fails to decode poisons only its own slot in the result
//! vector; neighbouring jobs in the same unit are unaffected.

use rayon::prelude::*;
use tracing::{debug, warn};

use sift_gcs::{FilterError, FilterParams};

use crate::domain::{EngineConfig, MatchJob, MatchResult, WatchSet};

/// Splits batches into per-lane units and runs scans on the Rayon pool.
pub struct BatchDispatcher {
    params: FilterParams,
    lanes: usize,
    unit_capacity: usize,
}

impl BatchDispatcher {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            params: config.params,
            lanes: config.effective_lanes(),
            unit_capacity: config.unit_capacity,
        }
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn unit_capacity(&self) -> usize {
        self.unit_capacity
    }

    /// Scan one filter against the watch set.
    ///
    /// An empty watch set short-circuits to no match without touching the
    /// filter body. Otherwise the watch items are mapped into this filter's
    /// domain and merged against the fully decoded value sequence.
    pub fn run_job(&self, watch: &WatchSet, job: &MatchJob) -> Result<bool, FilterError> {
        if watch.is_empty() {
            return Ok(false);
        }

        let declared = job.filter.element_count()?;
        let f = self.params.range_size(declared)?;
        let candidates = watch.candidates(&job.key, f);

        let set = job.filter.decode(&self.params)?;
        Ok(set.intersects(&candidates))
    }

    /// Scan a whole batch, one result per job in job order.
    pub fn dispatch(&self, watch: &WatchSet, jobs: &[MatchJob]) -> Vec<MatchResult> {
        if jobs.is_empty() {
            return Vec::new();
        }

        let unit = self.unit_size(jobs.len());
        debug!(
            jobs = jobs.len(),
            lanes = self.lanes,
            unit,
            "dispatching match batch"
        );

        let units: Vec<Vec<MatchResult>> = jobs
            .par_chunks(unit)
            .map(|unit| {
                unit.iter()
                    .map(|job| match self.run_job(watch, job) {
                        Ok(true) => MatchResult::Match,
                        Ok(false) => MatchResult::NoMatch,
                        Err(err) => {
                            warn!(error = %err, "filter rejected during batch scan");
                            MatchResult::Invalid(err)
                        }
                    })
                    .collect()
            })
            .collect();

        units.into_iter().flatten().collect()
    }

    /// Jobs per unit: spread the batch over the lanes, capped per unit.
    fn unit_size(&self, jobs: usize) -> usize {
        jobs.div_ceil(self.lanes).min(self.unit_capacity).max(1)
    }
}
