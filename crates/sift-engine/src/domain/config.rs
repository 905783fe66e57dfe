//! Engine configuration and validation

use serde::{Deserialize, Serialize};
use sift_gcs::FilterParams;

use crate::error::EngineError;

/// Scan engine configuration
///
/// Controls the filter parameters every job is decoded under and how the
/// batch dispatcher splits work across worker lanes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Golomb-Rice parameters shared by every filter this engine scans
    pub params: FilterParams,
    /// Worker lanes for batch scans; 0 picks the host core count
    pub lanes: usize,
    /// Jobs handed to one lane at a time
    pub unit_capacity: usize,
    /// Upper bound on installed watch items
    pub max_watch_items: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            params: FilterParams::bip158_basic(),
            lanes: 0,
            unit_capacity: 32,
            max_watch_items: 10_000,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration before the engine is built from it.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.params.validate()?;

        if self.unit_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "unit_capacity cannot be 0".to_string(),
            ));
        }

        if self.max_watch_items == 0 {
            return Err(EngineError::InvalidConfig(
                "max_watch_items cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Lanes actually used for a batch scan.
    pub fn effective_lanes(&self) -> usize {
        if self.lanes == 0 {
            num_cpus::get()
        } else {
            self.lanes
        }
    }

    /// Builder-style method to set the filter parameters
    pub fn with_params(mut self, params: FilterParams) -> Self {
        self.params = params;
        self
    }

    /// Builder-style method to set the lane count
    pub fn with_lanes(mut self, lanes: usize) -> Self {
        self.lanes = lanes;
        self
    }

    /// Builder-style method to set the per-lane job unit size
    pub fn with_unit_capacity(mut self, unit_capacity: usize) -> Self {
        self.unit_capacity = unit_capacity;
        self
    }

    /// Builder-style method to set the watch item limit
    pub fn with_max_watch_items(mut self, max: usize) -> Self {
        self.max_watch_items = max;
        self
    }
}
