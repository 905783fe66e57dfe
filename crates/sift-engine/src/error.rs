//! Error types for the filter scan engine

use sift_gcs::FilterError;
use thiserror::Error;

/// Errors that can occur in the scan engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("watch item is {len} bytes, lane records hold at most {max}")]
    WatchItemTooLong { len: usize, max: usize },

    #[error("watch set has {count} items, limit is {max}")]
    WatchSetTooLarge { count: usize, max: usize },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("watch set provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Errors from watch set providers
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider timed out")]
    Timeout,
}
