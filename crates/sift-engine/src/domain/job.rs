//! Batch scan units and their per-filter outcomes

use sift_gcs::{EncodedFilter, FilterError, FilterKey};

/// One filter to scan: the wire bytes plus the key they were built under.
///
/// Jobs carry no identity of their own; a batch reports results in job
/// order, so the caller correlates by position.
#[derive(Clone, Debug)]
pub struct MatchJob {
    pub key: FilterKey,
    pub filter: EncodedFilter,
}

impl MatchJob {
    pub fn new(key: FilterKey, filter: EncodedFilter) -> Self {
        Self { key, filter }
    }
}

/// Outcome of scanning one filter against the watch set.
///
/// `Invalid` is a first-class outcome, not an aborted scan: a filter that
/// fails to decode reports its error in place while the rest of the batch
/// completes normally.
#[derive(Clone, Debug)]
pub enum MatchResult {
    /// Some watched script is (probabilistically) in the filter
    Match,
    /// No watched script is in the filter
    NoMatch,
    /// The filter bytes failed validation or decoding
    Invalid(FilterError),
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl From<Result<bool, FilterError>> for MatchResult {
    fn from(result: Result<bool, FilterError>) -> Self {
        match result {
            Ok(true) => Self::Match,
            Ok(false) => Self::NoMatch,
            Err(err) => Self::Invalid(err),
        }
    }
}
