//! Error types for compact filter parsing, decoding, and construction

use thiserror::Error;

/// Errors that can occur while parsing, decoding, or building a compact filter.
///
/// Every variant is fatal to the operation that raised it. These are pure,
/// deterministic functions over the given bytes: retrying without new bytes
/// cannot change the outcome, and none of them may be collapsed into a
/// silent "no match".
#[derive(Debug, Clone, Error)]
pub enum FilterError {
    #[error("truncated bitstream: {needed} more bit(s) required at bit {at}")]
    TruncatedBitstream { at: usize, needed: usize },

    #[error("overlong encoding: {trailing} trailing byte(s) after the final element")]
    OverlongEncoding { trailing: usize },

    #[error("truncated element count prefix")]
    TruncatedCountPrefix,

    #[error("non-canonical element count prefix (not minimally encoded)")]
    NonMinimalCountPrefix,

    #[error("declared element count {declared} exceeds decode capacity {max}")]
    OversizedDecode { declared: u64, max: usize },

    #[error("unary quotient for element {index} exceeds bound {bound}")]
    UnaryRunTooLong { index: usize, bound: u64 },

    #[error("value slab holds at most {max} elements")]
    CapacityExceeded { max: usize },

    #[error("protocol mismatch: {0}")]
    ProtocolMismatch(String),
}
