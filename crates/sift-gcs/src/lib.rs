//! # Sift GCS
//!
//! Golomb-coded set (GCS) compact block filters: construction, strict
//! decoding, and probabilistic membership matching.
//!
//! ## Architecture
//!
//! This crate is the pure protocol core; orchestration lives upstream:
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `FilterParams`: Golomb-Rice parameter `P` and false-positive modulus `M`
//!   - `FilterKey`: SipHash key derived from a block hash
//!   - `EncodedFilter`: wire-form filter with decode and match operations
//!   - `FilterBuilder`: element set to wire-form serializer
//!   - `DecodedFilterSet`: width-selected bounded slab of decoded values
//!   - `BitReader` / `BitWriter`: MSB-first bitstream primitives
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: No false negatives - an element a filter was built
//!   from always matches under the same key and parameters
//! - **INVARIANT-2**: Decoded value sequences are non-decreasing
//! - **INVARIANT-3**: Malformed filter bytes raise [`FilterError`], never a
//!   silent no-match
//!
//! ## Usage Example
//!
//! ```ignore
//! use sift_gcs::{FilterBuilder, FilterKey, FilterParams};
//!
//! let key = FilterKey::from_block_hash(&block_hash);
//! let params = FilterParams::bip158_basic();
//!
//! let mut builder = FilterBuilder::new(key, params);
//! builder.add_element(b"script-a").add_element(b"script-b");
//! let filter = builder.build()?;
//!
//! assert!(filter.match_any(&key, &params, [b"script-a".as_slice()])?);
//! ```
//!
//! ## References
//!
//! - BIP 158: Compact Block Filters for Light Clients

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    hash_to_range, map_to_range, siphash, BitReader, BitWriter, DecodedFilterSet, EncodedFilter,
    FilterBuilder, FilterKey, FilterParams, LaneValue, ValueSlab, FP_MODULUS_M, GOLOMB_RICE_P,
    MAX_FILTER_ELEMENTS, MAX_GOLOMB_RICE_P,
};
pub use error::FilterError;
