//! Domain Layer - Pure filter logic
//!
//! Reference: BIP 158 (Golomb-coded set filters)
//!
//! This layer contains:
//! - Filter parameters and derived constants
//! - Keyed hashing and range mapping
//! - MSB-first bitstream primitives
//! - Golomb-Rice coding of value deltas
//! - Compact-size count prefix parsing
//! - Bounded value slabs for decoded filters
//! - Encoded filter decode, build, and match
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bitstream;
pub mod builder;
pub mod filter;
pub(crate) mod golomb;
pub mod hashing;
pub mod key;
pub mod matcher;
pub mod params;
pub mod slab;
pub mod varint;

pub use bitstream::{BitReader, BitWriter};
pub use builder::FilterBuilder;
pub use filter::EncodedFilter;
pub use hashing::{hash_to_range, map_to_range, siphash};
pub use key::FilterKey;
pub use params::{FilterParams, FP_MODULUS_M, GOLOMB_RICE_P, MAX_GOLOMB_RICE_P};
pub use slab::{DecodedFilterSet, LaneValue, ValueSlab, MAX_FILTER_ELEMENTS};
pub use varint::{read_compact_size, write_compact_size};
