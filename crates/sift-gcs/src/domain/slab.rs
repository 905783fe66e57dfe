//! Bounded value slabs for decoded filters
//!
//! Decoded filter values live in statically sized arenas indexed by a
//! validated length: pushes past capacity reject instead of reallocating,
//! which keeps the memory layout predictable for lane-parallel execution and
//! bounds what a hostile filter can make us hold.
//!
//! Two widths exist. Filters whose mapped domain `F` stays below 65536 pack
//! into 16-bit lanes; everything up to a 32-bit domain uses the wide form.
//! The width is picked per filter from `F` alone.

use crate::domain::matcher;
use crate::error::FilterError;

/// Hard ceiling on decoded elements per filter.
///
/// Reflects the largest filter the target block type can produce; a declared
/// count beyond it is malformed input, not a request for more memory.
pub const MAX_FILTER_ELEMENTS: usize = 4096;

/// Integer widths a value slab can hold.
pub trait LaneValue: Copy + Default + Ord + Send + Sync {
    /// Lane width in bits.
    const BITS: u32;

    /// Narrow a mapped value; the slab guarantees it fits the lane.
    fn from_mapped(value: u64) -> Self;

    /// Widen back to the mapped domain.
    fn widen(self) -> u64;
}

impl LaneValue for u16 {
    const BITS: u32 = 16;

    fn from_mapped(value: u64) -> Self {
        value as u16
    }

    fn widen(self) -> u64 {
        self as u64
    }
}

impl LaneValue for u32 {
    const BITS: u32 = 32;

    fn from_mapped(value: u64) -> Self {
        value as u32
    }

    fn widen(self) -> u64 {
        self as u64
    }
}

/// Fixed-capacity arena of decoded filter values, ascending order.
#[derive(Clone, Debug)]
pub struct ValueSlab<T> {
    values: Box<[T; MAX_FILTER_ELEMENTS]>,
    len: usize,
}

impl<T: LaneValue> ValueSlab<T> {
    pub fn new() -> Self {
        Self {
            values: Box::new([T::default(); MAX_FILTER_ELEMENTS]),
            len: 0,
        }
    }

    /// Append a mapped value; rejects at capacity.
    pub fn push(&mut self, value: u64) -> Result<(), FilterError> {
        if self.len == MAX_FILTER_ELEMENTS {
            return Err(FilterError::CapacityExceeded {
                max: MAX_FILTER_ELEMENTS,
            });
        }
        self.values[self.len] = T::from_mapped(value);
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The populated prefix of the arena.
    pub fn as_slice(&self) -> &[T] {
        &self.values[..self.len]
    }
}

impl<T: LaneValue> Default for ValueSlab<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded filter's sorted value sequence, width chosen per filter.
#[derive(Clone, Debug)]
pub enum DecodedFilterSet {
    /// Mapped domain below 65536: 16-bit lanes.
    Narrow(ValueSlab<u16>),
    /// Mapped domain up to 2^32: 32-bit lanes.
    Wide(ValueSlab<u32>),
}

impl DecodedFilterSet {
    /// Pick the slab width for a filter with mapped domain `f`.
    pub fn for_domain(f: u64) -> Result<Self, FilterError> {
        if f < 1 << 16 {
            Ok(Self::Narrow(ValueSlab::new()))
        } else if f <= 1 << 32 {
            Ok(Self::Wide(ValueSlab::new()))
        } else {
            Err(FilterError::ProtocolMismatch(format!(
                "mapped domain {} exceeds the 32-bit lane width",
                f
            )))
        }
    }

    /// Append a mapped value; rejects at capacity.
    pub fn push(&mut self, value: u64) -> Result<(), FilterError> {
        match self {
            Self::Narrow(slab) => slab.push(value),
            Self::Wide(slab) => slab.push(value),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Narrow(slab) => slab.len(),
            Self::Wide(slab) => slab.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if any sorted candidate value appears in this filter.
    pub fn intersects(&self, candidates: &[u64]) -> bool {
        match self {
            Self::Narrow(slab) => matcher::intersects(slab.as_slice(), candidates),
            Self::Wide(slab) => matcher::intersects(slab.as_slice(), candidates),
        }
    }

    /// True if every sorted candidate value appears in this filter.
    pub fn contains_all(&self, candidates: &[u64]) -> bool {
        match self {
            Self::Narrow(slab) => matcher::contains_all(slab.as_slice(), candidates),
            Self::Wide(slab) => matcher::contains_all(slab.as_slice(), candidates),
        }
    }

    /// Widened copy of the values, mostly for inspection and tests.
    pub fn to_vec(&self) -> Vec<u64> {
        match self {
            Self::Narrow(slab) => slab.as_slice().iter().map(|v| v.widen()).collect(),
            Self::Wide(slab) => slab.as_slice().iter().map(|v| v.widen()).collect(),
        }
    }
}
