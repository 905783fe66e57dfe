//! Filter construction from a set of raw elements
//!
//! Building is the mirror of decoding: hash every distinct element into the
//! mapped domain, sort, delta-encode, and Golomb-Rice code the deltas behind
//! a compact-size count prefix. Raw elements are deduplicated on insert;
//! distinct elements that land on the same mapped value stay in the sequence
//! as zero deltas, exactly as a decoder expects to see them.
//!
//! Reference: BIP 158 (filter construction).

use std::collections::BTreeSet;

use crate::domain::bitstream::BitWriter;
use crate::domain::filter::EncodedFilter;
use crate::domain::golomb::write_golomb_rice;
use crate::domain::hashing::hash_to_range;
use crate::domain::key::FilterKey;
use crate::domain::params::FilterParams;
use crate::domain::slab::MAX_FILTER_ELEMENTS;
use crate::domain::varint::write_compact_size;
use crate::error::FilterError;

/// Accumulates raw elements and serializes them into an [`EncodedFilter`].
#[derive(Clone, Debug)]
pub struct FilterBuilder {
    key: FilterKey,
    params: FilterParams,
    elements: BTreeSet<Vec<u8>>,
}

impl FilterBuilder {
    pub fn new(key: FilterKey, params: FilterParams) -> Self {
        Self {
            key,
            params,
            elements: BTreeSet::new(),
        }
    }

    /// Add one element; duplicates collapse into a single entry.
    pub fn add_element(&mut self, element: &[u8]) -> &mut Self {
        self.elements.insert(element.to_vec());
        self
    }

    /// Distinct elements added so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the accumulated elements into wire form.
    pub fn build(&self) -> Result<EncodedFilter, FilterError> {
        self.params.validate()?;

        let count = self.elements.len();
        if count > MAX_FILTER_ELEMENTS {
            return Err(FilterError::CapacityExceeded {
                max: MAX_FILTER_ELEMENTS,
            });
        }

        let mut content = Vec::new();
        write_compact_size(&mut content, count as u64);
        if count == 0 {
            return Ok(EncodedFilter::from_bytes(content));
        }

        let f = self.params.range_size(count as u64)?;
        let mut mapped: Vec<u64> = self
            .elements
            .iter()
            .map(|element| hash_to_range(&self.key, f, element))
            .collect();
        mapped.sort_unstable();

        let mut writer = BitWriter::new();
        let mut previous = 0u64;
        for value in mapped {
            write_golomb_rice(&mut writer, value - previous, self.params.p);
            previous = value;
        }
        content.extend_from_slice(&writer.finish());
        Ok(EncodedFilter::from_bytes(content))
    }
}
