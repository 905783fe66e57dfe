//! Encoded compact filter: wire form, decode, and membership queries
//!
//! An encoded filter is a compact-size element count followed by a
//! Golomb-Rice coded bitstream of value deltas. Decoding expands the
//! stream into a [`DecodedFilterSet`]; matching maps the caller's query
//! elements into the same numeric domain and runs a sorted merge against
//! the decoded values.
//!
//! Decoding is strict. Truncated streams, trailing bytes, non-canonical
//! count prefixes, and implausible unary runs are all reported as errors
//! rather than treated as a miss: a mangled filter must never pass for a
//! clean negative.
//!
//! Reference: BIP 158 (filter contents and serialization).

use sha2::{Digest, Sha256};

use crate::domain::bitstream::BitReader;
use crate::domain::golomb::read_golomb_rice;
use crate::domain::hashing::hash_to_range;
use crate::domain::key::FilterKey;
use crate::domain::params::FilterParams;
use crate::domain::slab::{DecodedFilterSet, MAX_FILTER_ELEMENTS};
use crate::domain::varint::read_compact_size;
use crate::error::FilterError;

/// A compact filter in wire form: count prefix plus coded bitstream.
///
/// The bytes are held verbatim and only interpreted on [`decode`] or one of
/// the match calls, so an `EncodedFilter` can carry malformed input until
/// the moment it is actually inspected.
///
/// [`decode`]: EncodedFilter::decode
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFilter {
    content: Vec<u8>,
}

impl EncodedFilter {
    /// Wrap raw wire bytes without validating them.
    pub fn from_bytes(content: Vec<u8>) -> Self {
        Self { content }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    /// The declared element count from the prefix.
    pub fn element_count(&self) -> Result<u64, FilterError> {
        let (declared, _) = read_compact_size(&self.content)?;
        Ok(declared)
    }

    /// Double-SHA256 of the wire bytes, the canonical filter identifier.
    pub fn filter_hash(&self) -> [u8; 32] {
        let first = Sha256::digest(&self.content);
        Sha256::digest(first).into()
    }

    /// Parse and validate the header: declared count, body offset, and the
    /// mapped domain size `F = N * M`.
    fn read_header(&self, params: &FilterParams) -> Result<(u64, usize, u64), FilterError> {
        params.validate()?;
        let (declared, offset) = read_compact_size(&self.content)?;
        if declared > MAX_FILTER_ELEMENTS as u64 {
            return Err(FilterError::OversizedDecode {
                declared,
                max: MAX_FILTER_ELEMENTS,
            });
        }
        let f = params.range_size(declared)?;
        Ok((declared, offset, f))
    }

    /// Expand the coded bitstream into its sorted value sequence.
    ///
    /// The whole body must be consumed: any full byte left after the final
    /// element is an [`FilterError::OverlongEncoding`]. Zero-bit padding
    /// inside the last byte is part of the wire format and is ignored.
    pub fn decode(&self, params: &FilterParams) -> Result<DecodedFilterSet, FilterError> {
        let (declared, offset, f) = self.read_header(params)?;
        let mut set = DecodedFilterSet::for_domain(f)?;
        let body = &self.content[offset..];

        if declared == 0 {
            if !body.is_empty() {
                return Err(FilterError::OverlongEncoding {
                    trailing: body.len(),
                });
            }
            return Ok(set);
        }

        let bound = params.quotient_bound(f);
        let mut reader = BitReader::new(body);
        let mut value = 0u64;
        for index in 0..declared as usize {
            let delta = read_golomb_rice(&mut reader, params.p, bound, index)?;
            // The quotient bound caps every delta near F + 2^P, so the
            // running sum stays far below u64::MAX at any legal count.
            value += delta;
            set.push(value)?;
        }

        let consumed = reader.position().div_ceil(8);
        if body.len() > consumed {
            return Err(FilterError::OverlongEncoding {
                trailing: body.len() - consumed,
            });
        }
        Ok(set)
    }

    /// True if any query element is (probabilistically) in the filter.
    ///
    /// An empty query set is `Ok(false)` without decoding the body; the
    /// count prefix is still validated. A `true` carries the usual
    /// false-positive probability of roughly `1/M` per query.
    pub fn match_any<I>(
        &self,
        key: &FilterKey,
        params: &FilterParams,
        queries: I,
    ) -> Result<bool, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let (_, _, f) = self.read_header(params)?;
        let mut mapped: Vec<u64> = queries
            .into_iter()
            .map(|query| hash_to_range(key, f, query.as_ref()))
            .collect();
        if mapped.is_empty() {
            return Ok(false);
        }
        mapped.sort_unstable();

        let set = self.decode(params)?;
        Ok(set.intersects(&mapped))
    }

    /// True if every query element is (probabilistically) in the filter.
    ///
    /// Mirrors [`match_any`]: an empty query set is `Ok(false)`, and
    /// duplicate queries are collapsed before the merge.
    ///
    /// [`match_any`]: EncodedFilter::match_any
    pub fn match_all<I>(
        &self,
        key: &FilterKey,
        params: &FilterParams,
        queries: I,
    ) -> Result<bool, FilterError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let (_, _, f) = self.read_header(params)?;
        let mut mapped: Vec<u64> = queries
            .into_iter()
            .map(|query| hash_to_range(key, f, query.as_ref()))
            .collect();
        if mapped.is_empty() {
            return Ok(false);
        }
        mapped.sort_unstable();
        mapped.dedup();

        let set = self.decode(params)?;
        Ok(set.contains_all(&mapped))
    }
}
