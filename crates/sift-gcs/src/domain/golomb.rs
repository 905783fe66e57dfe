//! Golomb-Rice codes
//!
//! Each delta between consecutive sorted filter values is carried as a unary
//! quotient (one-bits closed by a zero bit) followed by `P` fixed low-order
//! remainder bits. Values follow a geometric-like distribution, which is
//! exactly where this code is near-optimal.
//!
//! Reference: BIP 158

use crate::domain::bitstream::{BitReader, BitWriter};
use crate::error::FilterError;

/// Decode one Golomb-Rice code.
///
/// `bound` caps the unary quotient: a quotient above it cannot belong to any
/// well-formed filter (see [`FilterParams::quotient_bound`]) and is rejected
/// before a hostile input can walk the reader through an unbounded run of
/// one-bits. `index` only labels the error.
///
/// [`FilterParams::quotient_bound`]: crate::domain::params::FilterParams::quotient_bound
pub(crate) fn read_golomb_rice(
    reader: &mut BitReader<'_>,
    p: u8,
    bound: u64,
    index: usize,
) -> Result<u64, FilterError> {
    let mut quotient = 0u64;
    while reader.read_bit()? {
        quotient += 1;
        if quotient > bound {
            return Err(FilterError::UnaryRunTooLong { index, bound });
        }
    }
    let remainder = reader.read_bits(p)?;
    Ok((quotient << p) | remainder)
}

/// Encode one delta as a Golomb-Rice code.
pub(crate) fn write_golomb_rice(writer: &mut BitWriter, delta: u64, p: u8) {
    let quotient = delta >> p;
    for _ in 0..quotient {
        writer.write_bit(true);
    }
    writer.write_bit(false);
    writer.write_bits(delta & ((1u64 << p) - 1), p);
}
