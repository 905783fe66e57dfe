//! Compact-size element count prefix
//!
//! The wire form of a filter starts with its element count `N` encoded as a
//! Bitcoin compact-size integer: one direct byte below 0xFD, otherwise a
//! marker byte followed by a little-endian u16/u32/u64. Decoding enforces
//! minimal encoding; a count that could have been written shorter is
//! non-canonical and rejected, never reinterpreted.

use crate::error::FilterError;

/// Read a compact-size integer from the front of `data`.
///
/// Returns the value and the number of bytes consumed.
pub fn read_compact_size(data: &[u8]) -> Result<(u64, usize), FilterError> {
    let first = *data.first().ok_or(FilterError::TruncatedCountPrefix)?;
    match first {
        0x00..=0xFC => Ok((first as u64, 1)),
        0xFD => {
            if data.len() < 3 {
                return Err(FilterError::TruncatedCountPrefix);
            }
            let value = u16::from_le_bytes([data[1], data[2]]) as u64;
            if value < 0xFD {
                return Err(FilterError::NonMinimalCountPrefix);
            }
            Ok((value, 3))
        }
        0xFE => {
            if data.len() < 5 {
                return Err(FilterError::TruncatedCountPrefix);
            }
            let value = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as u64;
            if value <= u16::MAX as u64 {
                return Err(FilterError::NonMinimalCountPrefix);
            }
            Ok((value, 5))
        }
        0xFF => {
            if data.len() < 9 {
                return Err(FilterError::TruncatedCountPrefix);
            }
            let value = u64::from_le_bytes([
                data[1], data[2], data[3], data[4], data[5], data[6], data[7], data[8],
            ]);
            if value <= u32::MAX as u64 {
                return Err(FilterError::NonMinimalCountPrefix);
            }
            Ok((value, 9))
        }
    }
}

/// Append the minimal compact-size encoding of `value` to `out`.
pub fn write_compact_size(out: &mut Vec<u8>, value: u64) {
    if value < 0xFD {
        out.push(value as u8);
    } else if value <= u16::MAX as u64 {
        out.push(0xFD);
        out.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= u32::MAX as u64 {
        out.push(0xFE);
        out.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        out.push(0xFF);
        out.extend_from_slice(&value.to_le_bytes());
    }
}
