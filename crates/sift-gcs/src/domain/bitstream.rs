//! Unaligned bit-level access to filter payloads
//!
//! Filter bodies are packed most-significant-bit-first with no padding
//! between codes; only the final byte carries padding bits. The reader is a
//! plain cursor (slice + absolute bit position), so each decode lane owns
//! its state outright and nothing is shared between lanes.

use crate::error::FilterError;

/// MSB-first cursor over a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Absolute bit position; bit 0 is the top bit of the first byte.
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bits left before the end of the slice.
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool, FilterError> {
        if self.remaining() == 0 {
            return Err(FilterError::TruncatedBitstream {
                at: self.pos,
                needed: 1,
            });
        }
        let byte = self.data[self.pos >> 3];
        let bit = (byte >> (7 - (self.pos & 7))) & 1;
        self.pos += 1;
        Ok(bit == 1)
    }

    /// Read `nbits` (at most 64) into the low bits of a u64, MSB-first.
    pub fn read_bits(&mut self, nbits: u8) -> Result<u64, FilterError> {
        debug_assert!(nbits <= 64);
        if self.remaining() < nbits as usize {
            return Err(FilterError::TruncatedBitstream {
                at: self.pos,
                needed: nbits as usize - self.remaining(),
            });
        }

        let mut out = 0u64;
        let mut left = nbits;
        while left > 0 {
            let byte = self.data[self.pos >> 3];
            let avail = 8 - (self.pos & 7) as u8;
            let take = left.min(avail);
            let chunk = (byte >> (avail - take)) & (((1u16 << take) - 1) as u8);
            out = (out << take) | chunk as u64;
            self.pos += take as usize;
            left -= take;
        }
        Ok(out)
    }
}

/// MSB-first bit accumulator; the final byte is zero-padded.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        let offset = self.bit_len & 7;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.bit_len += 1;
    }

    /// Append the low `nbits` of `value`, MSB-first.
    pub fn write_bits(&mut self, value: u64, nbits: u8) {
        debug_assert!(nbits <= 64);
        for i in (0..nbits).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    /// Finish the stream, zero-padding the final partial byte.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
