//! Per-filter SipHash keys
//!
//! Every filter is hashed under a key derived from the block it covers: the
//! first 16 bytes of the block hash, split into two little-endian 64-bit
//! words. The producer and this matcher must derive the identical key or
//! every range-mapped value diverges silently.
//!
//! Reference: BIP 158

use std::fmt;

/// 128-bit SipHash key for one filter.
///
/// Derived once per filter from a block-identifying value and owned by the
/// match call that carries it; it is never mutated afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pub(crate) k0: u64,
    pub(crate) k1: u64,
}

impl FilterKey {
    /// Construct from the two 64-bit key words.
    pub const fn from_words(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// Construct from a 16-byte key, little-endian per word.
    pub fn from_key_bytes(key: &[u8; 16]) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&key[0..8]);
        hi.copy_from_slice(&key[8..16]);
        Self {
            k0: u64::from_le_bytes(lo),
            k1: u64::from_le_bytes(hi),
        }
    }

    /// Derive the key for a filter from the hash of the block it covers
    /// (the first 16 bytes of the block hash).
    pub fn from_block_hash(block_hash: &[u8; 32]) -> Self {
        let mut key = [0u8; 16];
        key.copy_from_slice(&block_hash[0..16]);
        Self::from_key_bytes(&key)
    }

    /// The 16-byte wire form of the key.
    pub fn to_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..8].copy_from_slice(&self.k0.to_le_bytes());
        out[8..16].copy_from_slice(&self.k1.to_le_bytes());
        out
    }
}

impl fmt::Debug for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilterKey({})", hex::encode(self.to_bytes()))
    }
}
