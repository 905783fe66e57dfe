//! Keyed hashing and range mapping
//!
//! Every element is hashed with SipHash-2-4 under the filter's key, then
//! mapped into the filter's value domain `[0, F)` with a multiply-shift.
//! Both steps must match the producer bit-for-bit: an altered round count or
//! a modulo-based mapping derives different values and turns into silent
//! false negatives, the one failure mode this design cannot tolerate.
//!
//! Reference: BIP 158

use core::hash::Hasher;

use siphasher::sip::SipHasher24;

use crate::domain::key::FilterKey;

/// 64-bit SipHash-2-4 of `data` under `key`.
///
/// Deterministic and uniform over `[0, 2^64)`; no input length or alignment
/// restriction. Read-only over the key, so lanes may call it concurrently.
pub fn siphash(key: &FilterKey, data: &[u8]) -> u64 {
    let mut hasher = SipHasher24::new_with_keys(key.k0, key.k1);
    hasher.write(data);
    hasher.finish()
}

/// Map a 64-bit hash uniformly onto `[0, f)`.
///
/// This is `floor(hash * f / 2^64)` over a 128-bit intermediate, NOT
/// `hash % f`: the multiply-shift keeps the distribution unbiased and is
/// what the filter producer uses.
pub fn map_to_range(hash: u64, f: u64) -> u64 {
    ((hash as u128 * f as u128) >> 64) as u64
}

/// Hash `data` and map it into an `f`-sized domain in one step.
pub fn hash_to_range(key: &FilterKey, f: u64, data: &[u8]) -> u64 {
    map_to_range(siphash(key, data), f)
}
