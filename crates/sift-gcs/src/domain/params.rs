//! Golomb-Rice filter parameters
//!
//! A filter protocol fixes two constants: the remainder width `P` of each
//! Golomb-Rice code and the false-positive modulus `M`. The mapped value
//! domain for an `N`-element filter is `F = N * M`, giving a false-positive
//! probability of roughly `1 / M` per queried item.
//!
//! `P` and `M` are independent constants, not derived from one another: the
//! basic filter profile pairs `P = 19` with `M = 784931` (chosen close to
//! `1.497 * 2^P`, the bandwidth-optimal ratio).
//!
//! Reference: BIP 158

use crate::error::FilterError;
use serde::{Deserialize, Serialize};

/// Remainder width in bits for the basic filter profile.
pub const GOLOMB_RICE_P: u8 = 19;

/// False-positive modulus for the basic filter profile.
pub const FP_MODULUS_M: u64 = 784_931;

/// Widest remainder the codec accepts; beyond this the mapped domain could
/// not fit the 32-bit value slabs.
pub const MAX_GOLOMB_RICE_P: u8 = 32;

/// Protocol constants shared by the filter producer and this matcher.
///
/// Both sides must use identical values: any divergence changes the mapped
/// domain and surfaces as spurious mismatches rather than a detectable
/// decode failure, so parameters are validated once up front and then
/// treated as immutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Fixed low-order bits per Golomb-Rice code.
    pub p: u8,
    /// False-positive modulus; the mapped domain is `F = N * M`.
    pub m: u64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::bip158_basic()
    }
}

impl FilterParams {
    /// Basic filter profile: `P = 19`, `M = 784931`.
    pub const fn bip158_basic() -> Self {
        Self {
            p: GOLOMB_RICE_P,
            m: FP_MODULUS_M,
        }
    }

    /// Custom parameters for non-basic deployments.
    pub const fn new(p: u8, m: u64) -> Self {
        Self { p, m }
    }

    /// Reject parameter combinations no encoder could have used.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.p == 0 || self.p > MAX_GOLOMB_RICE_P {
            return Err(FilterError::ProtocolMismatch(format!(
                "remainder width {} outside 1..={}",
                self.p, MAX_GOLOMB_RICE_P
            )));
        }
        if self.m == 0 {
            return Err(FilterError::ProtocolMismatch(
                "false-positive modulus cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Size of the mapped value domain for an `n`-element filter: `F = n * M`.
    pub fn range_size(&self, n: u64) -> Result<u64, FilterError> {
        n.checked_mul(self.m).ok_or_else(|| {
            FilterError::ProtocolMismatch(format!(
                "mapped domain overflows: {} elements with modulus {}",
                n, self.m
            ))
        })
    }

    /// Largest unary quotient any well-formed code can carry for domain `f`.
    ///
    /// No delta between sorted values in `[0, F)` can exceed `F`, so a
    /// quotient above `F >> P` proves the bitstream corrupt without reading
    /// the rest of an unbounded unary run.
    pub fn quotient_bound(&self, f: u64) -> u64 {
        f >> self.p
    }

    /// Expected false-positive probability per queried item.
    pub fn false_positive_rate(&self) -> f64 {
        1.0 / self.m as f64
    }
}
