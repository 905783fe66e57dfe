//! Sorted-merge membership tests
//!
//! Both sides of a match are ascending sequences: the decoded filter values
//! (non-decreasing, since distinct elements can map to the same value) and
//! the mapped candidate set. A single forward pass over each side answers
//! membership without any per-query probing.

use crate::domain::slab::LaneValue;
use core::cmp::Ordering;

/// True if any candidate value appears in the filter.
///
/// `filter` and `candidates` must both be sorted ascending.
pub fn intersects<T: LaneValue>(filter: &[T], candidates: &[u64]) -> bool {
    let mut fi = 0;
    let mut ci = 0;
    while fi < filter.len() && ci < candidates.len() {
        match filter[fi].widen().cmp(&candidates[ci]) {
            Ordering::Equal => return true,
            Ordering::Less => fi += 1,
            Ordering::Greater => ci += 1,
        }
    }
    false
}

/// True if every candidate value appears in the filter.
///
/// An empty candidate set is trivially contained. Both slices must be
/// sorted ascending.
pub fn contains_all<T: LaneValue>(filter: &[T], candidates: &[u64]) -> bool {
    let mut fi = 0;
    let mut ci = 0;
    while fi < filter.len() && ci < candidates.len() {
        match filter[fi].widen().cmp(&candidates[ci]) {
            // Hold the filter cursor so repeated candidates re-match.
            Ordering::Equal => ci += 1,
            Ordering::Less => fi += 1,
            // The filter ran past this candidate without producing it.
            Ordering::Greater => return false,
        }
    }
    ci == candidates.len()
}
