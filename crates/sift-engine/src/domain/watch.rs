//! Watched script set and its fixed-width lane records

use sift_gcs::{hash_to_range, FilterKey};

use crate::error::EngineError;

/// Payload capacity of one watch item.
///
/// Items are stored as 40-byte lane records, one length byte plus this
/// payload, so a batch of them lays out contiguously for the scan lanes.
/// Standard output scripts fit; anything longer is rejected up front.
pub const MAX_WATCH_ITEM_BYTES: usize = 39;

/// One watched script in lane-record form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WatchItem {
    data: [u8; MAX_WATCH_ITEM_BYTES],
    len: u8,
}

impl WatchItem {
    /// Copy a script into a lane record; rejects oversized scripts.
    pub fn new(script: &[u8]) -> Result<Self, EngineError> {
        if script.len() > MAX_WATCH_ITEM_BYTES {
            return Err(EngineError::WatchItemTooLong {
                len: script.len(),
                max: MAX_WATCH_ITEM_BYTES,
            });
        }
        let mut data = [0u8; MAX_WATCH_ITEM_BYTES];
        data[..script.len()].copy_from_slice(script);
        Ok(Self {
            data,
            len: script.len() as u8,
        })
    }

    /// The script bytes, without the record padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl core::fmt::Debug for WatchItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "WatchItem({})", hex::encode(self.as_bytes()))
    }
}

/// The set of scripts every filter in a batch is scanned for.
#[derive(Clone, Debug, Default)]
pub struct WatchSet {
    items: Vec<WatchItem>,
}

impl WatchSet {
    /// A watch set with nothing in it; every scan reports no match.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a watch set from raw scripts.
    ///
    /// Empty scripts carry no information and are skipped, matching how
    /// filters themselves exclude empty pushes at build time.
    pub fn from_scripts<I>(scripts: I) -> Result<Self, EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut items = Vec::new();
        for script in scripts {
            let script = script.as_ref();
            if script.is_empty() {
                continue;
            }
            items.push(WatchItem::new(script)?);
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[WatchItem] {
        &self.items
    }

    /// Map every item into the filter domain `[0, f)` and sort ascending,
    /// ready for a merge against a decoded filter.
    pub fn candidates(&self, key: &FilterKey, f: u64) -> Vec<u64> {
        let mut mapped: Vec<u64> = self
            .items
            .iter()
            .map(|item| hash_to_range(key, f, item.as_bytes()))
            .collect();
        mapped.sort_unstable();
        mapped
    }
}
