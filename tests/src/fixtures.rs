//! Shared test fixtures
//!
//! Deterministic keys, prebuilt filters, and mock watch set providers used
//! by the integration suites and the benchmarks.

use async_trait::async_trait;
use rand::Rng;

use sift_engine::{EncodedFilter, FilterKey, FilterParams, ProviderError, WatchSetProvider};
use sift_gcs::FilterBuilder;

/// Fixed key for tests that only need one.
pub fn test_key() -> FilterKey {
    let mut bytes = [0u8; 16];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    FilterKey::from_key_bytes(&bytes)
}

/// Key derived the production way, from a synthetic block hash.
pub fn block_key(height: u64) -> FilterKey {
    let mut hash = [0u8; 32];
    hash[..8].copy_from_slice(&height.to_le_bytes());
    FilterKey::from_block_hash(&hash)
}

/// Build a filter over `elements` under the standard parameters.
pub fn build_filter(key: &FilterKey, elements: &[Vec<u8>]) -> EncodedFilter {
    let mut builder = FilterBuilder::new(*key, FilterParams::bip158_basic());
    for element in elements {
        builder.add_element(element);
    }
    builder.build().expect("fixture filter must build")
}

/// Random scripts sized like real output scripts, within lane-record bounds.
pub fn random_scripts<R: Rng>(rng: &mut R, count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(20..=39);
            (0..len).map(|_| rng.gen()).collect()
        })
        .collect()
}

/// Watch set provider serving a fixed script list
pub struct StaticWatchProvider {
    scripts: Vec<Vec<u8>>,
}

impl StaticWatchProvider {
    pub fn new(scripts: Vec<Vec<u8>>) -> Self {
        Self { scripts }
    }
}

#[async_trait]
impl WatchSetProvider for StaticWatchProvider {
    async fn watched_scripts(&self) -> Result<Vec<Vec<u8>>, ProviderError> {
        Ok(self.scripts.clone())
    }
}

/// Provider that always fails, for error path tests
pub struct FailingWatchProvider;

#[async_trait]
impl WatchSetProvider for FailingWatchProvider {
    async fn watched_scripts(&self) -> Result<Vec<Vec<u8>>, ProviderError> {
        Err(ProviderError::Unavailable(
            "watch registry offline".to_string(),
        ))
    }
}
