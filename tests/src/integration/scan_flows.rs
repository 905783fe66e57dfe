//! # Scan Flow Integration Tests
//!
//! End-to-end flows through the `FilterScanApi` port: watch sets are pulled
//! from a provider, filters are built by the real encoder under per-block
//! keys, and batches come back in job order.
//!
//! ## Flows Tested:
//!
//! 1. **Reload → batch scan**: provider scripts drive match decisions
//! 2. **Key discipline**: the same filter bytes stop matching under a
//!    different key
//! 3. **Watch set churn**: a reload replaces the previous set atomically

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sift_engine::{EngineConfig, EngineError, FilterScanApi, FilterScanService, MatchJob};

    use crate::fixtures::{block_key, build_filter, FailingWatchProvider, StaticWatchProvider};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn watched_scripts() -> Vec<Vec<u8>> {
        vec![
            b"wallet-script-one".to_vec(),
            b"wallet-script-two".to_vec(),
            b"wallet-script-three".to_vec(),
        ]
    }

    fn service_with_watch() -> FilterScanService<StaticWatchProvider> {
        FilterScanService::new(Arc::new(StaticWatchProvider::new(watched_scripts())))
    }

    // =============================================================================
    // INTEGRATION TESTS: RELOAD → BATCH SCAN
    // =============================================================================

    /// Test the full flow: provider reload, filter build, ordered batch scan
    #[tokio::test]
    async fn test_reload_then_batch_scan_end_to_end() {
        let service = service_with_watch();
        let installed = service.reload_watch_set().await.unwrap();
        assert_eq!(installed, 3);

        // Five "blocks": the watched script appears in blocks 0, 2, and 4.
        let jobs: Vec<MatchJob> = (0u64..5)
            .map(|height| {
                let key = block_key(height);
                let elements = if height % 2 == 0 {
                    vec![b"wallet-script-two".to_vec(), b"unrelated".to_vec()]
                } else {
                    vec![b"nothing-watched".to_vec(), b"unrelated".to_vec()]
                };
                MatchJob::new(key, build_filter(&key, &elements))
            })
            .collect();

        let results = service.scan_batch(&jobs);
        assert_eq!(results.len(), 5);
        for (height, result) in results.iter().enumerate() {
            assert_eq!(
                result.is_match(),
                height % 2 == 0,
                "block {} reported the wrong outcome",
                height
            );
        }

        let snapshot = service.metrics();
        assert_eq!(snapshot.watch_reloads, 1);
        assert_eq!(snapshot.batches_dispatched, 1);
        assert_eq!(snapshot.jobs_processed, 5);
        assert_eq!(snapshot.jobs_matched, 3);
        assert_eq!(snapshot.jobs_invalid, 0);
    }

    /// Test that a reload failure leaves the service usable with its old set
    #[tokio::test]
    async fn test_provider_failure_surfaces_and_keeps_old_set() {
        let service = FilterScanService::new(Arc::new(FailingWatchProvider));

        let result = service.reload_watch_set().await;
        assert!(matches!(result, Err(EngineError::Provider(_))));

        // Nothing was ever installed, so scans see an empty watch set.
        let key = block_key(9);
        let job = MatchJob::new(key, build_filter(&key, &watched_scripts()));
        assert!(!service.scan(&job).unwrap());
    }

    // =============================================================================
    // INTEGRATION TESTS: KEY DISCIPLINE
    // =============================================================================

    /// Test that filter bytes only match under the key they were built with
    #[tokio::test]
    async fn test_scan_requires_matching_key() {
        let service = service_with_watch();
        service.reload_watch_set().await.unwrap();

        let built_key = block_key(1);
        let filter = build_filter(&built_key, &watched_scripts());

        let right = MatchJob::new(built_key, filter.clone());
        assert!(service.scan(&right).unwrap());

        // Same bytes, different key: the mapped domains no longer line up.
        let wrong = MatchJob::new(block_key(2), filter);
        assert!(!service.scan(&wrong).unwrap());
    }

    // =============================================================================
    // INTEGRATION TESTS: WATCH SET CHURN
    // =============================================================================

    /// Test that installing a new set replaces the old one for later scans
    #[tokio::test]
    async fn test_install_swaps_watched_scripts() {
        let service = service_with_watch();
        service.reload_watch_set().await.unwrap();

        let key = block_key(3);
        let job = MatchJob::new(key, build_filter(&key, &[b"wallet-script-one".to_vec()]));
        assert!(service.scan(&job).unwrap());

        let installed = service
            .install_watch_items([b"completely-different".as_slice()])
            .unwrap();
        assert_eq!(installed, 1);
        assert!(
            !service.scan(&job).unwrap(),
            "old script must not match after the swap"
        );
    }

    /// Test that an empty watch set is valid and yields no matches at all
    #[tokio::test]
    async fn test_empty_watch_set_is_valid() {
        let service = FilterScanService::new(Arc::new(StaticWatchProvider::new(Vec::new())));
        let installed = service.reload_watch_set().await.unwrap();
        assert_eq!(installed, 0);

        let key = block_key(4);
        let jobs = vec![
            MatchJob::new(key, build_filter(&key, &watched_scripts())),
            // With nothing watched the body is never decoded, so even a
            // mangled filter scans as a clean no-match.
            MatchJob::new(key, sift_engine::EncodedFilter::from_bytes(vec![0x01])),
        ];

        let results = service.scan_batch(&jobs);
        assert!(results.iter().all(|r| !r.is_match() && !r.is_invalid()));
    }

    // =============================================================================
    // INTEGRATION TESTS: LANE RECORD BOUNDS
    // =============================================================================

    /// Test a watch script at the exact lane-record capacity end to end
    #[tokio::test]
    async fn test_watch_item_at_lane_capacity_matches() {
        let full_width = vec![0xA5u8; 39];
        let service = FilterScanService::new(Arc::new(StaticWatchProvider::new(vec![
            full_width.clone(),
        ])));
        service.reload_watch_set().await.unwrap();

        let key = block_key(5);
        let job = MatchJob::new(
            key,
            build_filter(&key, &[full_width, b"padding-element".to_vec()]),
        );
        assert!(service.scan(&job).unwrap());
    }

    /// Test that an oversized provider script fails the reload loudly
    #[tokio::test]
    async fn test_oversized_watch_script_rejected_on_reload() {
        let service = FilterScanService::new(Arc::new(StaticWatchProvider::new(vec![
            vec![0x00u8; 40],
        ])));

        let result = service.reload_watch_set().await;
        assert!(matches!(
            result,
            Err(EngineError::WatchItemTooLong { len: 40, max: 39 })
        ));
    }

    /// Test that the configured watch set limit is enforced on reload
    #[tokio::test]
    async fn test_watch_set_limit_enforced_on_reload() {
        let provider = Arc::new(StaticWatchProvider::new(watched_scripts()));
        let config = EngineConfig::default().with_max_watch_items(2);
        let service = FilterScanService::with_config(provider, config).unwrap();

        let result = service.reload_watch_set().await;
        assert!(matches!(
            result,
            Err(EngineError::WatchSetTooLarge { count: 3, max: 2 })
        ));
    }
}
