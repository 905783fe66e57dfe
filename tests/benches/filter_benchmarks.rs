//! # Blocksift Filter Benchmarks
//!
//! Performance checks for the hot paths:
//!
//! | Area | Claim | Target |
//! |------|-------|--------|
//! | Encode | Golomb-Rice build, 4096 elements | < 5ms |
//! | Decode | Strict decode, 4096 elements | < 2ms |
//! | Match | Single filter vs 100-item watch | < 1ms |
//! | Batch | 256 filters across all lanes | scales with cores |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use sift_engine::{BatchDispatcher, EngineConfig, MatchJob, WatchSet};
use sift_gcs::{FilterBuilder, FilterParams};
use sift_tests::fixtures::{block_key, build_filter, random_scripts, test_key};

// ============================================================================
// Encode: element set to wire bytes
// ============================================================================

fn bench_filter_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter-encode");
    group.measurement_time(Duration::from_secs(10));

    let mut rng = rand::thread_rng();
    for size in [256usize, 1024, 4096] {
        let scripts = random_scripts(&mut rng, size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &scripts, |b, scripts| {
            b.iter(|| {
                let mut builder = FilterBuilder::new(test_key(), FilterParams::bip158_basic());
                for script in scripts {
                    builder.add_element(script);
                }
                black_box(builder.build().unwrap())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Decode and match: wire bytes back to a scan decision
// ============================================================================

fn bench_filter_decode_and_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter-decode");
    group.measurement_time(Duration::from_secs(10));

    let mut rng = rand::thread_rng();
    let params = FilterParams::bip158_basic();
    let key = test_key();

    for size in [256usize, 1024, 4096] {
        let scripts = random_scripts(&mut rng, size);
        let filter = build_filter(&key, &scripts);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("decode", size), &filter, |b, filter| {
            b.iter(|| black_box(filter.decode(&params).unwrap()))
        });
    }

    // A realistic wallet-sized probe against a mid-sized filter.
    let scripts = random_scripts(&mut rng, 1024);
    let filter = build_filter(&key, &scripts);
    let watch: Vec<Vec<u8>> = scripts.iter().take(100).cloned().collect();

    group.bench_function("match_any_100_queries", |b| {
        b.iter(|| {
            let queries = watch.iter().map(|s| s.as_slice());
            black_box(filter.match_any(&key, &params, queries).unwrap())
        })
    });

    group.finish();
}

// ============================================================================
// Batch dispatch: many filters across the worker lanes
// ============================================================================

fn bench_batch_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch-dispatch");
    group.measurement_time(Duration::from_secs(10));

    let mut rng = rand::thread_rng();
    let dispatcher = BatchDispatcher::new(&EngineConfig::default());

    let watch_scripts = random_scripts(&mut rng, 100);
    let watch = WatchSet::from_scripts(watch_scripts.iter().map(|s| s.as_slice())).unwrap();

    for batch in [16usize, 64, 256] {
        let jobs: Vec<MatchJob> = (0..batch)
            .map(|height| {
                let key = block_key(height as u64);
                let mut elements = random_scripts(&mut rng, 255);
                // Every eighth block contains one watched script.
                if height % 8 == 0 {
                    elements.push(watch_scripts[0].clone());
                }
                MatchJob::new(key, build_filter(&key, &elements))
            })
            .collect();

        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("dispatch", batch), &jobs, |b, jobs| {
            b.iter(|| black_box(dispatcher.dispatch(&watch, jobs)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_encode,
    bench_filter_decode_and_match,
    bench_batch_dispatch
);
criterion_main!(benches);
