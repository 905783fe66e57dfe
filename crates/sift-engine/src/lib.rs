//! # Sift Engine
//!
//! Lane-parallel scan engine that matches batches of compact block filters
//! against a watched script set.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure scan logic, no I/O
//!   - `EngineConfig`: Configuration with validation
//!   - `WatchItem` / `WatchSet`: watched scripts in fixed lane-record form
//!   - `MatchJob` / `MatchResult`: batch units and per-filter outcomes
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `FilterScanApi`: Driving port (inbound API)
//!   - `WatchSetProvider`: Driven port (watched script source)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `FilterScanService`: Implements `FilterScanApi`
//!
//! - **Dispatch** (`dispatch`): `BatchDispatcher`, Rayon fan-out of scan
//!   batches across worker lanes
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Batch results come back one per job, in job order
//! - **INVARIANT-2**: A malformed filter reports `Invalid` in its own slot
//!   and never disturbs the other jobs in the batch
//! - **INVARIANT-3**: Scans observe a single watch set for their whole
//!   duration; reloads only affect scans that start afterwards
//!
//! ## Usage Example
//!
//! ```ignore
//! use sift_engine::{FilterScanApi, FilterScanService, MatchJob};
//! use std::sync::Arc;
//!
//! let service = FilterScanService::new(Arc::new(wallet));
//! service.reload_watch_set().await?;
//!
//! let results = service.scan_batch(&jobs);
//! for (height, result) in heights.iter().zip(&results) {
//!     if result.is_match() {
//!         fetch_block(*height);
//!     }
//! }
//! ```

pub mod dispatch;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use dispatch::BatchDispatcher;
pub use domain::{EngineConfig, MatchJob, MatchResult, WatchItem, WatchSet, MAX_WATCH_ITEM_BYTES};
pub use error::{EngineError, ProviderError};
pub use metrics::{Metrics, MetricsSnapshot};
pub use ports::{FilterScanApi, WatchSetProvider};
pub use service::FilterScanService;

// The filter primitives most callers need alongside the engine
pub use sift_gcs::{EncodedFilter, FilterError, FilterKey, FilterParams};
