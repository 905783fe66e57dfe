//! Domain Layer - Scan engine business logic
//!
//! This layer contains:
//! - Engine configuration with validation
//! - Watch items and watch sets in lane-record form
//! - Batch scan jobs and per-filter outcomes
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod config;
pub mod job;
pub mod watch;

pub use config::EngineConfig;
pub use job::{MatchJob, MatchResult};
pub use watch::{WatchItem, WatchSet, MAX_WATCH_ITEM_BYTES};
