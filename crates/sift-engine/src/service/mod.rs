//! Service Layer
//!
//! Contains the application service that orchestrates domain logic
//! and coordinates with external dependencies via ports.

pub mod scan_service;

pub use scan_service::FilterScanService;
