//! Integration Suites
//!
//! Engine-level flows exercised through the public `FilterScanApi` port,
//! with filters built by the real encoder rather than canned bytes.

pub mod scan_flows;
