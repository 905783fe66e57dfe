//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for external callers
//! - Driven Ports (outbound) - Dependencies on the surrounding node

pub mod inbound;
pub mod outbound;

pub use inbound::FilterScanApi;
pub use outbound::WatchSetProvider;
