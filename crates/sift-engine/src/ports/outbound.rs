//! Outbound Ports (Driven Ports)
//!
//! These traits define dependencies that the scan engine needs from the
//! surrounding node, typically the wallet or address registry that knows
//! which scripts to watch.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Watched script source (Driven Port)
///
/// The engine never interprets the scripts it is given; it only hashes
/// them. Providers stay free to watch raw scripts, script hashes, or any
/// other byte form the filters were built from.
#[async_trait]
pub trait WatchSetProvider: Send + Sync {
    /// The full list of scripts to watch, replacing any previous set.
    async fn watched_scripts(&self) -> Result<Vec<Vec<u8>>, ProviderError>;
}
