// Metrics acquisition boundary
//
// The dashboard never performs network or OS queries itself; it consumes
// per-tick snapshots from a MetricsProvider. The production implementation
// lives in `system`; tests script their own providers.

pub mod system;

use thiserror::Error;

/// The metrics source could not be queried this tick. Recovered locally:
/// the tick is skipped and the loop keeps running.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("interface index {index} out of range ({available} interfaces present)")]
    InterfaceNotFound { index: usize, available: usize },

    #[error("metrics source unavailable: {0}")]
    Unavailable(String),
}

/// Per-tick throughput snapshot for one interface.
#[derive(Debug, Clone)]
pub struct InterfaceStats {
    pub name: String,
    /// Cumulative bytes since the interface came up.
    pub total_rx_bytes: u64,
    pub total_tx_bytes: u64,
    /// Bytes/second over the last sampling interval.
    pub rx_rate: u64,
    pub tx_rate: u64,
}

/// One connection row as reported by the metrics source.
///
/// Rates may be absent (not every source can attribute throughput to a
/// single connection); absence is normalized to 0 exactly once, at the
/// dashboard's ingestion boundary, never scattered through consumers.
#[derive(Debug, Clone)]
pub struct RawConnection {
    pub peer_address: String,
    pub tx_rate: Option<u64>,
    pub rx_rate: Option<u64>,
    pub pid: Option<u32>,
}

/// Supplies one snapshot per tick. The only I/O-bound step in the loop.
pub trait MetricsProvider {
    /// Throughput counters and rates for the interface at `interface_index`.
    fn interface_stats(&mut self, interface_index: usize)
        -> Result<InterfaceStats, ProviderError>;

    /// All currently observed connections, local and remote alike; the
    /// ranker filters non-routable peers downstream.
    fn active_connections(&mut self) -> Result<Vec<RawConnection>, ProviderError>;
}
