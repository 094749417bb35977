// Connection filtering, deduplication, and ranking

use std::collections::HashSet;

/// Address prefixes excluded from the peer list: loopback, the RFC 1918
/// private ranges the dashboard cares about, the unspecified address, and
/// the leading token of IPv6/link-local forms. This is a plain prefix test,
/// not CIDR parsing.
pub const DEFAULT_LOCAL_PREFIXES: [&str; 5] = ["127.", "192.168.", "10.", "0.0.0.0", ":"];

/// One remote endpoint observed at one tick. Rates are bytes/second,
/// already normalized (absent rates become 0 at the ingestion boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub peer_address: String,
    pub tx_rate: u64,
    pub rx_rate: u64,
    pub pid: Option<u32>,
}

impl ConnectionRecord {
    /// Combined throughput used for ranking.
    fn traffic(&self) -> u64 {
        self.tx_rate.saturating_add(self.rx_rate)
    }
}

/// Filters, deduplicates, and ranks raw connection snapshots into a bounded
/// top-K list. Recomputed from scratch every tick; no carried state.
pub struct ConnectionRanker {
    local_prefixes: Vec<String>,
    max_peers: i64,
}

impl ConnectionRanker {
    pub fn new(local_prefixes: Vec<String>, max_peers: i64) -> Self {
        Self {
            local_prefixes,
            max_peers,
        }
    }

    pub fn with_default_prefixes(max_peers: i64) -> Self {
        Self::new(
            DEFAULT_LOCAL_PREFIXES.iter().map(|p| p.to_string()).collect(),
            max_peers,
        )
    }

    /// Produces at most `max_peers` records, sorted descending by combined
    /// rate with ties kept in encounter order.
    ///
    /// Duplicates share the full `(peer_address, tx_rate, rx_rate)` key: a
    /// re-observed identical reading collapses, while the same peer at a
    /// changed rate stays distinct. The first-encountered record per key
    /// wins. `max_peers <= 0` yields an empty list, not an error.
    pub fn rank(&self, raw: Vec<ConnectionRecord>) -> Vec<ConnectionRecord> {
        if self.max_peers <= 0 {
            return Vec::new();
        }

        let mut seen: HashSet<(String, u64, u64)> = HashSet::new();
        let mut unique: Vec<ConnectionRecord> = Vec::new();
        for record in raw {
            if self.is_local(&record.peer_address) {
                continue;
            }
            let key = (record.peer_address.clone(), record.tx_rate, record.rx_rate);
            if seen.insert(key) {
                unique.push(record);
            }
        }

        // sort_by is stable, preserving encounter order for equal sums
        unique.sort_by(|a, b| b.traffic().cmp(&a.traffic()));
        unique.truncate(self.max_peers as usize);
        unique
    }

    fn is_local(&self, address: &str) -> bool {
        self.local_prefixes
            .iter()
            .any(|prefix| address.starts_with(prefix.as_str()))
    }
}
