// System-backed metrics provider
//
// Interface throughput comes from sysinfo's network counters; the peer list
// comes from the kernel TCP socket table via netstat2. Read-only operations,
// never modifies system state.

use std::time::Duration;

use netstat2::{get_sockets_info, AddressFamilyFlags, ProtocolFlags, ProtocolSocketInfo};
use sysinfo::Networks;

use super::{InterfaceStats, MetricsProvider, ProviderError, RawConnection};

/// Production provider querying the local OS.
pub struct SystemProvider {
    networks: Networks,
    tick_interval: Duration,
}

impl SystemProvider {
    /// `tick_interval` is the sampling cadence; per-tick byte deltas are
    /// scaled by it to produce bytes/second rates.
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
            tick_interval,
        }
    }

    fn per_second(&self, delta_bytes: u64) -> u64 {
        let secs = self.tick_interval.as_secs_f64();
        if secs <= 0.0 {
            return delta_bytes;
        }
        (delta_bytes as f64 / secs) as u64
    }
}

impl MetricsProvider for SystemProvider {
    fn interface_stats(
        &mut self,
        interface_index: usize,
    ) -> Result<InterfaceStats, ProviderError> {
        self.networks.refresh(true);

        // sysinfo hands interfaces back in map order; sort by name so a
        // configured index stays stable across ticks and platforms.
        let mut interfaces: Vec<_> = self.networks.iter().collect();
        interfaces.sort_by(|a, b| a.0.cmp(b.0));

        let available = interfaces.len();
        let (name, data) = interfaces
            .into_iter()
            .nth(interface_index)
            .ok_or(ProviderError::InterfaceNotFound {
                index: interface_index,
                available,
            })?;

        Ok(InterfaceStats {
            name: name.to_string(),
            total_rx_bytes: data.total_received(),
            total_tx_bytes: data.total_transmitted(),
            rx_rate: self.per_second(data.received()),
            tx_rate: self.per_second(data.transmitted()),
        })
    }

    fn active_connections(&mut self) -> Result<Vec<RawConnection>, ProviderError> {
        let af_flags = AddressFamilyFlags::IPV4 | AddressFamilyFlags::IPV6;
        let proto_flags = ProtocolFlags::TCP;

        let sockets = get_sockets_info(af_flags, proto_flags)
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let mut connections = Vec::with_capacity(sockets.len());
        for socket in sockets {
            if let ProtocolSocketInfo::Tcp(tcp) = &socket.protocol_socket_info {
                connections.push(RawConnection {
                    peer_address: tcp.remote_addr.to_string(),
                    // The kernel socket table carries no per-connection
                    // throughput; absent rates normalize to 0 downstream.
                    tx_rate: None,
                    rx_rate: None,
                    pid: socket.associated_pids.first().copied(),
                });
            }
        }

        Ok(connections)
    }
}
