// Dashboard state and driving loop
//
// One tick: pull a snapshot from the metrics provider, feed both rate
// series, rank the peer list, render the graph, and hand one composed text
// frame to the output sink. Ticks are strictly serialized on one thread, so
// the series stay single-writer with no locking.

mod frame;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, warn};

use crate::graph::{GraphRenderer, GraphSymbols};
use crate::provider::{MetricsProvider, RawConnection};
use crate::rank::{ConnectionRecord, ConnectionRanker};
use crate::series::BoundedSeries;
use crate::sink::FrameSink;

/// Runtime configuration distilled from the CLI flags.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Window width in samples (seconds of history).
    pub seconds: usize,
    pub max_peers: i64,
    /// Unit conversion base for all displayed magnitudes.
    pub unit_base: u64,
    pub symbols: GraphSymbols,
    pub interface_index: usize,
    pub tick_interval: Duration,
}

/// The only state carried across ticks: both rate histories, owned by the
/// dashboard value. Two dashboards never share history.
#[derive(Debug)]
struct DashboardState {
    rx_series: BoundedSeries,
    tx_series: BoundedSeries,
}

impl DashboardState {
    fn new(window_size: usize) -> Self {
        Self {
            rx_series: BoundedSeries::new(window_size),
            tx_series: BoundedSeries::new(window_size),
        }
    }
}

pub struct Dashboard<P: MetricsProvider, S: FrameSink> {
    config: DashboardConfig,
    state: DashboardState,
    renderer: GraphRenderer,
    ranker: ConnectionRanker,
    provider: P,
    sink: S,
}

impl<P: MetricsProvider, S: FrameSink> Dashboard<P, S> {
    pub fn new(config: DashboardConfig, provider: P, sink: S) -> Self {
        let renderer = GraphRenderer::new(config.symbols, config.unit_base);
        let ranker = ConnectionRanker::with_default_prefixes(config.max_peers);
        let state = DashboardState::new(config.seconds);
        Self {
            config,
            state,
            renderer,
            ranker,
            provider,
            sink,
        }
    }

    /// Runs the sampling loop until the process is terminated externally.
    ///
    /// A tick that outlives the interval simply starts the next one late;
    /// ticks never overlap.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let started = Instant::now();
            self.tick()?;
            if let Some(remaining) = self.config.tick_interval.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
    }

    /// One sampling/render cycle.
    ///
    /// Both snapshots are fetched before any state is touched: a provider
    /// failure skips the whole tick (no partial render, no partial history)
    /// and the loop carries on. Render and sink failures propagate.
    pub fn tick(&mut self) -> Result<()> {
        let stats = match self.provider.interface_stats(self.config.interface_index) {
            Ok(stats) => stats,
            Err(err) => {
                warn!(error = %err, "interface stats unavailable, skipping tick");
                return Ok(());
            }
        };
        let raw_connections = match self.provider.active_connections() {
            Ok(connections) => connections,
            Err(err) => {
                warn!(error = %err, "connection list unavailable, skipping tick");
                return Ok(());
            }
        };

        // Both series always advance together; the renderer's length check
        // exists to catch a violation of exactly this discipline.
        self.state.rx_series.append(stats.rx_rate);
        self.state.tx_series.append(stats.tx_rate);

        let ranked = self.ranker.rank(normalize(raw_connections));
        let grid = self.renderer.render(&self.state.rx_series, &self.state.tx_series)?;
        let graph_lines = self.renderer.render_lines(&grid);

        debug!(
            rx_window = ?self.state.rx_series.window().collect::<Vec<_>>(),
            tx_window = ?self.state.tx_series.window().collect::<Vec<_>>(),
            peers = ranked.len(),
            "tick sampled"
        );

        let frame = frame::compose(
            &stats,
            &self.state.rx_series,
            &self.state.tx_series,
            &graph_lines,
            &ranked,
            self.config.unit_base,
        );
        self.sink.present(&frame)?;
        Ok(())
    }
}

/// Ingestion boundary: absent rates become 0 here, once, so every consumer
/// downstream sees plain numbers.
fn normalize(raw: Vec<RawConnection>) -> Vec<ConnectionRecord> {
    raw.into_iter()
        .map(|connection| ConnectionRecord {
            peer_address: connection.peer_address,
            tx_rate: connection.tx_rate.unwrap_or(0),
            rx_rate: connection.rx_rate.unwrap_or(0),
            pid: connection.pid,
        })
        .collect()
}
