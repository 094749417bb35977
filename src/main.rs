// netpulse - live terminal dashboard for network throughput and remote peers

mod cli;
mod dashboard;
mod graph;
mod provider;
mod rank;
mod series;
mod sink;
mod units;

use std::time::Duration;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use dashboard::{Dashboard, DashboardConfig};
use graph::GraphSymbols;
use provider::system::SystemProvider;
use sink::TerminalSink;

fn main() -> Result<()> {
    // Unknown or malformed flags abort with usage before any sampling starts.
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            err.print().ok();
            std::process::exit(code);
        }
    };

    init_tracing(args.debug);

    let tick_interval = Duration::from_millis(args.tick_interval_ms);
    let config = DashboardConfig {
        seconds: args.seconds,
        max_peers: args.max_peers,
        unit_base: args.size,
        symbols: GraphSymbols {
            rx: args.rx_symbol,
            tx: args.tx_symbol,
            both: args.both_symbol,
        },
        interface_index: args.interface_index,
        tick_interval,
    };

    let provider = SystemProvider::new(tick_interval);
    let sink = TerminalSink::new();

    Dashboard::new(config, provider, sink).run()
}

/// Logs go to stderr so composed frames own stdout. `--debug` raises the
/// default level; RUST_LOG still wins when set.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "netpulse=debug" } else { "netpulse=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
