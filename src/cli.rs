// Command-line flag surface
//
// Thin outer layer: configuration errors abort with usage before any
// sampling starts. Core modules never look at argv or call process exit.

use clap::{ArgAction, Parser};

/// Live terminal dashboard for network throughput and remote peers.
#[derive(Debug, Parser)]
#[command(name = "netpulse", version, about)]
pub struct Args {
    /// Enable debug logging (--debug or --debug=true)
    #[arg(
        long,
        default_value_t = false,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub debug: bool,

    /// Maximum number of peers displayed (0 or less hides the list)
    #[arg(long = "maxPeers", default_value_t = 10)]
    pub max_peers: i64,

    /// Seconds of history shown on the graph
    #[arg(long, default_value_t = 30, value_parser = parse_window_seconds)]
    pub seconds: usize,

    /// Unit conversion base (1000 for SI units, 1024 for binary)
    #[arg(long = "size", default_value_t = 1000, value_parser = parse_unit_base)]
    pub size: u64,

    /// Symbol drawn for receive-only cells
    #[arg(long = "rxSymbol", default_value_t = '@')]
    pub rx_symbol: char,

    /// Symbol drawn for transmit-only cells
    #[arg(long = "txSymbol", default_value_t = '#')]
    pub tx_symbol: char,

    /// Symbol drawn when both rates clear a row's threshold
    #[arg(long = "bothSymbol", default_value_t = '*')]
    pub both_symbol: char,

    /// Index of the monitored interface (interfaces sorted by name)
    #[arg(long = "interfaceIndex", default_value_t = 0)]
    pub interface_index: usize,

    /// Sampling interval in milliseconds
    #[arg(long = "tickIntervalMs", default_value_t = 1000, value_parser = parse_interval_ms)]
    pub tick_interval_ms: u64,
}

fn parse_window_seconds(raw: &str) -> Result<usize, String> {
    let seconds: usize = raw.parse().map_err(|_| format!("invalid seconds: {raw}"))?;
    if seconds == 0 {
        return Err("seconds must be at least 1".to_string());
    }
    Ok(seconds)
}

fn parse_unit_base(raw: &str) -> Result<u64, String> {
    let base: u64 = raw.parse().map_err(|_| format!("invalid size: {raw}"))?;
    if base < 2 {
        return Err("size must be at least 2".to_string());
    }
    Ok(base)
}

fn parse_interval_ms(raw: &str) -> Result<u64, String> {
    let interval: u64 = raw.parse().map_err(|_| format!("invalid interval: {raw}"))?;
    if interval == 0 {
        return Err("tickIntervalMs must be at least 1".to_string());
    }
    Ok(interval)
}
