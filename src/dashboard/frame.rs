// Frame composition
//
// Builds the full text frame for one tick: header block, overlay graph with
// labels and legend, then the ranked peer list. Pure string assembly; the
// sink decides where it goes.

use crate::provider::InterfaceStats;
use crate::rank::ConnectionRecord;
use crate::series::BoundedSeries;
use crate::units::{format_bytes, pad_right};

/// Column where the Transmitted values start in the two-column header.
const COLUMN_WIDTH: usize = 34;

/// Composes one complete dashboard frame.
pub fn compose(
    stats: &InterfaceStats,
    rx: &BoundedSeries,
    tx: &BoundedSeries,
    graph_lines: &[String],
    ranked: &[ConnectionRecord],
    unit_base: u64,
) -> String {
    let fmt = |bytes: f64| format_bytes(bytes, unit_base);
    let mut lines: Vec<String> = Vec::with_capacity(10 + graph_lines.len() + ranked.len());

    lines.push(format!("Interface: {}", stats.name));
    lines.push(two_columns("Received:", "Transmitted:"));
    lines.push(two_columns(
        &format!("  Total: {}", fmt(stats.total_rx_bytes as f64)),
        &fmt(stats.total_tx_bytes as f64),
    ));
    lines.push(two_columns(
        &format!("  Running: {}", fmt(rx.total() as f64)),
        &fmt(tx.total() as f64),
    ));
    lines.push(two_columns(
        &format!("  Window: {}", fmt(rx.windowed_sum() as f64)),
        &fmt(tx.windowed_sum() as f64),
    ));
    lines.push(two_columns(
        &format!("  Current: {}/s", fmt(stats.rx_rate as f64)),
        &format!("{}/s", fmt(stats.tx_rate as f64)),
    ));
    lines.push(two_columns(
        &format!("  Average: {}/s", fmt(rx.running_average())),
        &format!("{}/s", fmt(tx.running_average())),
    ));
    lines.push(two_columns(
        &format!("  Min: {}/s", fmt(rx.min().unwrap_or(0) as f64)),
        &format!("{}/s", fmt(tx.min().unwrap_or(0) as f64)),
    ));
    lines.push(two_columns(
        &format!("  Max: {}/s", fmt(rx.max().unwrap_or(0) as f64)),
        &format!("{}/s", fmt(tx.max().unwrap_or(0) as f64)),
    ));

    lines.extend(graph_lines.iter().cloned());

    for record in ranked {
        lines.push(format!(
            "Connected IP: {} - Transmitted: {}/s Received: {}/s - PID: {}",
            record.peer_address,
            fmt(record.tx_rate as f64),
            fmt(record.rx_rate as f64),
            record.pid.unwrap_or(0),
        ));
    }

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}

fn two_columns(left: &str, right: &str) -> String {
    format!("{}{}", pad_right(left, COLUMN_WIDTH, ' '), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> InterfaceStats {
        InterfaceStats {
            name: "wlan0".to_string(),
            total_rx_bytes: 1_000_000,
            total_tx_bytes: 500_000,
            rx_rate: 2000,
            tx_rate: 1000,
        }
    }

    fn sample_series(samples: &[u64]) -> BoundedSeries {
        let mut series = BoundedSeries::new(8);
        for &sample in samples {
            series.append(sample);
        }
        series
    }

    #[test]
    fn test_header_block_layout() {
        let rx = sample_series(&[1000, 2000]);
        let tx = sample_series(&[500, 1000]);
        let frame = compose(&sample_stats(), &rx, &tx, &[], &[], 1000);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[0], "Interface: wlan0");
        assert!(lines[1].starts_with("Received:"));
        assert!(lines[1].ends_with("Transmitted:"));
        // Right column starts at the fixed width.
        assert_eq!(&lines[1][COLUMN_WIDTH..], "Transmitted:");
        assert_eq!(&lines[2][..9], "  Total: ");
        assert!(lines[3].starts_with("  Running: 3.00 KB"));
        assert!(lines[4].starts_with("  Window: 3.00 KB"));
        assert!(lines[5].starts_with("  Current: 2.00 KB/s"));
        assert!(lines[6].starts_with("  Average: 1.50 KB/s"));
        assert!(lines[7].starts_with("  Min: 1.00 KB/s"));
        assert!(lines[8].starts_with("  Max: 2.00 KB/s"));
    }

    #[test]
    fn test_peer_lines_substitute_missing_fields() {
        let rx = sample_series(&[0]);
        let tx = sample_series(&[0]);
        let ranked = vec![ConnectionRecord {
            peer_address: "93.184.216.34".to_string(),
            tx_rate: 0,
            rx_rate: 128,
            pid: None,
        }];
        let frame = compose(&sample_stats(), &rx, &tx, &[], &ranked, 1000);

        let peer_line = frame.lines().last().unwrap();
        assert_eq!(
            peer_line,
            "Connected IP: 93.184.216.34 - Transmitted: 0 B/s Received: 128.00 B/s - PID: 0"
        );
    }

    #[test]
    fn test_graph_lines_are_embedded_in_order() {
        let rx = sample_series(&[1]);
        let tx = sample_series(&[1]);
        let graph_lines = vec!["row-a".to_string(), "row-b".to_string()];
        let frame = compose(&sample_stats(), &rx, &tx, &graph_lines, &[], 1000);
        let lines: Vec<&str> = frame.lines().collect();

        assert_eq!(lines[9], "row-a");
        assert_eq!(lines[10], "row-b");
    }
}
