// Overlay graph rendering
//
// Turns the receive/transmit sample windows into a fixed-height character
// grid with per-row byte-rate thresholds, unit labels, and a legend line.

use thiserror::Error;

use crate::series::BoundedSeries;
use crate::units::{format_bytes, pad_left};

/// Chart height in rows.
pub const GRAPH_HEIGHT: usize = 12;

/// Column width reserved for the row label before the axis separator.
const LABEL_WIDTH: usize = 10;

/// Internal invariant violation: the dashboard always advances both series
/// together, so a length mismatch means corrupted feeding and should surface
/// loudly instead of misrendering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("series length mismatch: rx has {rx} samples, tx has {tx}")]
    SeriesLengthMismatch { rx: usize, tx: usize },
}

/// The three glyphs drawn when receive, transmit, or both rates clear a
/// row's threshold. Cells below threshold stay blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSymbols {
    pub rx: char,
    pub tx: char,
    pub both: char,
}

impl Default for GraphSymbols {
    fn default() -> Self {
        Self {
            rx: '@',
            tx: '#',
            both: '*',
        }
    }
}

/// One rendered chart: a `GRAPH_HEIGHT` x width cell matrix plus the byte
/// threshold each row represents. Recomputed from scratch every tick.
#[derive(Debug, Clone)]
pub struct GraphGrid {
    pub cells: Vec<Vec<char>>,
    pub thresholds: Vec<f64>,
}

/// Renders two sample windows as an overlaid threshold chart.
pub struct GraphRenderer {
    symbols: GraphSymbols,
    height: usize,
    unit_base: u64,
}

impl GraphRenderer {
    pub fn new(symbols: GraphSymbols, unit_base: u64) -> Self {
        Self {
            symbols,
            height: GRAPH_HEIGHT,
            unit_base,
        }
    }

    /// Builds the cell grid for the current windows.
    ///
    /// Width is the configured window size; while the windows are still
    /// filling, the missing leading columns render blank. The vertical scale
    /// is the larger of the two windowed peaks. Comparison is `>=`, so an
    /// idle link (scale 0) fills its sampled columns with the both-symbol
    /// rather than leaving the chart empty.
    pub fn render(&self, rx: &BoundedSeries, tx: &BoundedSeries) -> Result<GraphGrid, RenderError> {
        if rx.len() != tx.len() {
            return Err(RenderError::SeriesLengthMismatch {
                rx: rx.len(),
                tx: tx.len(),
            });
        }

        let width = rx.window_size();
        let rx_window: Vec<u64> = rx.window().collect();
        let tx_window: Vec<u64> = tx.window().collect();
        let scale = rx.windowed_max().max(tx.windowed_max()) as f64;

        let thresholds: Vec<f64> = (0..self.height)
            .map(|row| self.row_threshold(row, scale))
            .collect();

        let lead = width.saturating_sub(rx_window.len());
        let mut cells = vec![vec![' '; width]; self.height];
        for (row, threshold) in cells.iter_mut().zip(&thresholds) {
            for (column, (&rx_rate, &tx_rate)) in rx_window.iter().zip(&tx_window).enumerate() {
                let rx_hit = rx_rate as f64 >= *threshold;
                let tx_hit = tx_rate as f64 >= *threshold;
                // Both-symbol wins when both rates clear the threshold.
                row[lead + column] = if rx_hit && tx_hit {
                    self.symbols.both
                } else if rx_hit {
                    self.symbols.rx
                } else if tx_hit {
                    self.symbols.tx
                } else {
                    ' '
                };
            }
        }

        Ok(GraphGrid { cells, thresholds })
    }

    /// Evenly spaced thresholds from just under the peak down to the axis.
    /// The bottom row is pinned to exactly 0 so accumulated floating error
    /// can never lift the baseline.
    fn row_threshold(&self, row: usize, scale: f64) -> f64 {
        if row + 1 == self.height {
            return 0.0;
        }
        scale - (scale / self.height as f64) * (row + 1) as f64
    }

    /// Renders the grid as display lines: one labelled row per chart row,
    /// then the legend naming the three symbols.
    pub fn render_lines(&self, grid: &GraphGrid) -> Vec<String> {
        let mut lines = Vec::with_capacity(grid.cells.len() + 1);
        for (row, threshold) in grid.cells.iter().zip(&grid.thresholds) {
            let label = pad_left(&format_bytes(*threshold, self.unit_base), LABEL_WIDTH, ' ');
            let mut line = format!("{label} | ");
            line.extend(row.iter());
            lines.push(line);
        }
        lines.push(format!(
            " '{}' Received, '{}' Transmitted, '{}' Both",
            self.symbols.rx, self.symbols.tx, self.symbols.both
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_from(window_size: usize, samples: &[u64]) -> BoundedSeries {
        let mut series = BoundedSeries::new(window_size);
        for &sample in samples {
            series.append(sample);
        }
        series
    }

    fn renderer() -> GraphRenderer {
        GraphRenderer::new(GraphSymbols::default(), 1000)
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let rx = series_from(5, &[1, 2, 3]);
        let tx = series_from(5, &[1, 2]);
        let err = renderer().render(&rx, &tx).unwrap_err();
        assert_eq!(err, RenderError::SeriesLengthMismatch { rx: 3, tx: 2 });
    }

    #[test]
    fn test_idle_link_renders_all_both() {
        // All-zero windows: scale is 0, every threshold is 0, and the >=
        // comparison must fill every sampled cell with the both-symbol.
        let rx = series_from(4, &[0, 0, 0, 0]);
        let tx = series_from(4, &[0, 0, 0, 0]);
        let grid = renderer().render(&rx, &tx).unwrap();

        assert_eq!(grid.cells.len(), GRAPH_HEIGHT);
        for row in &grid.cells {
            assert_eq!(row.len(), 4);
            assert!(row.iter().all(|&cell| cell == '*'), "row was {row:?}");
        }
        assert!(grid.thresholds.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_rx_dominant_tx_zero_never_draws_tx() {
        // rx strictly above tx everywhere and tx all-zero: above the zero
        // baseline no cell may be the transmit or both symbol.
        let rx = series_from(3, &[300, 600, 900]);
        let tx = series_from(3, &[0, 0, 0]);
        let grid = renderer().render(&rx, &tx).unwrap();

        for (row, &threshold) in grid.cells.iter().zip(&grid.thresholds) {
            if threshold > 0.0 {
                assert!(
                    row.iter().all(|&cell| cell == '@' || cell == ' '),
                    "row at threshold {threshold} was {row:?}"
                );
            }
        }
        // On the zero baseline both rates qualify.
        let bottom = grid.cells.last().unwrap();
        assert!(bottom.iter().all(|&cell| cell == '*'));
    }

    #[test]
    fn test_partial_window_pads_leading_columns() {
        let rx = series_from(6, &[100, 200]);
        let tx = series_from(6, &[50, 50]);
        let grid = renderer().render(&rx, &tx).unwrap();

        for row in &grid.cells {
            assert_eq!(row.len(), 6);
            assert!(row[..4].iter().all(|&cell| cell == ' '), "row was {row:?}");
        }
        // The column holding the peak reaches the top row.
        assert_ne!(grid.cells[0][5], ' ');
    }

    #[test]
    fn test_thresholds_descend_to_pinned_zero() {
        let rx = series_from(2, &[1200, 1200]);
        let tx = series_from(2, &[0, 0]);
        let grid = renderer().render(&rx, &tx).unwrap();

        for pair in grid.thresholds.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert_eq!(*grid.thresholds.last().unwrap(), 0.0);
        // Row 0 sits one step below the peak: scale - scale/height.
        assert!((grid.thresholds[0] - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_symbols_and_labels() {
        let rx = series_from(2, &[1000, 1000]);
        let tx = series_from(2, &[1000, 1000]);
        let symbols = GraphSymbols {
            rx: 'r',
            tx: 't',
            both: 'x',
        };
        let renderer = GraphRenderer::new(symbols, 1000);
        let grid = renderer.render(&rx, &tx).unwrap();
        let lines = renderer.render_lines(&grid);

        assert_eq!(lines.len(), GRAPH_HEIGHT + 1);
        // Every sampled cell clears every threshold, so rows are all 'x'.
        assert!(lines[0].ends_with("xx"));
        // Bottom row label is the pinned zero.
        assert!(lines[GRAPH_HEIGHT - 1].contains("0 B |"));
        assert_eq!(lines[GRAPH_HEIGHT], " 'r' Received, 't' Transmitted, 'x' Both");
    }
}
