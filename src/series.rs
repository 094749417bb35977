// Rolling sample window with lifetime aggregates

use std::collections::VecDeque;

/// Fixed-capacity rolling window of per-tick rate samples (bytes/second).
///
/// The window keeps the most recent `window_size` samples in append order and
/// evicts the oldest on overflow. Independently of the window, the series
/// tracks lifetime aggregates over every sample ever appended: a running
/// total and count (for the true running average) and the observed min/max.
/// Min and max start unset rather than at zero, so a link whose rate never
/// actually dropped to zero is not reported with a zero floor.
#[derive(Debug, Clone)]
pub struct BoundedSeries {
    window: VecDeque<u64>,
    window_size: usize,
    total: u64,
    count: u64,
    min: Option<u64>,
    max: Option<u64>,
}

impl BoundedSeries {
    /// Creates an empty series retaining at most `window_size` samples.
    pub fn new(window_size: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(window_size),
            window_size,
            total: 0,
            count: 0,
            min: None,
            max: None,
        }
    }

    /// Appends one sample, evicting the oldest once the window is full.
    pub fn append(&mut self, sample: u64) {
        self.window.push_back(sample);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }

        self.total = self.total.saturating_add(sample);
        self.count += 1;
        self.min = Some(match self.min {
            Some(current) => current.min(sample),
            None => sample,
        });
        self.max = Some(match self.max {
            Some(current) => current.max(sample),
            None => sample,
        });
    }

    /// Read-only view of the current window, oldest sample first.
    pub fn window(&self) -> impl Iterator<Item = u64> + '_ {
        self.window.iter().copied()
    }

    /// Number of samples currently held in the window.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Configured window capacity (the chart width in columns).
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Lifetime sum of every sample ever appended, not just the window.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of samples ever appended (ticks elapsed).
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Smallest sample ever observed; `None` before the first append.
    pub fn min(&self) -> Option<u64> {
        self.min
    }

    /// Largest sample ever observed; `None` before the first append.
    pub fn max(&self) -> Option<u64> {
        self.max
    }

    /// True running average over every sample ever appended, regardless of
    /// window eviction. Returns 0 for an empty series.
    pub fn running_average(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.total as f64 / self.count as f64
    }

    /// Sum over the current window only.
    pub fn windowed_sum(&self) -> u64 {
        self.window.iter().sum()
    }

    /// Largest sample in the current window; 0 when the window is empty.
    pub fn windowed_max(&self) -> u64 {
        self.window.iter().copied().max().unwrap_or(0)
    }
}
