/// Fixed-length lookback windows over a scaled series, each paired with
/// the value immediately following it as the label.
///
/// Invariants held by construction: every window has length `window_size`,
/// `windows.len() == labels.len() == series_len - window_size`, and label
/// `i` equals the series element at index `i + window_size`. A series no
/// longer than the window yields an empty set, not an error.
#[derive(Debug, Clone)]
pub struct WindowedSeries {
    windows: Vec<Vec<f64>>,
    labels: Vec<f64>,
    window_size: usize,
}

impl WindowedSeries {
    pub fn build(series: &[f64], window_size: usize) -> Self {
        let count = series.len().saturating_sub(window_size);
        let mut windows = Vec::with_capacity(count);
        let mut labels = Vec::with_capacity(count);

        for end in window_size..series.len() {
            windows.push(series[end - window_size..end].to_vec());
            labels.push(series[end]);
        }

        Self {
            windows,
            labels,
            window_size,
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn windows(&self) -> &[Vec<f64>] {
        &self.windows
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Splits chronologically at `floor(len * fraction)`: the earlier
    /// windows become the training prefix, the rest the test suffix.
    /// No shuffling; order is load-bearing for time-series validity.
    pub fn split_at_fraction(self, fraction: f64) -> (WindowedSeries, WindowedSeries) {
        let split = ((self.windows.len() as f64 * fraction).floor() as usize).min(self.windows.len());

        let mut train_windows = self.windows;
        let mut train_labels = self.labels;
        let test_windows = train_windows.split_off(split);
        let test_labels = train_labels.split_off(split);

        (
            WindowedSeries {
                windows: train_windows,
                labels: train_labels,
                window_size: self.window_size,
            },
            WindowedSeries {
                windows: test_windows,
                labels: test_labels,
                window_size: self.window_size,
            },
        )
    }
}
