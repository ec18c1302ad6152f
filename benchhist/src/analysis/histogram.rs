//! Fixed-width histogram construction and textual rendering.
//!
//! # Binning
//!
//! The range `[min, max]` of a series is split into `bin_count` bins of equal
//! width. Bin `i` covers `[min + i*width, min + (i+1)*width)`; the last bin is
//! closed on the right so the maximum sample always has a home:
//!
//! ```text
//! S = 1..=10, bin_count = 2, width = 4.5
//!
//! [    1.000,     5.500): *****
//! [    5.500,    10.000]: *****
//! ```
//!
//! When every sample is equal the width is zero and all samples go to bin 0.
//!
//! # Logarithmic mode
//!
//! Counts can be compressed to `ceil(log2(count + 1))` after binning, which
//! keeps bars readable for heavily skewed distributions. Bin assignment is
//! always linear.

// Bin indices come from non-negative, clamped float quotients
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]

use super::summary::bounds;
use crate::domain::{HistError, HistogramConfig, Series};
use std::num::NonZeroUsize;

/// Field width of each interval bound in a rendered row.
const INTERVAL_FIELD_WIDTH: usize = 9;

/// Per-bin sample counts of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    min_value: f64,
    bin_width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin the samples of `series` into `bin_count` equal-width bins.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::EmptySeries`] if the series has no samples.
    pub fn build(series: &Series, bin_count: NonZeroUsize) -> Result<Self, HistError> {
        let (min_value, max_value) =
            bounds(&series.values).ok_or_else(|| HistError::EmptySeries(series.name.clone()))?;
        let bin_count = bin_count.get();
        let bin_width = if max_value == min_value {
            0.0
        } else {
            (max_value - min_value) / bin_count as f64
        };

        let mut counts = vec![0usize; bin_count];
        for &x in &series.values {
            counts[bin_index(x, min_value, max_value, bin_width, bin_count)] += 1;
        }

        Ok(Self { min_value, bin_width, counts })
    }

    /// Like [`Histogram::build`] but takes an unchecked bin count.
    ///
    /// # Errors
    ///
    /// Returns [`HistError::InvalidBinCount`] for a zero bin count, before
    /// looking at the samples.
    pub fn build_with_count(series: &Series, bin_count: usize) -> Result<Self, HistError> {
        let bin_count = NonZeroUsize::new(bin_count).ok_or(HistError::InvalidBinCount(bin_count))?;
        Self::build(series, bin_count)
    }

    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Number of samples binned. Always equals the series length.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Lower and upper bound of bin `index`.
    ///
    /// Recomputed from the minimum on every call so that rounding errors do
    /// not accumulate from bin to bin.
    #[must_use]
    pub fn bin_bounds(&self, index: usize) -> (f64, f64) {
        let start = self.min_value + self.bin_width * index as f64;
        let end = self.min_value + self.bin_width * (index + 1) as f64;
        (start, end)
    }

    /// Rows ready for display, one per bin.
    #[must_use]
    pub fn rows(&self, logarithmic: bool) -> Vec<HistogramRow> {
        let last = self.counts.len() - 1;
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let (start, end) = self.bin_bounds(i);
                HistogramRow {
                    start,
                    end,
                    closed: i == last,
                    count: if logarithmic { log_count(count) } else { count },
                }
            })
            .collect()
    }

    /// Render every row as a line of text (without trailing newlines).
    #[must_use]
    pub fn render(&self, config: &HistogramConfig) -> Vec<String> {
        self.rows(config.logarithmic)
            .iter()
            .map(|row| row.render(config.bar_symbol, config.precision))
            .collect()
    }
}

/// One displayable histogram line: interval plus bar length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramRow {
    pub start: f64,
    pub end: f64,
    /// Whether the upper bound is inclusive (only the last bin).
    pub closed: bool,
    /// Bar length, possibly log-compressed.
    pub count: usize,
}

impl HistogramRow {
    /// Format as `[    1.000,     5.500): *****`.
    #[must_use]
    pub fn render(&self, bar_symbol: char, precision: usize) -> String {
        let brace = if self.closed { ']' } else { ')' };
        let mut line = format!(
            "[{:>w$.p$}, {:>w$.p$}{brace}: ",
            self.start,
            self.end,
            w = INTERVAL_FIELD_WIDTH,
            p = precision
        );
        line.extend(std::iter::repeat(bar_symbol).take(self.count));
        line
    }
}

/// Bin of sample `x`.
///
/// All-equal samples go to bin 0 and the maximum always goes to the last
/// bin, even when the width underflows to zero for a tiny range.
fn bin_index(
    x: f64,
    min_value: f64,
    max_value: f64,
    bin_width: f64,
    bin_count: usize,
) -> usize {
    if max_value == min_value {
        return 0;
    }
    if x == max_value {
        return bin_count - 1;
    }
    // NaN (0/0 from a zero width) casts to 0
    let raw = ((x - min_value) / bin_width).floor() as usize;
    raw.min(bin_count - 1)
}

/// Logarithmic bar length `ceil(log2(count + 1))`.
///
/// Equal to the bit length of `count`, which avoids float rounding:
/// 0 → 0, 1 → 1, 2..=3 → 2, 4..=7 → 3, ...
#[must_use]
pub fn log_count(count: usize) -> usize {
    (usize::BITS - count.leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn one_to_ten() -> Series {
        Series::new("first_prompt_lag_ms", (1..=10).map(f64::from).collect())
    }

    #[test]
    fn test_two_bins_split_evenly() {
        let hist = Histogram::build(&one_to_ten(), nz(2)).unwrap();
        assert_eq!(hist.counts(), &[5, 5]);
        assert!((hist.bin_width() - 4.5).abs() < f64::EPSILON);
        assert_eq!(hist.bin_bounds(1), (5.5, 10.0));
    }

    #[test]
    fn test_max_lands_in_last_bin() {
        let series = Series::new("x", vec![0.0, 0.5, 3.0]);
        let hist = Histogram::build(&series, nz(3)).unwrap();
        assert_eq!(hist.counts(), &[2, 0, 1]);
    }

    #[test]
    fn test_max_lands_in_last_bin_when_width_underflows() {
        let tiny = f64::from_bits(1); // 5e-324, smallest subnormal
        let series = Series::new("x", vec![0.0, tiny]);
        let hist = Histogram::build(&series, nz(2)).unwrap();
        assert_eq!(hist.bin_width(), 0.0);
        assert_eq!(hist.counts(), &[1, 1]);

        let series = Series::new("x", vec![0.0, 0.0, tiny, tiny]);
        let hist = Histogram::build(&series, nz(3)).unwrap();
        assert_eq!(hist.counts(), &[2, 0, 2]);
    }

    #[test]
    fn test_single_bin_holds_everything() {
        let hist = Histogram::build(&one_to_ten(), nz(1)).unwrap();
        assert_eq!(hist.counts(), &[10]);
    }

    #[test]
    fn test_identical_samples_go_to_first_bin() {
        let series = Series::new("creates_tty", vec![4.2, 4.2, 4.2]);
        let hist = Histogram::build(&series, nz(4)).unwrap();
        assert_eq!(hist.counts(), &[3, 0, 0, 0]);
        assert!(hist.bin_width().abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_series_rejected() {
        let series = Series::new("exit_time_ms", vec![]);
        let err = Histogram::build(&series, nz(10)).unwrap_err();
        assert_eq!(err, HistError::EmptySeries("exit_time_ms".into()));
    }

    #[test]
    fn test_zero_bin_count_rejected_before_samples() {
        let empty = Series::new("exit_time_ms", vec![]);
        assert_eq!(Histogram::build_with_count(&empty, 0), Err(HistError::InvalidBinCount(0)));
    }

    #[test]
    fn test_log_count_values() {
        let expected = [0, 1, 2, 2, 3, 3, 3, 3, 4];
        for (count, want) in expected.iter().enumerate() {
            assert_eq!(log_count(count), *want, "log_count({count})");
        }
        assert_eq!(log_count(1000), 10);
    }

    #[test]
    fn test_log_is_applied_after_binning() {
        let series = Series::new("x", vec![0.0, 0.0, 0.0, 0.0, 1.0]);
        let hist = Histogram::build(&series, nz(2)).unwrap();
        assert_eq!(hist.counts(), &[4, 1]);

        let rows = hist.rows(true);
        assert_eq!(rows.iter().map(|r| r.count).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_render_rows() {
        let hist = Histogram::build(&one_to_ten(), nz(2)).unwrap();
        let lines = hist.render(&HistogramConfig::default());
        assert_eq!(
            lines,
            vec!["[    1.000,     5.500): *****", "[    5.500,    10.000]: *****"]
        );
    }

    #[test]
    fn test_render_custom_symbol_and_precision() {
        let row = HistogramRow { start: 0.0, end: 1.3, closed: false, count: 0 };
        assert_eq!(row.render('#', 1), "[      0.0,       1.3): ");

        let row = HistogramRow { start: 0.0, end: 2.0, closed: true, count: 2 };
        assert_eq!(row.render('#', 0), "[        0,         2]: ##");
    }
}
