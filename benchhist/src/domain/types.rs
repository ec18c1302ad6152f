//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers keep series names apart from arbitrary strings and
//! make a zero bin count unrepresentable once configuration is built.

use std::fmt;
use std::num::NonZeroUsize;

/// Name of a series as it appears in the benchmark dump
/// (e.g. `first_prompt_lag_ms`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesName(String);

impl SeriesName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display width in characters, used to align the summary table.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesName {
    fn from(s: &str) -> Self {
        SeriesName::new(s)
    }
}

impl From<String> for SeriesName {
    fn from(s: String) -> Self {
        SeriesName(s)
    }
}

/// A named, ordered sequence of samples.
///
/// Sample order is the order of appearance in the input. Emptiness is
/// allowed here and rejected by the operations that need at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: SeriesName,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<SeriesName>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default character repeated to draw a histogram bar.
pub const DEFAULT_BAR_SYMBOL: char = '*';

/// Default number of decimals for interval bounds and summary values.
pub const DEFAULT_PRECISION: usize = 3;

/// Parameters for building and rendering one histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    pub bin_count: NonZeroUsize,
    pub logarithmic: bool,
    pub bar_symbol: char,
    pub precision: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            logarithmic: false,
            bar_symbol: DEFAULT_BAR_SYMBOL,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl HistogramConfig {
    /// Build a config from a raw bin count, rejecting zero.
    pub fn with_bin_count(bin_count: usize) -> Result<Self, super::HistError> {
        let bin_count =
            NonZeroUsize::new(bin_count).ok_or(super::HistError::InvalidBinCount(bin_count))?;
        Ok(Self { bin_count, ..Self::default() })
    }
}
