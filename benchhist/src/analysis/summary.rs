//! Summary statistics and the constants/measured split.
//!
//! `zsh-bench --raw` mixes two kinds of arrays: configuration flags such as
//! `has_compsys` that must hold one value for the whole run, and timing
//! samples. [`partition`] separates them once, up front; flags are then
//! reported through [`constant_value`] and timings through [`summarize`].

#![allow(clippy::float_cmp)]

use crate::domain::{HistError, Series, SeriesName};
use crate::extraction::SeriesSet;
use std::fmt;

/// Series that `zsh-bench` reports as settings rather than timings.
pub const DEFAULT_CONSTANTS: [&str; 5] = [
    "creates_tty",
    "has_compsys",
    "has_syntax_highlighting",
    "has_autosuggestions",
    "has_git_prompt",
];

/// Minimum and maximum of `values`, or `None` if empty.
#[must_use]
pub fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}

/// Median with the usual rule for even counts (mean of the middle pair).
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Min/median/max of one measured series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub name: SeriesName,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Summarize a measured series.
///
/// # Errors
///
/// Returns [`HistError::EmptySeries`] if the series has no samples.
pub fn summarize(series: &Series) -> Result<SeriesSummary, HistError> {
    let empty = || HistError::EmptySeries(series.name.clone());
    let (min, max) = bounds(&series.values).ok_or_else(empty)?;
    let median = median(&series.values).ok_or_else(empty)?;
    Ok(SeriesSummary { name: series.name.clone(), min, median, max })
}

/// The single value held by a constant series.
///
/// Displays integral values without a fractional part (`1.0` → `1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantValue(pub f64);

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            // + 0.0 turns -0.0 into 0.0
            write!(f, "{:.0}", self.0 + 0.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Check that every sample of a constant series is equal and return it.
///
/// # Errors
///
/// - [`HistError::EmptySeries`] if there are no samples
/// - [`HistError::InconsistentConstant`] if the samples differ
pub fn constant_value(series: &Series) -> Result<ConstantValue, HistError> {
    let (min, max) =
        bounds(&series.values).ok_or_else(|| HistError::EmptySeries(series.name.clone()))?;
    if min != max {
        return Err(HistError::InconsistentConstant { series: series.name.clone(), min, max });
    }
    Ok(ConstantValue(series.values[0]))
}

/// Extracted series split into settings and measurements.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    /// In the order of the requested constant names.
    pub constants: Vec<&'a Series>,
    /// In first-appearance order.
    pub measured: Vec<&'a Series>,
}

impl Partition<'_> {
    /// Width of the longest series name across both groups.
    #[must_use]
    pub fn name_width(&self) -> usize {
        self.constants.iter().chain(&self.measured).map(|s| s.name.width()).max().unwrap_or(0)
    }
}

/// Split `set` into the constants named in `constant_names` and the rest.
///
/// # Errors
///
/// - [`HistError::NoSeries`] if `set` is empty
/// - [`HistError::MissingConstant`] if a named constant is absent
pub fn partition<'a>(
    set: &'a SeriesSet,
    constant_names: &[&str],
) -> Result<Partition<'a>, HistError> {
    if set.is_empty() {
        return Err(HistError::NoSeries);
    }

    let constants = constant_names
        .iter()
        .map(|&name| set.get(name).ok_or_else(|| HistError::MissingConstant(name.into())))
        .collect::<Result<Vec<_>, _>>()?;

    let measured = set
        .iter()
        .filter(|s| !constant_names.iter().any(|&name| name == s.name.as_str()))
        .collect::<Vec<_>>();

    Ok(Partition { constants, measured })
}
