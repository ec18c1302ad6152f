//! Structured error types for benchhist
//!
//! Using thiserror for automatic Display implementation. Every variant is
//! fatal: malformed input means the benchmark run itself is suspect.

use super::types::SeriesName;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistError {
    #[error("Series {series} contains a non-numeric value: {token:?}")]
    Parse { series: SeriesName, token: String },

    #[error("Bin count must be at least 1, got {0}")]
    InvalidBinCount(usize),

    #[error("Series {0} has no samples")]
    EmptySeries(SeriesName),

    #[error(
        "Value of {series} changed during the benchmark (min {min}, max {max}). Run it again."
    )]
    InconsistentConstant { series: SeriesName, min: f64, max: f64 },

    #[error("Constant series {0} is missing from the input")]
    MissingConstant(SeriesName),

    #[error("No series found in the input")]
    NoSeries,
}
