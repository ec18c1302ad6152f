//! Analysis logic for extracted series
//!
//! This module contains pure computation over series, separated from the
//! text report that presents it.

pub mod histogram;
pub mod summary;

pub use histogram::{log_count, Histogram, HistogramRow};
pub use summary::{
    bounds, constant_value, median, partition, summarize, ConstantValue, Partition, SeriesSummary,
    DEFAULT_CONSTANTS,
};
