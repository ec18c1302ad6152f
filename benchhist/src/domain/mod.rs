//! Domain model for benchhist
//!
//! This module contains core domain types and errors that provide:
//! - Compile-time safety via newtype pattern
//! - Self-documenting function signatures
//! - Structured error handling

pub mod errors;
pub mod types;

// Re-export common types for convenience
pub use types::{
    HistogramConfig, Series, SeriesName, DEFAULT_BAR_SYMBOL, DEFAULT_BIN_COUNT, DEFAULT_PRECISION,
};

pub use errors::HistError;
