//! Extraction of named numeric series from raw benchmark output
//!
//! - `extractor`: regex grammar for `name=( values )` groups
//! - `series_set`: first-appearance ordered storage with last-match-wins replacement

pub mod extractor;
pub mod series_set;

pub use extractor::extract_series;
pub use series_set::SeriesSet;
