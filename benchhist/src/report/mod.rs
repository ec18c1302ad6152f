//! Report output
//!
//! Turns extracted series into the human-readable text report printed on
//! stdout. Currently the only format is plain text.

pub mod display;

pub use display::{
    render_histogram, render_report, render_settings, render_summary_table, write_report,
    ReportConfig,
};
