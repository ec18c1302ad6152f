//! Text report: settings block, summary table and histogram blocks.
//!
//! ```text
//! Settings
//! creates_tty             = 0
//! has_compsys             = 1
//! ...
//!
//! Benchmark                         min_value,          median_value,             max_value
//! first_prompt_lag_ms     =                20.981,                21.344,                22.710
//! ...
//!
//! Histogram for first_prompt_lag_ms
//! [   20.981,    21.154): *
//! ...
//! ```
//!
//! The whole report is rendered before anything is written, so a bad series
//! never leaves half a report on stdout.

use crate::analysis::{constant_value, partition, summarize, Histogram, DEFAULT_CONSTANTS};
use crate::domain::{HistError, HistogramConfig, Series};
use crate::extraction::SeriesSet;
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

/// Everything that shapes the report besides the input itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub histogram: HistogramConfig,
    /// Series reported as settings instead of timings.
    pub constants: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            histogram: HistogramConfig::default(),
            constants: DEFAULT_CONSTANTS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Render the full report for `set`.
///
/// # Errors
///
/// Any [`HistError`] raised while validating constants or summarizing and
/// binning the measured series.
pub fn render_report(set: &SeriesSet, config: &ReportConfig) -> Result<String, HistError> {
    let constant_names: Vec<&str> = config.constants.iter().map(String::as_str).collect();
    let parts = partition(set, &constant_names)?;
    let width = parts.name_width();
    debug!(
        "{} constant and {} measured series, name width {width}",
        parts.constants.len(),
        parts.measured.len()
    );

    let mut report = String::new();
    render_settings(&mut report, &parts.constants, width)?;
    render_summary_table(&mut report, &parts.measured, width, config.histogram.precision)?;
    for series in &parts.measured {
        render_histogram(&mut report, series, &config.histogram)?;
    }
    Ok(report)
}

/// Render the report and write it to `out`.
///
/// # Errors
///
/// Fails on invalid series (see [`render_report`]) or if writing fails.
pub fn write_report<W: Write>(out: &mut W, set: &SeriesSet, config: &ReportConfig) -> Result<()> {
    let report = render_report(set, config)?;
    out.write_all(report.as_bytes()).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;
    Ok(())
}

/// Append `line` and a newline.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// `Settings` header, one `name = value` line per constant, blank line.
///
/// # Errors
///
/// [`HistError::InconsistentConstant`] or [`HistError::EmptySeries`].
pub fn render_settings(out: &mut String, constants: &[&Series], width: usize) -> Result<(), HistError> {
    push_line(out, "Settings");
    for series in constants {
        let value = constant_value(series)?;
        push_line(out, &format!("{:<width$} = {value}", series.name.as_str()));
    }
    push_line(out, "");
    Ok(())
}

/// Header plus one min/median/max line per series, blank line.
///
/// # Errors
///
/// [`HistError::EmptySeries`] for a series without samples.
pub fn render_summary_table(
    out: &mut String,
    measured: &[&Series],
    width: usize,
    precision: usize,
) -> Result<(), HistError> {
    push_line(
        out,
        &format!(
            "{:<width$}   {:>width$}, {:>width$}, {:>width$}",
            "Benchmark", "min_value", "median_value", "max_value"
        ),
    );
    for series in measured {
        let summary = summarize(series)?;
        push_line(
            out,
            &format!(
                "{:<width$} = {:>width$.precision$}, {:>width$.precision$}, {:>width$.precision$}",
                summary.name.as_str(),
                summary.min,
                summary.median,
                summary.max
            ),
        );
    }
    push_line(out, "");
    Ok(())
}

/// `Histogram for <name>`, one line per bin, blank line.
///
/// # Errors
///
/// [`HistError::EmptySeries`] for a series without samples.
pub fn render_histogram(
    out: &mut String,
    series: &Series,
    config: &HistogramConfig,
) -> Result<(), HistError> {
    let histogram = Histogram::build(series, config.bin_count)?;
    push_line(out, &format!("Histogram for {}", series.name));
    for line in histogram.render(config) {
        push_line(out, &line);
    }
    push_line(out, "");
    Ok(())
}
