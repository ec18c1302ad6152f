//! CLI argument definitions

use crate::analysis::DEFAULT_CONSTANTS;
use crate::domain::HistogramConfig;
use crate::report::ReportConfig;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "benchhist",
    version,
    about = "Visualizer of zsh-bench --raw output",
    after_help = "\
EXAMPLES:
    zsh-bench --raw | benchhist                      Default 10 bins
    zsh-bench --raw | benchhist --bin-count 20 -l    Finer bins, logarithmic bars
    benchhist bench.txt --bar-symbol '#'             Read a saved run"
)]
pub struct Args {
    /// File with zsh-bench --raw output (reads stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Histogram bin count (minimum: 1)
    #[arg(short, long, default_value = "10")]
    pub bin_count: NonZeroUsize,

    /// Use logarithmic histogram mode
    #[arg(short, long)]
    pub logarithmic: bool,

    /// Character used to draw histogram bars
    #[arg(long, default_value = "*")]
    pub bar_symbol: char,

    /// Decimal places for interval bounds and summary values
    #[arg(long, default_value = "3")]
    pub precision: usize,

    /// Series reported as settings (must hold one value for the whole run);
    /// pass an empty list to report none
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_CONSTANTS.map(String::from))]
    pub constants: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn histogram_config(&self) -> HistogramConfig {
        HistogramConfig {
            bin_count: self.bin_count,
            logarithmic: self.logarithmic,
            bar_symbol: self.bar_symbol,
            precision: self.precision,
        }
    }

    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        // First occurrence wins so each setting is reported once
        let mut constants: Vec<String> = Vec::new();
        for name in self.constants.iter().filter(|c| !c.is_empty()) {
            if !constants.contains(name) {
                constants.push(name.clone());
            }
        }
        ReportConfig { histogram: self.histogram_config(), constants }
    }
}
