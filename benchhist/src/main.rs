//! # benchhist - Main Entry Point
//!
//! Reads `zsh-bench --raw` output from a file or stdin and prints the
//! settings, summary table and histograms to stdout.

use anyhow::{Context, Result};
use benchhist::cli::{read_input, Args};
use benchhist::domain::HistError;
use benchhist::extraction::extract_series;
use benchhist::report::write_report;
use clap::Parser;
use log::{debug, info};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_IOERR: i32 = 74;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

/// Data errors are plain failures; anything that failed on I/O
/// (unreadable input, closed stdout) gets `EX_IOERR`.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<HistError>().is_some() {
        EXIT_ERROR
    } else if err.chain().any(|cause| cause.downcast_ref::<std::io::Error>().is_some()) {
        EXIT_IOERR
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    debug!("{args:?}");

    let input = read_input(args.input.as_deref())?;
    info!("read {} bytes of input", input.len());

    let series = extract_series(&input).context("Failed to extract series")?;
    info!("extracted {} series", series.len());

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &series, &args.report_config())
}
