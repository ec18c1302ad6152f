//! # benchhist - Textual Histograms for zsh-bench Output
//!
//! benchhist reads the output of `zsh-bench --raw`, extracts every named
//! array it contains, and prints a settings block, a min/median/max table and
//! one ASCII histogram per timing series. No plotting tools required.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │     CLI      │──▶│  Extraction  │──▶│   Analysis   │──▶│    Report    │
//! │ (args/input) │   │   (regex)    │   │ (bins/stats) │   │    (text)    │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`extraction`]: `name=( 1.0 2.0 ... )` groups to an ordered [`extraction::SeriesSet`]
//!   - Last occurrence of a name wins, order of first appearance is kept
//!
//! - [`analysis`]: Pure computation
//!   - `histogram`: equal-width binning, last bin closed on the right,
//!     optional logarithmic bar compression
//!   - `summary`: constants/measured split, min/median/max, constant checks
//!
//! - [`report`]: Renders the full text report before writing any of it
//!
//! - [`cli`]: Command-line argument parsing and whole-input reading
//!
//! - [`domain`]: Core domain types (`SeriesName`, `Series`, `HistogramConfig`)
//!   and the `HistError` taxonomy
//!
//! ## Typical Usage
//!
//! ```bash
//! zsh-bench --raw | benchhist
//! zsh-bench --raw | benchhist --bin-count 20 --logarithmic
//! ```
//!
//! ## Failure Policy
//!
//! Malformed numbers, empty series, missing constants and constants that
//! change value during the run are all fatal. A suspicious dump usually
//! means the benchmark itself should be rerun.

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod extraction;
pub mod report;
