//! Command-line interface and input handling

pub mod args;
pub mod input;

pub use args::Args;
pub use input::read_input;
