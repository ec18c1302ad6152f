//! Whole-input reading from a file or stdin.
//!
//! The report needs every series before it can compute anything, so input
//! is always read to the end before extraction starts.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the complete benchmark dump.
///
/// `None` and `-` mean stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => read_all(std::io::stdin().lock()).context("Failed to read stdin"),
    }
}

/// Read `reader` to the end as UTF-8.
pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_all() {
        let text = read_all("x=( 1 2 )\n".as_bytes()).unwrap();
        assert_eq!(text, "x=( 1 2 )\n");
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_input(Some(Path::new("/nonexistent/benchhist-input.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/benchhist-input.txt"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }
}
