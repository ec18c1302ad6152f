//! Series extraction from `zsh-bench --raw` output.
//!
//! The raw dump is a sequence of zsh array assignments such as
//!
//! ```text
//! creates_tty=( 0 0 0 )
//! first_prompt_lag_ms=( 21.344 20.981 22.710 )
//! ```
//!
//! Every `name=( ... )` group whose body consists of ASCII digits, dots and
//! spaces becomes one series. Anything else in the input is ignored.

use super::SeriesSet;
use crate::domain::{HistError, SeriesName};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// `<identifier> =( <numbers separated by spaces> )`
static SERIES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)\s*=\(\s*([0-9. ]+)\)").expect("series pattern is a valid regex")
});

/// Extract every series group from `input`.
///
/// A name that occurs more than once keeps the samples of its last
/// occurrence. Text without any group yields an empty set.
///
/// # Errors
///
/// Returns [`HistError::Parse`] if a token inside a matched group is not a
/// valid floating point literal (e.g. `1.2.3`) or overflows `f64`.
pub fn extract_series(input: &str) -> Result<SeriesSet, HistError> {
    let mut set = SeriesSet::new();
    let mut groups = 0usize;

    for caps in SERIES_PATTERN.captures_iter(input) {
        let name = SeriesName::new(&caps[1]);
        let values = parse_values(&name, &caps[2])?;
        groups += 1;

        if set.insert(name.clone(), values).is_some() {
            debug!("series {name} appeared again, keeping the later samples");
        }
    }

    debug!("extracted {} series from {groups} groups", set.len());
    Ok(set)
}

fn parse_values(name: &SeriesName, body: &str) -> Result<Vec<f64>, HistError> {
    body.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(HistError::Parse { series: name.clone(), token: token.to_string() }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &SeriesSet, name: &str) -> Vec<f64> {
        set.get(name).map(|s| s.values.clone()).unwrap_or_default()
    }

    #[test]
    fn test_extracts_named_arrays() {
        let input = "creates_tty=( 0 0 0 )\nfirst_prompt_lag_ms=( 21.344 20.981 22.710 )\n";
        let set = extract_series(input).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(values(&set, "creates_tty"), vec![0.0, 0.0, 0.0]);
        assert_eq!(values(&set, "first_prompt_lag_ms"), vec![21.344, 20.981, 22.710]);
    }

    #[test]
    fn test_whitespace_before_equals_and_inside_parens() {
        let set = extract_series("exit_time_ms =(1.5  2.5 )").unwrap();
        assert_eq!(values(&set, "exit_time_ms"), vec![1.5, 2.5]);
    }

    #[test]
    fn test_no_groups_yields_empty_set() {
        let set = extract_series("==> benchmarking login shell of user ...\nnothing here").unwrap();
        assert!(set.is_empty());
        assert!(extract_series("").unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_groups_are_ignored() {
        // Not a match at all: body contains letters.
        let set = extract_series("user=( romkatv )\nx=( 1 2 )").unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get("user").is_none());
    }

    #[test]
    fn test_last_match_wins() {
        let set = extract_series("a=( 1 2 3 ) b=( 4 ) a=( 7 )").unwrap();
        assert_eq!(values(&set, "a"), vec![7.0]);
        let names: Vec<&str> = set.names().map(SeriesName::as_str).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_malformed_token_fails_whole_extraction() {
        let err = extract_series("good=( 1 2 ) bad=( 1.2.3 4 )").unwrap_err();
        assert_eq!(err, HistError::Parse { series: SeriesName::new("bad"), token: "1.2.3".to_string() });

        let err = extract_series("lonely_dot=( . )").unwrap_err();
        assert!(matches!(err, HistError::Parse { .. }));
    }

    #[test]
    fn test_overflowing_literal_is_rejected() {
        let huge = format!("1{}", "0".repeat(400));
        let err = extract_series(&format!("exit_time_ms=( 0 1 {huge} )")).unwrap_err();
        assert_eq!(err, HistError::Parse { series: SeriesName::new("exit_time_ms"), token: huge });
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_group() {
        let set = extract_series("a=( \u{663} ) b=( 1 )").unwrap();
        assert!(set.get("a").is_none());
        assert_eq!(values(&set, "b"), vec![1.0]);
    }

    #[test]
    fn test_space_only_group_is_an_empty_series() {
        let set = extract_series("blank=( )").unwrap();
        assert_eq!(set.get("blank").map(|s| s.is_empty()), Some(true));
    }
}
