//! Insertion-ordered collection of series keyed by name.

use crate::domain::{Series, SeriesName};
use std::collections::HashMap;

/// Series extracted from one input, in first-appearance order.
///
/// Re-inserting an existing name replaces its samples but keeps the
/// position of the first occurrence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeriesSet {
    series: Vec<Series>,
    index: HashMap<SeriesName, usize>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a series. Returns the replaced samples, if any.
    pub fn insert(&mut self, name: SeriesName, values: Vec<f64>) -> Option<Vec<f64>> {
        if let Some(&slot) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.series[slot].values, values));
        }
        self.index.insert(name.clone(), self.series.len());
        self.series.push(Series { name, values });
        None
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.index.get(&SeriesName::new(name)).map(|&slot| &self.series[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &SeriesName> {
        self.series.iter().map(|s| &s.name)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
