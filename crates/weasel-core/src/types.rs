//! Core data types: labeled time series and sparse bags of bigram counts

use std::collections::HashMap;

/// A labeled, immutable time series sample.
///
/// The label is a real number standing in for a categorical class label;
/// the core only ever reads it back out for grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    data: Vec<f64>,
    label: f64,
}

impl TimeSeries {
    /// Create a new labeled time series
    pub fn new(data: Vec<f64>, label: f64) -> Self {
        Self { data, label }
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw observations
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The class label
    pub fn label(&self) -> f64 {
        self.label
    }
}

/// Per-sample sparse histogram over unigram and bigram keys.
///
/// Keys are the bit-packed 64-bit values produced by
/// [`WordEncoder`](crate::WordEncoder). Selectors zero disqualified entries
/// in place but never remove them, so the key set stays stable for
/// downstream enumeration.
#[derive(Debug, Clone)]
pub struct BagOfBigrams {
    /// Occurrence count per bit-packed key
    pub counts: HashMap<u64, u32>,
    /// Class label of the originating sample
    pub label: f64,
}

impl BagOfBigrams {
    /// Create an empty bag with a capacity hint
    pub fn with_capacity(capacity: usize, label: f64) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
            label,
        }
    }

    /// Add-or-increment semantics: repeated keys accumulate
    pub fn increment(&mut self, key: u64) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Number of distinct keys (zeroed entries included)
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no key was ever recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_series_accessors() {
        let ts = TimeSeries::new(vec![1.0, 2.0, 3.0], 7.0);
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
        assert_eq!(ts.data(), &[1.0, 2.0, 3.0]);
        assert_eq!(ts.label(), 7.0);

        let empty = TimeSeries::new(vec![], 0.0);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_bag_increment_accumulates() {
        let mut bag = BagOfBigrams::with_capacity(4, 1.0);
        bag.increment(42);
        bag.increment(42);
        bag.increment(7);
        assert_eq!(bag.counts[&42], 2);
        assert_eq!(bag.counts[&7], 1);
        assert_eq!(bag.len(), 2);
    }
}
