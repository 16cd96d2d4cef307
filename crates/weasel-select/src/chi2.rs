//! Chi-squared feature selection against class-independent expectation
//!
//! Follows the univariate chi-squared selection of scikit-learn's
//! `feature_selection` module, restricted to presence counts: for each
//! feature the number of samples per class containing it is compared to
//! the count expected under the class prior alone.

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::anova::zero_unselected;
use weasel_core::{BagOfBigrams, Error, Result};

/// Selects features whose per-class occurrence deviates from the
/// class-prior expectation by at least a caller-supplied chi-squared
/// critical value.
///
/// The threshold is a raw statistic cutoff at one degree of freedom, not
/// a p-value. Disqualified entries are zeroed in place, never removed.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquaredSelector {
    chi_limit: f64,
}

impl ChiSquaredSelector {
    /// Create a selector with a chi-squared critical-value threshold
    pub fn new(chi_limit: f64) -> Self {
        Self { chi_limit }
    }

    /// Run selection over `bags`, returning the number of retained
    /// features.
    pub fn select(&self, bags: &mut [BagOfBigrams]) -> Result<usize> {
        if bags.is_empty() {
            return Err(Error::empty_input());
        }

        // number of samples containing each feature, globally and per class
        let mut feature_count: HashMap<u64, u32> = HashMap::with_capacity(bags[0].counts.len());
        let mut observed: HashMap<i64, HashMap<u64, u32>> = HashMap::new();
        for bag in bags.iter() {
            let label = bag.label as i64;
            for (&key, &count) in &bag.counts {
                if count > 0 {
                    *feature_count.entry(key).or_insert(0) += 1;
                    *observed.entry(label).or_default().entry(key).or_insert(0) += 1;
                }
            }
        }

        // samples per class
        let mut class_counts: HashMap<i64, u32> = HashMap::new();
        for bag in bags.iter() {
            *class_counts.entry(bag.label as i64).or_insert(0) += 1;
        }

        // a feature is retained by the first class deviating enough from
        // the expected occurrence; insert-once keeps it independent of
        // how many classes qualify it
        let mut retained: HashSet<u64> = HashSet::with_capacity(feature_count.len());
        for (&label, &class_size) in &class_counts {
            let prior = class_size as f64 / bags.len() as f64;
            let class_observed = observed.get(&label);

            for (&key, &total) in &feature_count {
                let expected = prior * total as f64;
                if expected <= 0.0 {
                    // zero expectation never qualifies
                    continue;
                }
                let obs = class_observed
                    .and_then(|counts| counts.get(&key))
                    .copied()
                    .unwrap_or(0) as f64;
                let chi = obs - expected;
                let statistic = chi * chi / expected;

                if statistic > 0.0 && statistic >= self.chi_limit {
                    retained.insert(key);
                }
            }
        }

        zero_unselected(bags, &retained);
        debug!(
            "chi-squared: retained {} of {} features",
            retained.len(),
            feature_count.len()
        );
        Ok(retained.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(label: f64, entries: &[(u64, u32)]) -> BagOfBigrams {
        let mut bag = BagOfBigrams::with_capacity(entries.len(), label);
        for &(key, count) in entries {
            bag.counts.insert(key, count);
        }
        bag
    }

    #[test]
    fn test_class_exclusive_feature_retained() {
        // key 10 only ever occurs in class 0, key 20 occurs everywhere
        let mut bags = vec![
            bag(0.0, &[(10, 2), (20, 1)]),
            bag(0.0, &[(10, 1), (20, 1)]),
            bag(1.0, &[(20, 1)]),
            bag(1.0, &[(20, 1)]),
        ];
        let retained = ChiSquaredSelector::new(1.0).select(&mut bags).unwrap();

        assert_eq!(retained, 1);
        assert_eq!(bags[0].counts[&10], 2);
        for b in &bags {
            assert_eq!(b.counts[&20], 0);
        }
        // zeroed entries stay enumerable
        assert_eq!(bags[0].counts.len(), 2);
    }

    #[test]
    fn test_no_deviation_never_retained() {
        // observed equals expected in every class: statistic is exactly 0
        // and must fail the strict > 0 check
        let mut bags = vec![
            bag(0.0, &[(10, 1)]),
            bag(0.0, &[(10, 1)]),
            bag(1.0, &[(10, 1)]),
            bag(1.0, &[(10, 1)]),
        ];
        let retained = ChiSquaredSelector::new(0.0).select(&mut bags).unwrap();

        assert_eq!(retained, 0);
        for b in &bags {
            assert_eq!(b.counts[&10], 0);
        }
    }

    #[test]
    fn test_zeroed_entries_do_not_count_as_observations() {
        // a pre-zeroed entry must not contribute occurrences
        let mut bags = vec![
            bag(0.0, &[(10, 0)]),
            bag(1.0, &[(10, 3)]),
        ];
        let retained = ChiSquaredSelector::new(0.5).select(&mut bags).unwrap();

        // key 10 occurs once, only in class 1: expected 0.5, chi = 0.5,
        // statistic = 0.5 per class
        assert_eq!(retained, 1);
        assert_eq!(bags[1].counts[&10], 3);
        assert_eq!(bags[0].counts[&10], 0);
    }

    #[test]
    fn test_threshold_excludes_weak_features() {
        // same setup as above but a stricter limit
        let mut bags = vec![
            bag(0.0, &[(10, 0)]),
            bag(1.0, &[(10, 3)]),
        ];
        let retained = ChiSquaredSelector::new(3.84).select(&mut bags).unwrap();
        assert_eq!(retained, 0);
        assert_eq!(bags[1].counts[&10], 0);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(ChiSquaredSelector::new(1.0).select(&mut []).is_err());
    }
}
