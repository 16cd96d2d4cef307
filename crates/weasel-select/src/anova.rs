//! One-way ANOVA feature selection over dictionary-indexed sparse counts

use log::debug;
use ordered_float::OrderedFloat;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use std::collections::{HashMap, HashSet};
use weasel_core::{BagOfBigrams, Dictionary, Error, Result};

/// Features qualify when their F-statistic strictly exceeds this cutoff.
pub const F_STATISTIC_CUTOFF: f64 = 0.5;

/// Selects features whose counts separate the class groups under a
/// one-way F-test.
///
/// Selection applies [`F_STATISTIC_CUTOFF`] to the raw statistic; the
/// configured p-value bound is advisory and only drives reporting of how
/// many features would pass the F-distribution's survival function at
/// that level. Disqualified entries are zeroed in every bag, never
/// removed, so downstream key enumeration stays stable.
#[derive(Debug, Clone, Copy)]
pub struct AnovaSelector {
    p_threshold: f64,
}

impl AnovaSelector {
    /// Create a selector with an advisory p-value bound
    pub fn new(p_threshold: f64) -> Self {
        Self { p_threshold }
    }

    /// Run selection over `bags`, growing `dict` with any unseen keys.
    ///
    /// Returns the number of retained features. Single-class inputs and
    /// zero-variance features produce NaN statistics and are excluded,
    /// never an error.
    pub fn select(&self, bags: &mut [BagOfBigrams], dict: &mut Dictionary) -> Result<usize> {
        if bags.is_empty() {
            return Err(Error::empty_input());
        }

        // translate every key to its dense dictionary index, grouped by label
        let mut highest_index = 0u32;
        let mut reverse: HashMap<u32, u64> = HashMap::new();
        let mut classes: HashMap<OrderedFloat<f64>, Vec<HashMap<u32, f64>>> = HashMap::new();
        for bag in bags.iter() {
            let mut indexed = HashMap::with_capacity(bag.counts.len());
            for (&key, &count) in &bag.counts {
                let index = dict.get_word_index(key);
                reverse.insert(index, key);
                indexed.insert(index, count as f64);
                highest_index = highest_index.max(index);
            }
            classes
                .entry(OrderedFloat(bag.label))
                .or_default()
                .push(indexed);
        }

        // a single class has no between-group variance to test
        if classes.len() < 2 {
            zero_unselected(bags, &HashSet::new());
            return Ok(0);
        }

        let n_features = highest_index as usize + 1;
        let n_samples = bags.len() as f64;
        let n_classes = classes.len() as f64;

        let f = f_oneway_sparse(n_features, classes.values(), n_samples, n_classes);

        // survival function of the F-distribution, reported against the
        // advisory p-value bound
        if let Ok(fdist) = FisherSnedecor::new(n_classes - 1.0, n_samples - n_classes) {
            let significant = f
                .iter()
                .filter(|s| s.is_finite())
                .filter(|&&s| 1.0 - fdist.cdf(s) <= self.p_threshold)
                .count();
            debug!(
                "anova: {significant} of {} features below p = {}",
                f.len(),
                self.p_threshold
            );
        }

        let mut best_words: HashSet<u64> = HashSet::new();
        for (index, &stat) in f.iter().enumerate() {
            if !stat.is_nan() && stat > F_STATISTIC_CUTOFF {
                if let Some(&key) = reverse.get(&(index as u32)) {
                    best_words.insert(key);
                }
            }
        }

        zero_unselected(bags, &best_words);
        debug!("anova: retained {} features", best_words.len());
        Ok(best_words.len())
    }
}

/// One-way F-statistic per dense feature index, treating entries absent
/// from a sample as zero counts.
fn f_oneway_sparse<'a, I>(n_features: usize, groups: I, n_samples: f64, n_classes: f64) -> Vec<f64>
where
    I: Iterator<Item = &'a Vec<HashMap<u32, f64>>>,
{
    let mut ss_alldata = vec![0.0f64; n_features];
    let mut sums: Vec<Vec<f64>> = Vec::new();
    let mut group_sizes: Vec<f64> = Vec::new();

    for group in groups {
        let mut group_sums = vec![0.0f64; n_features];
        for sample in group {
            for (&index, &value) in sample {
                ss_alldata[index as usize] += value * value;
                group_sums[index as usize] += value;
            }
        }
        group_sizes.push(group.len() as f64);
        sums.push(group_sums);
    }

    let df_between = n_classes - 1.0;
    let df_within = n_samples - n_classes;

    (0..n_features)
        .map(|i| {
            let total: f64 = sums.iter().map(|group_sums| group_sums[i]).sum();
            let square_of_sums = total * total;

            let ss_total = ss_alldata[i] - square_of_sums / n_samples;
            let mut ss_between = -square_of_sums / n_samples;
            for (group_sums, &size) in sums.iter().zip(&group_sizes) {
                ss_between += group_sums[i] * group_sums[i] / size;
            }
            let ss_within = ss_total - ss_between;

            // zero within-group variance divides to NaN or infinity;
            // NaN is excluded downstream
            (ss_between / df_between) / (ss_within / df_within)
        })
        .collect()
}

/// Zero every entry whose key is not in the retained set, in place.
pub(crate) fn zero_unselected(bags: &mut [BagOfBigrams], retained: &HashSet<u64>) {
    for bag in bags.iter_mut() {
        for (key, count) in bag.counts.iter_mut() {
            if !retained.contains(key) {
                *count = 0;
            }
        }
    }
}
