//! Dictionary condensing the sparse 64-bit key space into dense indices

use crate::types::BagOfBigrams;
use std::collections::HashMap;

/// Maps each observed bigram key to a dense integer index.
///
/// Indices are assigned lazily on first sight, start at 1 and grow
/// monotonically; an index is never reused while the dictionary lives.
/// The dense range `1..=size()` lets the selectors work on plain arrays
/// instead of hash maps.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    map: HashMap<u64, u32>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Dense index for `key`, assigning `size() + 1` on first sight
    pub fn get_word_index(&mut self, key: u64) -> u32 {
        let next = self.map.len() as u32 + 1;
        *self.map.entry(key).or_insert(next)
    }

    /// Number of distinct keys seen
    pub fn size(&self) -> usize {
        self.map.len()
    }

    /// True if the key already has an index
    pub fn contains(&self, key: u64) -> bool {
        self.map.contains_key(&key)
    }

    /// Drop all mappings; used between independent training runs so
    /// indices do not leak across models
    pub fn reset(&mut self) {
        self.map.clear();
    }

    /// Rebuild every bag keeping only entries whose key is known to this
    /// dictionary and whose count is positive.
    ///
    /// Lets a chi-squared-trained dictionary prune a separately built bag
    /// (e.g. at prediction time) without recomputing any statistics.
    pub fn filter_chi_squared(&self, bags: &mut [BagOfBigrams]) {
        for bag in bags.iter_mut() {
            let old = std::mem::take(&mut bag.counts);
            bag.counts = old
                .into_iter()
                .filter(|&(key, count)| count > 0 && self.map.contains_key(&key))
                .collect();
        }
    }
}
