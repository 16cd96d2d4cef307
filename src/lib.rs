//! WEASEL bag-of-bigrams feature extraction and selection
//!
//! The feature-engineering stage of the WEASEL time-series classifier
//! (Schäfer & Leser, CIKM 2017): every time series becomes a sparse bag
//! of symbolic-word and symbolic-bigram counts across several window
//! lengths, and a statistical test (one-way ANOVA or chi-squared) prunes
//! that vocabulary down to the class-discriminative subset.
//!
//! The symbolic transform itself (SFA) is a plug-in boundary; see
//! [`SymbolicTransform`]. The [`Weasel`] model ties the pieces together:
//!
//! ```text
//! samples -> WordGenerator -> word sequences -> BagBuilder
//!         -> bags of bigrams -> AnovaSelector | ChiSquaredSelector
//!         -> pruned bags + Dictionary -> downstream classifier
//! ```

use log::debug;

pub use weasel_core::{
    binlog, BagBuilder, BagOfBigrams, Dictionary, Error, Result, TimeSeries, WeaselParams,
    WordEncoder, MAX_WINDOW_LENGTH, WINDOW_INDEX_BITS,
};
pub use weasel_select::{AnovaSelector, ChiSquaredSelector, F_STATISTIC_CUTOFF};
pub use weasel_transform::{default_blocks, SymbolicTransform, WordGenerator};

/// The WEASEL model: word generation, bag construction and feature
/// selection over one shared dictionary.
///
/// One instance corresponds to one trained feature space; [`Weasel::reset`]
/// clears the dictionary between independent training runs.
#[derive(Debug)]
pub struct Weasel<T> {
    generator: WordGenerator<T>,
    dict: Dictionary,
}

impl<T: SymbolicTransform> Weasel<T> {
    /// Create a model over a validated configuration.
    pub fn new(params: WeaselParams) -> Result<Self> {
        Ok(Self {
            generator: WordGenerator::new(params)?,
            dict: Dictionary::new(),
        })
    }

    /// The configuration this model was built with.
    pub fn params(&self) -> &WeaselParams {
        self.generator.params()
    }

    /// The dictionary grown during ANOVA selection.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Word sequences for every configured window length.
    pub fn create_words(&self, samples: &[TimeSeries]) -> Result<Vec<Vec<Vec<u32>>>> {
        self.generator.words(samples)
    }

    /// Word sequences for a single window-length index.
    pub fn create_words_for_window(
        &self,
        samples: &[TimeSeries],
        index: usize,
    ) -> Result<Vec<Vec<u32>>> {
        self.generator.words_for_window(samples, index)
    }

    /// Per-sample bags for one window length, used for per-window
    /// chi-squared selection before global pruning.
    pub fn create_bag_of_patterns_for_window(
        &self,
        words: &[Vec<u32>],
        samples: &[TimeSeries],
        w: usize,
        word_length: usize,
    ) -> Result<Vec<BagOfBigrams>> {
        BagBuilder::new(self.params()).build_one(words, samples, w, word_length)
    }

    /// Per-sample bags merged over all window lengths, the joint feature
    /// bag consumed downstream.
    pub fn create_bag_of_patterns(
        &self,
        words: &[Vec<Vec<u32>>],
        samples: &[TimeSeries],
        word_length: usize,
    ) -> Result<Vec<BagOfBigrams>> {
        BagBuilder::new(self.params()).build_all(words, samples, word_length)
    }

    /// ANOVA feature selection; grows the model's dictionary and zeroes
    /// non-discriminative entries in place.
    pub fn train_anova(&mut self, bags: &mut [BagOfBigrams], p_threshold: f64) -> Result<usize> {
        AnovaSelector::new(p_threshold).select(bags, &mut self.dict)
    }

    /// Chi-squared feature selection; zeroes non-discriminative entries
    /// in place.
    pub fn train_chi_squared(&mut self, bags: &mut [BagOfBigrams], chi_limit: f64) -> Result<usize> {
        ChiSquaredSelector::new(chi_limit).select(bags)
    }

    /// Prune separately built bags (e.g. at prediction time) down to the
    /// keys the trained dictionary knows.
    pub fn filter_with_dictionary(&self, bags: &mut [BagOfBigrams]) {
        self.dict.filter_chi_squared(bags);
    }

    /// Record the selected vocabulary of already-pruned bags in the
    /// dictionary, so prediction-time bags can be filtered against it.
    pub fn remember_vocabulary(&mut self, bags: &[BagOfBigrams]) {
        for bag in bags {
            for (&key, &count) in &bag.counts {
                if count > 0 {
                    self.dict.get_word_index(key);
                }
            }
        }
        debug!("dictionary holds {} selected features", self.dict.size());
    }

    /// Clear the dictionary between independent training runs.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
