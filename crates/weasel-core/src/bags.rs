//! Bag-of-bigrams construction from symbolic word sequences
//!
//! Turns each sample's word sequence into a sparse histogram of unigram
//! and bigram keys. The "previous" word of a bigram is looked up a full
//! window length of sliding positions back, not one position back: the
//! pair then approximates two tokens a window apart in the original
//! series, a deliberately coarser long-range dependency.

use crate::encoding::WordEncoder;
use crate::error::Result;
use crate::params::WeaselParams;
use crate::types::{BagOfBigrams, TimeSeries};

/// Builds per-sample bags of unigram and bigram counts.
#[derive(Debug, Clone)]
pub struct BagBuilder<'a> {
    params: &'a WeaselParams,
}

impl<'a> BagBuilder<'a> {
    /// Create a builder over a validated configuration
    pub fn new(params: &'a WeaselParams) -> Self {
        Self { params }
    }

    /// Bags for a single window length.
    ///
    /// `words` holds one word sequence per sample, produced at window
    /// length index `w`; `word_length` may be shorter than the configured
    /// maximum, in which case words are re-masked down.
    pub fn build_one(
        &self,
        words: &[Vec<u32>],
        samples: &[TimeSeries],
        w: usize,
        word_length: usize,
    ) -> Result<Vec<BagOfBigrams>> {
        let encoder = self.params.encoder_for(word_length)?;
        let window_length = self.params.window_lengths[w];

        let mut bags = Vec::with_capacity(samples.len());
        for (sample, sequence) in samples.iter().zip(words) {
            let mut bag = BagOfBigrams::with_capacity(sequence.len() * 2, sample.label());
            self.accumulate(&mut bag, sequence, &encoder, w, window_length);
            bags.push(bag);
        }
        Ok(bags)
    }

    /// Bags merged over all window lengths, the joint feature bag handed
    /// to the downstream classifier.
    ///
    /// `words` is indexed `[window length index][sample]`.
    pub fn build_all(
        &self,
        words: &[Vec<Vec<u32>>],
        samples: &[TimeSeries],
        word_length: usize,
    ) -> Result<Vec<BagOfBigrams>> {
        let encoder = self.params.encoder_for(word_length)?;

        let mut bags = Vec::with_capacity(samples.len());
        for (j, sample) in samples.iter().enumerate() {
            let hint = words.first().map_or(0, |first| first[j].len() * 6);
            let mut bag = BagOfBigrams::with_capacity(hint, sample.label());
            for (w, window_length) in self.params.window_lengths.iter().enumerate() {
                self.accumulate(&mut bag, &words[w][j], &encoder, w, *window_length);
            }
            bags.push(bag);
        }
        Ok(bags)
    }

    fn accumulate(
        &self,
        bag: &mut BagOfBigrams,
        sequence: &[u32],
        encoder: &WordEncoder,
        w: usize,
        window_length: usize,
    ) {
        for offset in 0..sequence.len() {
            let unigram = encoder.unigram(sequence[offset], w);
            bag.increment(unigram);

            if offset >= window_length {
                let prev = sequence[offset - window_length];
                if encoder.masked(prev) != 0 {
                    bag.increment(encoder.bigram(prev, unigram));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::WINDOW_INDEX_BITS;

    fn params(window_lengths: Vec<usize>) -> WeaselParams {
        WeaselParams {
            word_length: 1,
            alphabet_size: 4,
            window_lengths,
            norm_mean: false,
            lower_bounding: true,
        }
    }

    #[test]
    fn test_repeated_word_accumulates() {
        // [1, 1, 1] at window index 0, word length covering all bits:
        // one unigram key with count 3, never three keys with count 1
        let p = params(vec![200]);
        let builder = BagBuilder::new(&p);
        let samples = vec![TimeSeries::new(vec![0.0; 8], 1.0)];
        let words = vec![vec![1u32, 1, 1]];

        let bags = builder.build_one(&words, &samples, 0, 1).unwrap();
        assert_eq!(bags[0].counts.len(), 1);
        assert_eq!(bags[0].counts[&(1u64 << WINDOW_INDEX_BITS)], 3);
    }

    #[test]
    fn test_empty_sequence_yields_empty_bag() {
        let p = params(vec![8]);
        let builder = BagBuilder::new(&p);
        let samples = vec![TimeSeries::new(vec![0.0; 2], 1.0)];
        let words = vec![Vec::new()];

        let bags = builder.build_one(&words, &samples, 0, 1).unwrap();
        assert!(bags[0].is_empty());
        assert_eq!(bags[0].label, 1.0);
    }

    #[test]
    fn test_bigram_skips_a_full_window_length() {
        // window length 2: the bigram partner of offset 2 is offset 0,
        // not offset 1
        let p = params(vec![2]);
        let builder = BagBuilder::new(&p);
        let samples = vec![TimeSeries::new(vec![0.0; 8], 1.0)];
        let words = vec![vec![3u32, 1, 2]];

        let bags = builder.build_one(&words, &samples, 0, 1).unwrap();
        let enc = p.encoder().unwrap();
        let expected = enc.bigram(3, enc.unigram(2, 0));
        assert_eq!(bags[0].counts[&expected], 1);
        // no bigram pairing offsets 1 and 2
        let adjacent = enc.bigram(1, enc.unigram(2, 0));
        assert!(!bags[0].counts.contains_key(&adjacent));
    }

    #[test]
    fn test_zero_previous_word_emits_no_bigram() {
        let p = params(vec![1]);
        let builder = BagBuilder::new(&p);
        let samples = vec![TimeSeries::new(vec![0.0; 8], 1.0)];
        // previous word 0 at offset 0 must suppress the bigram at offset 1
        let words = vec![vec![0u32, 2, 2]];

        let bags = builder.build_one(&words, &samples, 0, 1).unwrap();
        let enc = p.encoder().unwrap();
        // unigrams for 0, 2, 2 and exactly one bigram (2 -> 2)
        assert_eq!(bags[0].counts[&enc.unigram(0, 0)], 1);
        assert_eq!(bags[0].counts[&enc.unigram(2, 0)], 2);
        assert_eq!(bags[0].counts[&enc.bigram(2, enc.unigram(2, 0))], 1);
        assert_eq!(bags[0].counts.len(), 3);
    }

    #[test]
    fn test_merged_bags_share_keys_across_windows() {
        let p = params(vec![2, 3]);
        let builder = BagBuilder::new(&p);
        let samples = vec![TimeSeries::new(vec![0.0; 8], 2.0)];
        let words = vec![vec![vec![1u32, 2]], vec![vec![1u32, 2]]];

        let bags = builder.build_all(&words, &samples, 1).unwrap();
        let enc = p.encoder().unwrap();
        // same word at different window indices stays distinct
        assert_eq!(bags[0].counts[&enc.unigram(1, 0)], 1);
        assert_eq!(bags[0].counts[&enc.unigram(1, 1)], 1);
        assert_eq!(bags[0].counts.len(), 4);
    }
}
