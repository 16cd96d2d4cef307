//! Bit-packed 64-bit keys for symbolic words and bigrams
//!
//! A unigram key packs the masked word value above a fixed number of low
//! bits that carry the window-length index:
//!
//! ```text
//! | ... unused ... | word & mask            | window index   |
//!                   <-- used_bits * len --> <-- WINDOW_INDEX_BITS -->
//! ```
//!
//! A bigram key additionally places the masked previous word in the high
//! 32 bits: `prev << 32 | unigram`. Collision freedom across window
//! lengths and word/bigram forms rests entirely on this layout, so the
//! shift amounts are validated once at construction and never recomputed
//! inline.

use crate::error::{Error, Result};

/// Upper bound on configurable window lengths; fixes the number of low
/// bits reserved for the window index in every key.
pub const MAX_WINDOW_LENGTH: usize = 250;

/// Floor of the base-2 logarithm.
pub const fn binlog(value: u64) -> u32 {
    u64::BITS - 1 - value.leading_zeros()
}

/// Number of low key bits reserved for the window-length index.
pub const WINDOW_INDEX_BITS: u32 = binlog(MAX_WINDOW_LENGTH as u64) + 1;

/// Encoder for the bit-packed key layout of one (alphabet size, word
/// length) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEncoder {
    mask: u64,
}

impl WordEncoder {
    /// Create an encoder, validating that masked words and the window
    /// index together fit the 64-bit layout.
    pub fn new(alphabet_size: usize, word_length: usize) -> Result<Self> {
        if alphabet_size < 2 || !alphabet_size.is_power_of_two() {
            return Err(Error::InvalidParameter(format!(
                "Alphabet size {alphabet_size} must be a power of two greater than 1"
            )));
        }
        if word_length == 0 {
            return Err(Error::InvalidParameter(
                "Word length must be positive".to_string(),
            ));
        }

        let used_bits = binlog(alphabet_size as u64);
        let word_bits = used_bits * word_length as u32;
        if word_bits + WINDOW_INDEX_BITS > 63 {
            return Err(Error::key_overflow(word_bits, WINDOW_INDEX_BITS));
        }

        Ok(Self {
            mask: (1u64 << word_bits) - 1,
        })
    }

    /// The word value truncated to the configured word length
    pub fn masked(&self, word: u32) -> u64 {
        word as u64 & self.mask
    }

    /// Key for a single word observed at the given window-length index
    pub fn unigram(&self, word: u32, window_index: usize) -> u64 {
        (self.masked(word) << WINDOW_INDEX_BITS) | window_index as u64
    }

    /// Key combining a masked previous word with an already-encoded
    /// unigram key; the high 32 bits carry the previous word.
    pub fn bigram(&self, prev_word: u32, unigram_key: u64) -> u64 {
        (self.masked(prev_word) << 32) | unigram_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_binlog() {
        assert_eq!(binlog(1), 0);
        assert_eq!(binlog(2), 1);
        assert_eq!(binlog(4), 2);
        assert_eq!(binlog(250), 7);
        assert_eq!(binlog(256), 8);
    }

    #[test]
    fn test_window_index_bits_cover_max_window() {
        // every admissible window index fits below the word payload
        assert!(MAX_WINDOW_LENGTH < (1 << WINDOW_INDEX_BITS));
        assert_eq!(WINDOW_INDEX_BITS, 8);
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        assert!(WordEncoder::new(3, 4).is_err());
        assert!(WordEncoder::new(1, 4).is_err());
        assert!(WordEncoder::new(0, 4).is_err());
        assert!(WordEncoder::new(4, 0).is_err());
    }

    #[test]
    fn test_rejects_key_overflow() {
        // 2 bits per letter * 28 letters + 8 window bits = 64 > 63
        assert!(WordEncoder::new(4, 28).is_err());
        assert!(WordEncoder::new(4, 27).is_ok());
    }

    #[test]
    fn test_unigram_layout() {
        let enc = WordEncoder::new(4, 1).unwrap();
        // alphabet 4 -> 2 used bits, word length 1 -> mask 0b11
        assert_eq!(enc.masked(0b111), 0b11);
        assert_eq!(enc.unigram(3, 5), (3 << WINDOW_INDEX_BITS) | 5);
    }

    #[test]
    fn test_bigram_layout() {
        let enc = WordEncoder::new(4, 2).unwrap();
        let uni = enc.unigram(9, 1);
        assert_eq!(enc.bigram(7, uni), (7u64 << 32) | uni);
    }

    proptest! {
        /// Distinct (window index, masked word) pairs never collide as
        /// long as the validated bit budget holds.
        #[test]
        fn prop_unigram_collision_free(
            exp in 1u32..8,
            word_length in 1usize..6,
            words in prop::collection::vec((0u32..4096, 0usize..200), 1..64),
        ) {
            let alphabet_size = 1usize << exp;
            let enc = match WordEncoder::new(alphabet_size, word_length) {
                Ok(enc) => enc,
                Err(_) => return Ok(()), // over the bit budget, rejected
            };

            let mut seen = HashSet::new();
            let mut keys = HashSet::new();
            for &(word, w) in &words {
                if seen.insert((enc.masked(word), w)) {
                    prop_assert!(keys.insert(enc.unigram(word, w)));
                }
            }
        }
    }
}
