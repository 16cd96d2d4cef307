//! Validated model configuration

use crate::encoding::{WordEncoder, MAX_WINDOW_LENGTH};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the WEASEL feature extraction stage.
///
/// Validated fail-fast via [`WeaselParams::validate`]; every component
/// assumes it only ever sees a validated configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaselParams {
    /// Maximum length of the symbolic words (letters per word)
    pub word_length: usize,
    /// Alphabet size of the symbolic transform; must be a power of two
    /// for the bit-packing to be lossless
    pub alphabet_size: usize,
    /// Window lengths to extract words at, each `1..=MAX_WINDOW_LENGTH`
    pub window_lengths: Vec<usize>,
    /// Whether the transform should normalize each window's mean to zero
    pub norm_mean: bool,
    /// Whether the Fourier transform should be normed (lower bounding)
    pub lower_bounding: bool,
}

impl WeaselParams {
    /// Check the configuration, reporting the first violation.
    pub fn validate(&self) -> Result<()> {
        // covers alphabet size, word length and the 64-bit key budget
        WordEncoder::new(self.alphabet_size, self.word_length)?;

        if self.window_lengths.is_empty() {
            return Err(Error::InvalidParameter(
                "At least one window length is required".to_string(),
            ));
        }
        for &w in &self.window_lengths {
            if w == 0 || w > MAX_WINDOW_LENGTH {
                return Err(Error::InvalidParameter(format!(
                    "Window length {w} must be in 1..={MAX_WINDOW_LENGTH}"
                )));
            }
        }
        Ok(())
    }

    /// Encoder for this configuration at the full word length
    pub fn encoder(&self) -> Result<WordEncoder> {
        WordEncoder::new(self.alphabet_size, self.word_length)
    }

    /// Encoder for a truncated word length (callers re-mask longer words
    /// down when scanning shorter word lengths)
    pub fn encoder_for(&self, word_length: usize) -> Result<WordEncoder> {
        WordEncoder::new(self.alphabet_size, word_length)
    }
}
