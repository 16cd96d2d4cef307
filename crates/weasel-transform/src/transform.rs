//! Boundary trait for the external symbolic transform

use weasel_core::{Result, TimeSeries};

/// A windowed time-series-to-symbols transform (e.g. SFA).
///
/// Fitting is a constructor: a fitted transform is immutable and callable
/// per sample from any thread. The word generator fits one instance per
/// configured window length and caches it.
pub trait SymbolicTransform: Send + Sync + Sized {
    /// Train a transform on `samples` for one window length.
    ///
    /// `word_length` is the maximum word length words will ever be
    /// queried at; `alphabet_size` bounds the per-letter symbol range.
    /// Fit failure on degenerate input propagates to the caller.
    fn fit_windowing(
        samples: &[TimeSeries],
        window_length: usize,
        word_length: usize,
        alphabet_size: usize,
        norm_mean: bool,
        lower_bounding: bool,
    ) -> Result<Self>;

    /// One symbolic word per valid sliding-window start position.
    ///
    /// Callers guarantee `sample.len() >= window_length`; the returned
    /// words are bounded by `alphabet_size ^ word_length`.
    fn transform_words(&self, sample: &TimeSeries, word_length: usize) -> Vec<u32>;
}
