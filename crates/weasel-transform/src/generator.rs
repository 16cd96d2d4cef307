//! Per-window-length word generation with a compute-once transform cache

use crate::transform::SymbolicTransform;
use log::{debug, trace};
use std::sync::OnceLock;
use weasel_core::{Result, TimeSeries, WeaselParams};

/// Number of fan-out workers derived from available parallelism.
///
/// Small machines get floored at 8 so the static round-robin assignment
/// still spreads many window lengths over more than a handful of blocks.
pub fn default_blocks() -> usize {
    let available = num_cpus::get();
    if available <= 4 {
        8
    } else {
        available
    }
}

/// Generates one symbolic word sequence per sample and window length.
///
/// The transform for each window-length index is fitted lazily on first
/// use and cached in a [`OnceLock`] slot, so concurrent first use is
/// safe: a lost race fits twice and discards one result, but the slot is
/// only ever observed in a fitted state.
#[derive(Debug)]
pub struct WordGenerator<T> {
    params: WeaselParams,
    blocks: usize,
    transforms: Vec<OnceLock<T>>,
}

impl<T: SymbolicTransform> WordGenerator<T> {
    /// Create a generator over a validated configuration.
    pub fn new(params: WeaselParams) -> Result<Self> {
        params.validate()?;
        let slots = params.window_lengths.len();
        Ok(Self {
            params,
            blocks: default_blocks(),
            transforms: (0..slots).map(|_| OnceLock::new()).collect(),
        })
    }

    /// Override the worker count used by [`WordGenerator::words`].
    pub fn with_blocks(mut self, blocks: usize) -> Self {
        self.blocks = blocks.max(1);
        self
    }

    /// The configuration this generator was built with.
    pub fn params(&self) -> &WeaselParams {
        &self.params
    }

    /// The fitted transform for one window-length index, fitting it on
    /// first use.
    fn fitted(&self, samples: &[TimeSeries], index: usize) -> Result<&T> {
        if let Some(transform) = self.transforms[index].get() {
            return Ok(transform);
        }

        let window_length = self.params.window_lengths[index];
        debug!("fitting symbolic transform for window length {window_length}");
        let fitted = T::fit_windowing(
            samples,
            window_length,
            self.params.word_length,
            self.params.alphabet_size,
            self.params.norm_mean,
            self.params.lower_bounding,
        )?;
        Ok(self.transforms[index].get_or_init(|| fitted))
    }

    /// Word sequences for every sample at one window-length index.
    ///
    /// Samples shorter than the window length yield an empty sequence,
    /// not an error.
    pub fn words_for_window(
        &self,
        samples: &[TimeSeries],
        index: usize,
    ) -> Result<Vec<Vec<u32>>> {
        let transform = self.fitted(samples, index)?;
        let window_length = self.params.window_lengths[index];

        let words = samples
            .iter()
            .map(|sample| {
                if sample.len() >= window_length {
                    transform.transform_words(sample, self.params.word_length)
                } else {
                    Vec::new()
                }
            })
            .collect();
        trace!("created words for window index {index}");
        Ok(words)
    }

    /// Word sequences for every configured window length, indexed
    /// `[window length index][sample]`.
    ///
    /// Window-length indices are statically assigned to workers by
    /// `index % blocks`; each worker writes disjoint positions of the
    /// result, so the final join is the only synchronization point.
    #[cfg(feature = "parallel")]
    pub fn words(&self, samples: &[TimeSeries]) -> Result<Vec<Vec<Vec<u32>>>> {
        use rayon::prelude::*;

        let windows = self.params.window_lengths.len();
        let blocks = self.blocks;
        let mut per_window: Vec<(usize, Result<Vec<Vec<u32>>>)> = (0..blocks.min(windows))
            .into_par_iter()
            .flat_map_iter(|id| {
                (0..windows)
                    .filter(move |w| w % blocks == id)
                    .map(|w| (w, self.words_for_window(samples, w)))
            })
            .collect();

        per_window.sort_by_key(|&(w, _)| w);
        per_window.into_iter().map(|(_, result)| result).collect()
    }

    /// Sequential fallback compiled when the `parallel` feature is off.
    #[cfg(not(feature = "parallel"))]
    pub fn words(&self, samples: &[TimeSeries]) -> Result<Vec<Vec<Vec<u32>>>> {
        (0..self.params.window_lengths.len())
            .map(|w| self.words_for_window(samples, w))
            .collect()
    }
}
