//! Core types and bag-of-bigrams construction for WEASEL
//!
//! This crate holds everything the feature-extraction pipeline shares:
//!
//! - [`TimeSeries`] and [`BagOfBigrams`] data types
//! - the validated [`WeaselParams`] configuration
//! - the bit-packed 64-bit key layout ([`WordEncoder`])
//! - the [`BagBuilder`] turning word sequences into sparse histograms
//! - the [`Dictionary`] condensing keys into dense indices
//!
//! # Example
//!
//! ```rust
//! use weasel_core::{BagBuilder, TimeSeries, WeaselParams};
//!
//! let params = WeaselParams {
//!     word_length: 2,
//!     alphabet_size: 4,
//!     window_lengths: vec![2],
//!     norm_mean: false,
//!     lower_bounding: true,
//! };
//! params.validate().unwrap();
//!
//! let samples = vec![TimeSeries::new(vec![1.0, 2.0, 1.0, 2.0], 0.0)];
//! // one word per sliding-window position, from the symbolic transform
//! let words = vec![vec![1, 2, 1]];
//!
//! let bags = BagBuilder::new(&params)
//!     .build_one(&words, &samples, 0, 2)
//!     .unwrap();
//! assert!(!bags[0].is_empty());
//! ```

pub mod bags;
pub mod dictionary;
pub mod encoding;
pub mod error;
pub mod params;
pub mod types;

pub use bags::BagBuilder;
pub use dictionary::Dictionary;
pub use encoding::{binlog, WordEncoder, MAX_WINDOW_LENGTH, WINDOW_INDEX_BITS};
pub use error::{Error, Result};
pub use params::WeaselParams;
pub use types::{BagOfBigrams, TimeSeries};
