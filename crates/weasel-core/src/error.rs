//! Error types for the WEASEL feature extraction pipeline
//!
//! Provides a unified error type for all weasel crates.

use thiserror::Error;

/// Core error type for WEASEL operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Failure while fitting the symbolic transform
    #[error("Transform fit error: {0}")]
    TransformFit(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a key layout that does not fit into 64 bits
    pub fn key_overflow(word_bits: u32, window_bits: u32) -> Self {
        Self::InvalidParameter(format!(
            "Key layout overflow: {word_bits} word bits + {window_bits} window bits exceed 63"
        ))
    }
}
