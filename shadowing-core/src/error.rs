//! Core error types

use thiserror::Error;

/// Errors produced by the segmentation core
#[derive(Error, Debug)]
pub enum CoreError {
    /// Segmentation could not complete
    #[error("segmentation failed during {operation}: {reason}")]
    Segmentation {
        /// The operation that was running when the failure occurred
        operation: String,
        /// Description of the underlying fault
        reason: String,
    },

    /// Passage is below the minimum word count
    #[error("passage too short: {words} words (minimum {min})", min = MIN_PASSAGE_WORDS)]
    PassageTooShort {
        /// Word count of the rejected passage
        words: usize,
    },

    /// Passage is above the maximum word count
    #[error("passage too long: {words} words (maximum {max})", max = MAX_PASSAGE_WORDS)]
    PassageTooLong {
        /// Word count of the rejected passage
        words: usize,
    },
}

/// Minimum accepted passage length in words
pub const MIN_PASSAGE_WORDS: usize = 50;

/// Maximum accepted passage length in words
pub const MAX_PASSAGE_WORDS: usize = 300;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
