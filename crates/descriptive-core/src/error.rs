//! Error types for descriptive statistics
//!
//! Provides a unified error type for all descriptive-stats crates.

use thiserror::Error;

/// Core error type for descriptive-statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// Two sequences that must be paired elementwise differ in length
    #[error("Mismatched lengths: left sequence has {left} elements, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A sequence offered as a probability distribution does not sum to 1
    #[error("Not a probability distribution: elements sum to {sum}")]
    InvalidDistribution { sum: f64 },

    /// A confidence-level key with no entry in the z-score table
    #[error("Unknown confidence level: {0:?}")]
    UnknownConfidenceLevel(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a length mismatch between paired sequences
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Create an error for a sequence whose elements do not sum to 1
    pub fn invalid_distribution(sum: f64) -> Self {
        Self::InvalidDistribution { sum }
    }

    /// Create an error for a confidence level absent from the z-score table
    pub fn unknown_confidence_level(level: &str) -> Self {
        Self::UnknownConfidenceLevel(level.to_string())
    }
}
