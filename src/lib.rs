//! Descriptive statistics toolkit
//!
//! This crate re-exports the descriptive-stats workspace: classical
//! moment-based shape statistics and distribution comparisons over plain
//! `f64` slices.
//!
//! # Crates
//!
//! - [`descriptive_core`]: error type, aggregates (mean, variance,
//!   standard deviation, sums of squares), elementwise helpers
//! - [`descriptive_moments`]: central moments, skewness, kurtosis,
//!   standard errors (SES, SEK, SEM)
//! - [`descriptive_confidence`]: z-score table and normal-approximation
//!   confidence intervals
//! - [`descriptive_divergence`]: Bhattacharyya distance and
//!   Kullback-Leibler divergence
//!
//! # Conventions
//!
//! Sample statistics return `Option<f64>` and yield `None` on empty
//! input. Validation failures (mismatched distribution lengths, sequences
//! that do not sum to 1, unknown confidence levels) are [`Error`] values.
//! Degenerate-but-valid input (zero variance, sample sizes where a
//! bias adjustment divides by zero) propagates IEEE NaN/infinity.
//!
//! # Example
//!
//! ```rust
//! use descriptive_stats::{confidence_interval, kurtosis, mean, sample_std_dev, sample_skewness};
//!
//! let sample = vec![2.0, 8.0, 0.0, 4.0, 1.0, 9.0, 9.0, 0.0];
//!
//! let m = mean(&sample).unwrap();
//! let sd = sample_std_dev(&sample).unwrap();
//! assert!(sample_skewness(&sample).unwrap() > 0.0);
//! assert!(kurtosis(&sample).unwrap() < 0.0);
//!
//! let ci = confidence_interval(m, sample.len(), sd, "95").unwrap();
//! assert!(ci.contains(m));
//! ```

pub use descriptive_core;
pub use descriptive_moments;
pub use descriptive_confidence;
pub use descriptive_divergence;

// Flat re-exports of the full API surface
pub use descriptive_core::{
    mean, multiply, population_std_dev, population_variance, sample_std_dev, sample_variance,
    square, sqrt, sum_of_squared_deviations, sum_of_squares, Error, Result,
};
pub use descriptive_moments::{
    central_moment, classify_kurtosis, is_leptokurtic, is_mesokurtic, is_platykurtic, kurtosis,
    kurtosis_standard_error, population_skewness, sample_skewness, sem, skewness,
    skewness_standard_error, standard_error_of_the_mean, Tailedness,
};
pub use descriptive_confidence::{confidence_interval, known_levels, z_score, ConfidenceInterval};
pub use descriptive_divergence::{bhattacharyya_distance, kullback_leibler_divergence};
