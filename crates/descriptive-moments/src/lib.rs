//! Central moments, skewness, kurtosis, and their standard errors
//!
//! This crate provides the classical moment-based shape statistics over
//! samples of `f64` values:
//!
//! - Central moments of arbitrary order
//! - Skewness under population, sample, and Bessel-corrected normalizations
//! - Excess kurtosis and its tail-weight classification
//!   (platykurtic / mesokurtic / leptokurtic)
//! - Standard errors of skewness (SES), kurtosis (SEK), and the mean (SEM)
//!
//! # Conventions
//!
//! Functions over a sample return `Option<f64>` and yield `None` on empty
//! input. Degenerate non-empty input (zero variance, sample sizes at which
//! an adjustment divides by zero) is not guarded: it propagates IEEE
//! NaN/infinity, uniformly across all formulas in this crate.
//!
//! # Example
//!
//! ```rust
//! use descriptive_moments::{kurtosis, population_skewness, sem};
//!
//! let sample = vec![2.0, 8.0, 0.0, 4.0, 1.0, 9.0, 9.0, 0.0];
//! let skew = population_skewness(&sample).unwrap();
//! assert!(skew > 0.0); // tail to the right
//! let k = kurtosis(&sample).unwrap();
//! assert!(k < 0.0); // flatter than normal
//! assert!(sem(&sample).unwrap() > 0.0);
//! ```

pub mod central;
pub mod kurtosis;
pub mod skewness;
pub mod standard_error;

// Re-exports
pub use central::central_moment;
pub use kurtosis::{
    classify_kurtosis, is_leptokurtic, is_mesokurtic, is_platykurtic, kurtosis, Tailedness,
};
pub use skewness::{population_skewness, sample_skewness, skewness};
pub use standard_error::{
    kurtosis_standard_error, sem, skewness_standard_error, standard_error_of_the_mean,
};
