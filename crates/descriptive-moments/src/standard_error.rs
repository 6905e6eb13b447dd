//! Standard errors of skewness, kurtosis, and the mean
//!
//! The skewness and kurtosis formulas are functions of the sample size
//! alone. Their denominators vanish at degenerate sizes (n = 2 for SES,
//! n = 3 for SEK); those divisions are not guarded and propagate IEEE
//! infinity, matching the convention used throughout this workspace for
//! small-n degeneracies.

use descriptive_core::sample_std_dev;

/// Standard error of skewness (SES), √(6n(n-1) / ((n-2)(n+1)(n+3)))
///
/// Returns IEEE infinity at n = 2.
///
/// # Examples
///
/// ```rust
/// use descriptive_moments::skewness_standard_error;
///
/// assert!((skewness_standard_error(8) - 0.7521).abs() < 1e-4);
/// ```
pub fn skewness_standard_error(n: usize) -> f64 {
    let n = n as f64;
    (6.0 * n * (n - 1.0) / ((n - 2.0) * (n + 1.0) * (n + 3.0))).sqrt()
}

/// Standard error of kurtosis (SEK), 2·SES(n)·√((n²-1) / ((n-3)(n+5)))
///
/// Returns IEEE infinity at n = 3 (and inherits the SES degeneracy at
/// n = 2).
pub fn kurtosis_standard_error(n: usize) -> f64 {
    let nf = n as f64;
    2.0 * skewness_standard_error(n) * ((nf * nf - 1.0) / ((nf - 3.0) * (nf + 5.0))).sqrt()
}

/// Standard error of the mean: sample standard deviation / √n
///
/// Returns `None` for empty samples. A single observation yields NaN
/// through the Bessel-corrected standard deviation.
pub fn standard_error_of_the_mean(sample: &[f64]) -> Option<f64> {
    let s = sample_std_dev(sample)?;
    Some(s / (sample.len() as f64).sqrt())
}

/// Short alias for [`standard_error_of_the_mean`]
pub fn sem(sample: &[f64]) -> Option<f64> {
    standard_error_of_the_mean(sample)
}
