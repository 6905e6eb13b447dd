//! Skewness under three normalizations
//!
//! All three measure the same asymmetry; they differ only in how the third
//! central moment is scaled:
//!
//! - [`population_skewness`]: μ₃ / μ₂^(3/2), the population coefficient
//!   (spreadsheet `SKEW.P`)
//! - [`sample_skewness`]: the bias-adjusted sample coefficient
//!   (spreadsheet `SKEW`)
//! - [`skewness`]: Σ(xᵢ - x̄)³ / ((n - 1)·s³) with s the Bessel-corrected
//!   standard deviation

use crate::central::central_moment;
use descriptive_core::{mean, sample_std_dev};

/// Calculate the population skewness, μ₃ / μ₂^(3/2)
///
/// Returns `None` for empty samples. A sample with zero variance yields
/// NaN (0/0).
pub fn population_skewness(sample: &[f64]) -> Option<f64> {
    let m2 = central_moment(sample, 2)?;
    let m3 = central_moment(sample, 3)?;
    Some(m3 / m2.powf(1.5))
}

/// Calculate the sample skewness
///
/// Scales [`population_skewness`] by √(n(n-1)) / (n - 2). The adjustment
/// divides by zero at n = 2, which propagates as IEEE NaN or infinity
/// rather than an error.
pub fn sample_skewness(sample: &[f64]) -> Option<f64> {
    let g1 = population_skewness(sample)?;
    let n = sample.len() as f64;
    Some(g1 * (n * (n - 1.0)).sqrt() / (n - 2.0))
}

/// Calculate skewness normalized by the sample standard deviation,
/// Σ(xᵢ - x̄)³ / ((n - 1)·s³)
///
/// Returns `None` for empty samples.
pub fn skewness(sample: &[f64]) -> Option<f64> {
    let m = mean(sample)?;
    let s = sample_std_dev(sample)?;
    let n = sample.len() as f64;
    let cubed_deviations: f64 = sample.iter().map(|&x| (x - m).powi(3)).sum();
    Some(cubed_deviations / ((n - 1.0) * s.powi(3)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // Reference values from the scipy docs for `skew`
    const SCIPY_SAMPLE: [f64; 8] = [2.0, 8.0, 0.0, 4.0, 1.0, 9.0, 9.0, 0.0];

    #[test]
    fn test_population_skewness_scipy_reference() {
        assert_relative_eq!(
            population_skewness(&SCIPY_SAMPLE).unwrap(),
            0.2650554122698573,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sample_skewness_adjustment() {
        // g1 * sqrt(8 * 7) / 6
        let expected = 0.2650554122698573 * 56.0f64.sqrt() / 6.0;
        assert_relative_eq!(
            sample_skewness(&SCIPY_SAMPLE).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bessel_normalized_skewness() {
        // Equals the population coefficient scaled by sqrt((n - 1) / n)
        let expected = 0.2650554122698573 * (7.0f64 / 8.0).sqrt();
        assert_relative_eq!(skewness(&SCIPY_SAMPLE).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetric_sample_has_zero_skewness() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(population_skewness(&sample).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(skewness(&sample).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_right_skewed_sample_is_positive() {
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 15.0, 20.0];
        assert!(population_skewness(&sample).unwrap() > 0.0);
        assert!(sample_skewness(&sample).unwrap() > 0.0);
        assert!(skewness(&sample).unwrap() > 0.0);
    }

    #[test]
    fn test_sample_skewness_undefined_at_n2() {
        // 0 * inf from the (n - 2) division
        assert!(sample_skewness(&[1.0, 2.0]).unwrap().is_nan());
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(population_skewness(&[]), None);
        assert_eq!(sample_skewness(&[]), None);
        assert_eq!(skewness(&[]), None);
    }
}
