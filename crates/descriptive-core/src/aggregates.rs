//! Descriptive aggregates over data slices
//!
//! Every function here is a single pass over its input. Empty input yields
//! `None` rather than an error; degenerate-but-non-empty input follows IEEE
//! semantics (e.g. the Bessel-corrected variance of one observation is NaN).

/// Calculate the arithmetic mean of a slice
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::aggregates::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Calculate the population variance (divide by n)
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::aggregates::population_variance;
///
/// assert_eq!(population_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), Some(4.0));
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let sum_sq: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum();
    Some(sum_sq / data.len() as f64)
}

/// Calculate the sample variance (Bessel-corrected, divide by n - 1)
///
/// Returns `None` for empty slices. A single observation yields NaN, the
/// unguarded 0/0 of the Bessel division.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let sum_sq: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum();
    Some(sum_sq / (data.len() as f64 - 1.0))
}

/// Calculate the population standard deviation
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Calculate the sample standard deviation
///
/// # Examples
///
/// ```rust
/// use descriptive_core::aggregates::sample_std_dev;
///
/// let sd = sample_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Calculate the sum of squares, Σ xᵢ²
///
/// Returns `None` for empty slices.
pub fn sum_of_squares(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().map(|&x| x * x).sum())
}

/// Calculate the sum of squared deviations from the mean, Σ (xᵢ - x̄)²
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::aggregates::sum_of_squared_deviations;
///
/// assert_eq!(sum_of_squared_deviations(&[1.0, 2.0, 3.0]), Some(2.0));
/// ```
pub fn sum_of_squared_deviations(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    Some(
        data.iter()
            .map(|&x| {
                let diff = x - m;
                diff * diff
            })
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(mean(&[7.0]), Some(7.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_population_vs_sample_variance() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_variance(&data).unwrap(), 4.0);
        assert_relative_eq!(sample_variance(&data).unwrap(), 32.0 / 7.0);
    }

    #[test]
    fn test_single_observation_sample_variance_is_nan() {
        assert!(sample_variance(&[3.0]).unwrap().is_nan());
        assert_eq!(population_variance(&[3.0]), Some(0.0));
    }

    #[test]
    fn test_std_dev() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&data).unwrap(), 2.0);
        assert_relative_eq!(
            sample_std_dev(&data).unwrap(),
            (32.0f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(&[1.0, 2.0, 3.0]), Some(14.0));
        assert_eq!(sum_of_squares(&[]), None);
    }

    #[test]
    fn test_sum_of_squared_deviations() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sum_of_squared_deviations(&data).unwrap(), 32.0);
        assert_eq!(sum_of_squared_deviations(&[]), None);
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let data = [5.0; 10];
        assert_eq!(population_variance(&data), Some(0.0));
        assert_eq!(sum_of_squared_deviations(&data), Some(0.0));
    }
}
