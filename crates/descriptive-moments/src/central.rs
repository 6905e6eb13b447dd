//! Central moments of a sample

use descriptive_core::mean;

/// Calculate the n-th central moment, the mean of (xᵢ - x̄)ⁿ
///
/// Returns `None` for empty samples. The first central moment is always
/// zero (up to rounding), and the second is the population variance.
///
/// # Examples
///
/// ```rust
/// use descriptive_moments::central_moment;
///
/// let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(central_moment(&sample, 1), Some(0.0));
/// assert_eq!(central_moment(&sample, 2), Some(2.0));
/// assert_eq!(central_moment(&[], 2), None);
/// ```
pub fn central_moment(sample: &[f64], order: i32) -> Option<f64> {
    let m = mean(sample)?;
    let sum: f64 = sample.iter().map(|&x| (x - m).powi(order)).sum();
    Some(sum / sample.len() as f64)
}
