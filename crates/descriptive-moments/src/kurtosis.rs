//! Excess kurtosis and tail-weight classification

use crate::central::central_moment;

/// Tail-weight classification by the sign of excess kurtosis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tailedness {
    /// Negative excess kurtosis: flatter tails than a normal distribution
    Platykurtic,
    /// Zero excess kurtosis: normal-like tails
    Mesokurtic,
    /// Positive excess kurtosis: heavier tails than a normal distribution
    Leptokurtic,
}

/// Calculate the excess kurtosis, μ₄/μ₂² - 3
///
/// Returns `None` for empty samples. A sample with zero variance yields
/// NaN (0/0). The normal distribution has excess kurtosis 0.
///
/// # Examples
///
/// ```rust
/// use descriptive_moments::kurtosis;
///
/// // Flat-tailed sample
/// assert_eq!(kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(-1.3));
/// ```
pub fn kurtosis(sample: &[f64]) -> Option<f64> {
    let m2 = central_moment(sample, 2)?;
    let m4 = central_moment(sample, 4)?;
    Some(m4 / (m2 * m2) - 3.0)
}

/// Classify a sample by the sign of its excess kurtosis
///
/// Returns `None` when kurtosis is undefined: the sample is empty, or its
/// variance is zero and the kurtosis ratio is NaN.
///
/// The mesokurtic class requires the computed kurtosis to be exactly zero.
/// On floating-point input that comparison is fragile; samples that are
/// mesokurtic in exact arithmetic can land a rounding error away from zero
/// and be classified by the sign of that error instead.
pub fn classify_kurtosis(sample: &[f64]) -> Option<Tailedness> {
    let k = kurtosis(sample)?;
    if k < 0.0 {
        Some(Tailedness::Platykurtic)
    } else if k > 0.0 {
        Some(Tailedness::Leptokurtic)
    } else if k == 0.0 {
        Some(Tailedness::Mesokurtic)
    } else {
        None
    }
}

/// Whether the sample has negative excess kurtosis
///
/// `false` when kurtosis is undefined.
pub fn is_platykurtic(sample: &[f64]) -> bool {
    classify_kurtosis(sample) == Some(Tailedness::Platykurtic)
}

/// Whether the sample has positive excess kurtosis
///
/// `false` when kurtosis is undefined.
pub fn is_leptokurtic(sample: &[f64]) -> bool {
    classify_kurtosis(sample) == Some(Tailedness::Leptokurtic)
}

/// Whether the sample has exactly zero excess kurtosis
///
/// `false` when kurtosis is undefined. See [`classify_kurtosis`] for the
/// exact-zero caveat.
pub fn is_mesokurtic(sample: &[f64]) -> bool {
    classify_kurtosis(sample) == Some(Tailedness::Mesokurtic)
}
