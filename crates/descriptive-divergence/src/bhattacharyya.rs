//! Bhattacharyya distance between discrete distributions

use crate::validate::validate_pair;
use descriptive_core::Result;

/// Calculate the Bhattacharyya distance, -ln(Σ √(pᵢ·qᵢ))
///
/// The inner sum is the Bhattacharyya coefficient: 1 when the
/// distributions coincide (distance 0) and smaller the less they overlap.
/// Distributions with disjoint support have coefficient 0 and distance
/// +∞.
///
/// Errors when `p` and `q` differ in length or either does not sum to 1.
///
/// # Examples
///
/// ```rust
/// use descriptive_divergence::bhattacharyya_distance;
///
/// let p = [0.2, 0.5, 0.3];
/// let q = [0.1, 0.4, 0.5];
/// let d = bhattacharyya_distance(&p, &q).unwrap();
/// assert!(d > 0.0);
/// let self_distance = bhattacharyya_distance(&p, &p).unwrap();
/// assert!(self_distance.abs() < 1e-12);
/// ```
pub fn bhattacharyya_distance(p: &[f64], q: &[f64]) -> Result<f64> {
    validate_pair(p, q)?;
    let coefficient: f64 = p.iter().zip(q).map(|(&pi, &qi)| (pi * qi).sqrt()).sum();
    Ok(-coefficient.ln())
}
