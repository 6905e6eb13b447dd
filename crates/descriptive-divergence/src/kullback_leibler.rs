//! Kullback-Leibler divergence between discrete distributions

use crate::validate::validate_pair;
use descriptive_core::Result;

/// Calculate the Kullback-Leibler divergence, Σ pᵢ·ln(pᵢ/qᵢ)
///
/// Asymmetric: D(p‖q) measures how `q` diverges from `p`, and is 0 only
/// when the distributions coincide. Entries with pᵢ = 0 contribute 0,
/// the conventional limit of x·ln(x); an entry with qᵢ = 0 and pᵢ > 0
/// yields +∞.
///
/// Errors when `p` and `q` differ in length or either does not sum to 1.
pub fn kullback_leibler_divergence(p: &[f64], q: &[f64]) -> Result<f64> {
    validate_pair(p, q)?;
    let divergence = p
        .iter()
        .zip(q)
        .map(|(&pi, &qi)| if pi == 0.0 { 0.0 } else { pi * (pi / qi).ln() })
        .sum();
    Ok(divergence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use descriptive_core::Error;

    #[test]
    fn test_self_divergence_is_zero() {
        let p = [0.2, 0.5, 0.3];
        assert_eq!(kullback_leibler_divergence(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn test_known_value() {
        let p = [0.2, 0.5, 0.3];
        let q = [0.1, 0.4, 0.5];
        let expected = 0.2 * (0.2f64 / 0.1).ln() + 0.5 * (0.5f64 / 0.4).ln() + 0.3 * (0.3f64 / 0.5).ln();
        assert_relative_eq!(
            kullback_leibler_divergence(&p, &q).unwrap(),
            expected,
            epsilon = 1e-12
        );
        assert!(expected > 0.0);
    }

    #[test]
    fn test_asymmetry() {
        let p = [0.9, 0.1];
        let q = [0.5, 0.5];
        let forward = kullback_leibler_divergence(&p, &q).unwrap();
        let backward = kullback_leibler_divergence(&q, &p).unwrap();
        assert!((forward - backward).abs() > 0.1);
    }

    #[test]
    fn test_zero_probability_in_p_contributes_nothing() {
        let p = [0.0, 1.0];
        let q = [0.5, 0.5];
        assert_relative_eq!(
            kullback_leibler_divergence(&p, &q).unwrap(),
            2.0f64.ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_probability_in_q_is_infinite() {
        let p = [0.5, 0.5];
        let q = [1.0, 0.0];
        assert!(kullback_leibler_divergence(&p, &q).unwrap().is_infinite());
    }

    #[test]
    fn test_length_mismatch() {
        let err = kullback_leibler_divergence(&[1.0], &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 1, right: 2 }));
    }

    #[test]
    fn test_invalid_distribution() {
        let err = kullback_leibler_divergence(&[0.7, 0.7], &[0.5, 0.5]).unwrap_err();
        assert!(matches!(err, Error::InvalidDistribution { .. }));
    }
}
