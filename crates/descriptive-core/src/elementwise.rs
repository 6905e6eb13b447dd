//! Elementwise sequence helpers
//!
//! Small mapping utilities shared by the formula crates. `multiply` is the
//! only fallible one: its inputs must be the same length.

use crate::error::{Error, Result};

/// Square each element of a slice
pub fn square(data: &[f64]) -> Vec<f64> {
    data.iter().map(|&x| x * x).collect()
}

/// Take the square root of each element of a slice
///
/// Negative elements yield NaN per IEEE semantics.
pub fn sqrt(data: &[f64]) -> Vec<f64> {
    data.iter().map(|&x| x.sqrt()).collect()
}

/// Multiply two slices elementwise
///
/// # Examples
///
/// ```rust
/// use descriptive_core::elementwise::multiply;
///
/// let product = multiply(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(product, vec![4.0, 10.0, 18.0]);
/// ```
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(Error::length_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| x * y).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        assert_eq!(square(&[1.0, -2.0, 3.0]), vec![1.0, 4.0, 9.0]);
        assert!(square(&[]).is_empty());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(&[4.0, 9.0, 16.0]), vec![2.0, 3.0, 4.0]);
        assert!(sqrt(&[-1.0])[0].is_nan());
    }

    #[test]
    fn test_multiply_length_mismatch() {
        let err = multiply(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 2, right: 1 }));
    }
}
