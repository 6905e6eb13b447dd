//! Validation of discrete probability distributions

use descriptive_core::{Error, Result};

/// Tolerance for the sum-to-one check
///
/// Distributions arrive as floating-point vectors, often produced by
/// normalizing counts, so their sums land within a few ulps of 1 rather
/// than on it. The check accepts that neighborhood instead of requiring
/// exact equality.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Validate that `p` and `q` are equal-length probability distributions
///
/// Checks length first, then that each sequence sums to 1 within
/// [`SUM_TOLERANCE`]. Element non-negativity is not checked; a negative
/// entry surfaces as NaN in the divergence formulas.
pub fn validate_pair(p: &[f64], q: &[f64]) -> Result<()> {
    if p.len() != q.len() {
        return Err(Error::length_mismatch(p.len(), q.len()));
    }
    for dist in [p, q] {
        let sum: f64 = dist.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::invalid_distribution(sum));
        }
    }
    Ok(())
}
