//! Normal-approximation confidence intervals for a sample mean

use crate::zscore::z_score;
use descriptive_core::Result;
use std::fmt;
use tracing::debug;

/// A confidence interval around a sample mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Margin of error, z·(σ/√n)
    pub margin: f64,
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] (±{})", self.lower, self.upper, self.margin)
    }
}

/// Construct a confidence interval around `mean` from the sample size, the
/// standard deviation, and a symbolic confidence level
///
/// The margin of error is z·(σ/√n) with z resolved from the confidence
/// table; an unrecognized level is an error. A sample size of zero is not
/// guarded and produces an infinite margin.
///
/// # Examples
///
/// ```rust
/// use descriptive_confidence::confidence_interval;
///
/// let ci = confidence_interval(90.0, 25, 12.5, "95").unwrap();
/// assert!((ci.margin - 4.9).abs() < 1e-3);
/// assert!(ci.contains(90.0));
/// ```
pub fn confidence_interval(
    mean: f64,
    n: usize,
    std_dev: f64,
    level: &str,
) -> Result<ConfidenceInterval> {
    let z = z_score(level)?;
    let margin = z * (std_dev / (n as f64).sqrt());
    debug!(
        "{}% interval around {}: z={:.5}, margin={:.5}",
        level, mean, z, margin
    );
    Ok(ConfidenceInterval {
        margin,
        lower: mean - margin,
        upper: mean + margin,
    })
}
