//! Two-tailed z-scores for symbolic confidence levels
//!
//! Confidence levels are keyed by the string callers pass in ("95",
//! "99.9", ...), not by a parsed percentage. A level with no table entry
//! is an error, never an interpolation.

use descriptive_core::{Error, Result};

/// Tabulated two-tailed z-scores, keyed by confidence-level string
const Z_TABLE: &[(&str, f64)] = &[
    ("50", 0.67449),
    ("70", 1.03643),
    ("75", 1.15035),
    ("80", 1.28155),
    ("85", 1.43953),
    ("90", 1.64485),
    ("92", 1.75069),
    ("95", 1.95996),
    ("96", 2.05375),
    ("98", 2.32635),
    ("99", 2.57583),
    ("99.5", 2.80703),
    ("99.8", 3.09023),
    ("99.9", 3.29053),
];

/// Look up the two-tailed z-score for a symbolic confidence level
///
/// # Examples
///
/// ```rust
/// use descriptive_confidence::z_score;
///
/// assert_eq!(z_score("95").unwrap(), 1.95996);
/// assert!(z_score("97.3").is_err());
/// ```
pub fn z_score(level: &str) -> Result<f64> {
    Z_TABLE
        .iter()
        .find(|(key, _)| *key == level)
        .map(|&(_, z)| z)
        .ok_or_else(|| Error::unknown_confidence_level(level))
}

/// The confidence-level keys the table knows about, in ascending order
pub fn known_levels() -> impl Iterator<Item = &'static str> {
    Z_TABLE.iter().map(|&(key, _)| key)
}
