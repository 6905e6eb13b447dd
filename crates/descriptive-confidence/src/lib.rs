//! Confidence intervals from tabulated z-scores
//!
//! This crate resolves symbolic confidence levels ("90", "95", "99.9")
//! to two-tailed z-scores and builds normal-approximation confidence
//! intervals around a sample mean.
//!
//! # Example
//!
//! ```rust
//! use descriptive_confidence::{confidence_interval, z_score};
//!
//! let z = z_score("95").unwrap();
//! assert!((z - 1.96).abs() < 1e-3);
//!
//! let ci = confidence_interval(90.0, 25, 12.5, "95").unwrap();
//! assert!(ci.contains(90.0));
//! assert!((ci.lower - 85.1).abs() < 1e-3);
//! assert!((ci.upper - 94.9).abs() < 1e-3);
//! ```

pub mod interval;
pub mod zscore;

// Re-exports
pub use interval::{confidence_interval, ConfidenceInterval};
pub use zscore::{known_levels, z_score};
