//! Divergence measures between discrete probability distributions
//!
//! This crate compares two positionally-indexed distributions of equal
//! length:
//!
//! - [`bhattacharyya_distance`]: symmetric overlap measure, -ln BC(p, q)
//! - [`kullback_leibler_divergence`]: asymmetric relative entropy D(p‖q)
//!
//! Both validate their inputs the same way: the sequences must have equal
//! length and each must sum to 1 within a small tolerance (see
//! [`validate::SUM_TOLERANCE`]).
//!
//! # Example
//!
//! ```rust
//! use descriptive_divergence::{bhattacharyya_distance, kullback_leibler_divergence};
//!
//! let p = [0.2, 0.5, 0.3];
//! let q = [0.1, 0.4, 0.5];
//! assert!(bhattacharyya_distance(&p, &q).unwrap() > 0.0);
//! assert!(kullback_leibler_divergence(&p, &q).unwrap() > 0.0);
//! assert!(kullback_leibler_divergence(&p, &p).unwrap() == 0.0);
//! ```

pub mod bhattacharyya;
pub mod kullback_leibler;
pub mod validate;

// Re-exports
pub use bhattacharyya::bhattacharyya_distance;
pub use kullback_leibler::kullback_leibler_divergence;
pub use validate::validate_pair;
