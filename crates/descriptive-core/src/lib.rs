//! Core error types and descriptive aggregates
//!
//! This crate provides the foundation shared by the descriptive-stats
//! formula crates:
//!
//! - A unified [`Error`] type and [`Result`] alias
//! - Descriptive aggregates: mean, variance, standard deviation, and sums
//!   of squares, in population and Bessel-corrected sample flavors
//! - Elementwise sequence helpers (square, sqrt, multiply)
//!
//! # Conventions
//!
//! Aggregates over a sample return `Option<f64>`: an empty sample has no
//! mean, variance, or sum of squares, and callers get `None` instead of a
//! division by zero. Non-empty but degenerate input follows IEEE arithmetic
//! (the sample variance of a single observation is NaN).
//!
//! # Example
//!
//! ```rust
//! use descriptive_core::aggregates::{mean, sample_std_dev};
//!
//! let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data), Some(5.0));
//! let sd = sample_std_dev(&data).unwrap();
//! assert!((sd - 2.13809).abs() < 1e-5);
//! ```

pub mod aggregates;
pub mod elementwise;
pub mod error;

// Re-exports
pub use aggregates::{
    mean, population_std_dev, population_variance, sample_std_dev, sample_variance,
    sum_of_squared_deviations, sum_of_squares,
};
pub use elementwise::{multiply, square, sqrt};
pub use error::{Error, Result};
