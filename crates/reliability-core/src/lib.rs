//! Core traits and types for reliability analysis
//!
//! This crate provides the pieces shared by every lifetime model in the
//! workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`math::special::gamma`]: Lanczos gamma function for distribution means
//! - [`regression::least_squares`]: line fitting for probability-plot estimators
//! - [`LifetimeDistribution`] and [`LifetimeEstimator`]: the seams distribution
//!   crates implement
//!
//! Everything here is pure and synchronous; no function keeps state between
//! calls.
//!
//! # Example
//!
//! ```rust
//! use reliability_core::regression::least_squares;
//!
//! let fit = least_squares(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod math;
pub mod regression;
pub mod traits;

pub use error::{Error, Result};
pub use math::special::gamma;
pub use regression::{least_squares, LineFit};
pub use traits::{LifetimeDistribution, LifetimeEstimator};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{LifetimeDistribution, LifetimeEstimator, Result};
}
