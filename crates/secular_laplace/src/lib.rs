//! Laplace coefficients of the planetary disturbing function.
//!
//! This crate provides:
//! - [`QuadratureLaplace`]: the production evaluator, a periodic rectangle
//!   rule over relative orbital phase
//! - [`SeriesLaplace`]: the truncated power series, kept as a cross-check
//! - [`sweep`]: parallel tabulation over many semi-major-axis ratios
//!
//! Every evaluator returns the normalised coefficient
//! `b_{3/2}^{(j)}(alpha) / (3 alpha)`, which tends to 1 as `alpha -> 0`
//! for `j = 1`.

pub mod alpha;
pub mod error;
pub mod evaluator;
pub mod quadrature;
pub mod series;
pub mod sweep;

pub use alpha::{Alpha, harmonic_index};
pub use error::{DomainViolation, LaplaceError};
pub use evaluator::LaplaceEvaluator;
pub use quadrature::{DEFAULT_SAMPLES, QuadratureConfig, QuadratureLaplace};
pub use series::{DEFAULT_TERMS, SeriesConfig, SeriesLaplace};
pub use sweep::{SweepPoint, alpha_grid, sweep};

/// Normalised Laplace coefficient with the default quadrature grid.
///
/// Fails with [`LaplaceError::InvalidDomain`] unless `0 < alpha < 1` and
/// `harmonic >= 0`.
pub fn laplace_coefficient(alpha: f64, harmonic: i32) -> Result<f64, LaplaceError> {
    QuadratureLaplace::default().evaluate(alpha, harmonic)
}
