//! First-order Laplace-Lagrange secular theory for two planets.
//!
//! Builds the 2x2 matrix of mutual precession rates from the bodies'
//! masses and semi-major axes, decomposes it, discards the rigid-rotation
//! eigenvalue and reports the remaining precession frequency, its period
//! and both mode shapes.
//!
//! ```rust,ignore
//! use secular_core::{SecularConfig, TwoBodySystem, secular_frequencies};
//!
//! let result = secular_frequencies(&TwoBodySystem::jupiter_saturn(), &SecularConfig::default())?;
//! println!("period: {:.0} yr", result.period_yr);
//! ```

pub mod body;
pub mod config;
pub mod eigen;
pub mod error;
pub mod matrix;
pub mod report;
pub mod secular;

pub use body::{
    G_AU3_PER_MSUN_YR2, JUPITER_A_AU, JUPITER_MASS_MSUN, OrbitalBody, SATURN_A_AU,
    SATURN_MASS_MSUN, TwoBodySystem,
};
pub use config::{DEFAULT_ZERO_TOLERANCE, SecularConfig};
pub use eigen::{EigenDecomposition, eigen_decompose, nontrivial_index};
pub use error::SecularError;
pub use matrix::{Couplings, coupling_frequency, row_sums, secular_matrix};
pub use report::SecularReport;
pub use secular::{EigenResult, precession_period_yr, secular_frequencies, secular_frequencies_with};

// Re-export the coefficient layer so callers need only this crate.
pub use secular_laplace::{
    Alpha, LaplaceEvaluator, QuadratureConfig, QuadratureLaplace, SeriesConfig, SeriesLaplace,
    laplace_coefficient,
};
