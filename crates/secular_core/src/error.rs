//! Error types for the secular solver.

use secular_laplace::{DomainViolation, LaplaceError};
use thiserror::Error;

/// Errors from matrix assembly and eigen-decomposition.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SecularError {
    /// Semi-major-axis ratio outside (0, 1) or negative harmonic.
    #[error("invalid domain: {0}")]
    InvalidDomain(DomainViolation),
    /// A body has a non-positive or non-finite mass or axis.
    #[error("invalid body {name}: {reason}")]
    InvalidBody { name: String, reason: &'static str },
    /// Solver or system settings are unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Eigenvalue filtering did not isolate exactly one precession mode.
    #[error("degenerate spectrum: {reason} (eigenvalues {eigenvalues:?})")]
    DegenerateSpectrum {
        reason: &'static str,
        eigenvalues: Vec<f64>,
    },
    /// Linear-algebra backend returned something it should not have.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl From<LaplaceError> for SecularError {
    fn from(e: LaplaceError) -> Self {
        match e {
            LaplaceError::InvalidDomain(v) => Self::InvalidDomain(v),
            LaplaceError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            _ => Self::Internal("unrecognised laplace error"),
        }
    }
}
