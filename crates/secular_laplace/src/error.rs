//! Error types for Laplace coefficient evaluation.

use thiserror::Error;

/// Which argument fell outside the domain of the coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainViolation {
    /// Semi-major-axis ratio not strictly inside (0, 1), or not finite.
    #[error("alpha = {0} is outside the open interval (0, 1)")]
    Alpha(f64),
    /// Harmonic index below zero.
    #[error("harmonic index {0} is negative")]
    Harmonic(i32),
}

/// Errors from Laplace coefficient evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LaplaceError {
    /// Input outside the region where the coefficient is defined.
    #[error("invalid domain: {0}")]
    InvalidDomain(DomainViolation),
    /// Evaluator settings cannot produce a coefficient.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

impl From<DomainViolation> for LaplaceError {
    fn from(v: DomainViolation) -> Self {
        Self::InvalidDomain(v)
    }
}
