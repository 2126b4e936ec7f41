//! Solver settings.

use secular_laplace::QuadratureConfig;
use serde::{Deserialize, Serialize};

use crate::error::SecularError;

/// Default magnitude below which an eigenvalue counts as the rigid-rotation mode.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-10;

/// Configurable parameters for [`crate::secular_frequencies`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecularConfig {
    /// Phase grid for the Laplace coefficient quadrature.
    pub quadrature: QuadratureConfig,
    /// Eigenvalues with `|lambda| <= zero_tolerance` (rad/yr) are treated as
    /// zero. Default: 1e-10.
    ///
    /// Every row of the secular matrix sums to zero, so one eigenvalue is
    /// zero up to double-precision rounding. The tolerance must sit between
    /// that rounding and the physical precession rate.
    pub zero_tolerance: f64,
}

impl Default for SecularConfig {
    fn default() -> Self {
        Self {
            quadrature: QuadratureConfig::default(),
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
        }
    }
}

impl SecularConfig {
    pub fn with_zero_tolerance(mut self, zero_tolerance: f64) -> Self {
        self.zero_tolerance = zero_tolerance;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.quadrature = QuadratureConfig::new(samples);
        self
    }

    pub fn validate(&self) -> Result<(), SecularError> {
        self.quadrature.validate()?;
        if !(self.zero_tolerance.is_finite() && self.zero_tolerance > 0.0) {
            return Err(SecularError::InvalidConfig(
                "zero tolerance must be positive and finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SecularConfig::default();
        assert_eq!(c.quadrature.samples, 10_000);
        assert_eq!(c.zero_tolerance, 1e-10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn bad_tolerance() {
        for tol in [0.0, -1e-10, f64::NAN] {
            let c = SecularConfig::default().with_zero_tolerance(tol);
            assert!(matches!(c.validate(), Err(SecularError::InvalidConfig(_))));
        }
    }

    #[test]
    fn bad_samples() {
        let c = SecularConfig::default().with_samples(1);
        assert!(matches!(c.validate(), Err(SecularError::InvalidConfig(_))));
    }
}
