//! Semi-major-axis ratio and harmonic index validation.

use crate::error::{DomainViolation, LaplaceError};

/// Ratio of inner to outer semi-major axis, strictly inside (0, 1).
///
/// Outside that interval the orbits touch or cross and the expansion
/// behind the Laplace coefficient no longer converges.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Alpha(f64);

impl Alpha {
    /// Checked constructor. NaN and infinities are rejected.
    pub fn new(value: f64) -> Result<Self, LaplaceError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(DomainViolation::Alpha(value).into())
        }
    }

    /// Ratio `inner_au / outer_au`.
    pub fn from_axes(inner_au: f64, outer_au: f64) -> Result<Self, LaplaceError> {
        Self::new(inner_au / outer_au)
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Alpha {
    type Error = LaplaceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validate a harmonic index and return it unsigned.
pub fn harmonic_index(j: i32) -> Result<u32, LaplaceError> {
    u32::try_from(j).map_err(|_| DomainViolation::Harmonic(j).into())
}
