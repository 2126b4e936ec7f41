//! Orbiting bodies and the two-planet system they form.
//!
//! Units throughout are astronomical units, solar masses and Julian years,
//! so the gravitational constant defaults to `4 pi^2`.

use std::f64::consts::PI;

use secular_laplace::Alpha;
use serde::{Deserialize, Serialize};

use crate::error::SecularError;

/// Gravitational constant in AU^3 / (Msun yr^2).
pub const G_AU3_PER_MSUN_YR2: f64 = 4.0 * PI * PI;

/// Jupiter semi-major axis in AU.
pub const JUPITER_A_AU: f64 = 5.202;
/// Jupiter mass in solar masses.
pub const JUPITER_MASS_MSUN: f64 = 0.000954;
/// Saturn semi-major axis in AU.
pub const SATURN_A_AU: f64 = 9.537;
/// Saturn mass in solar masses.
pub const SATURN_MASS_MSUN: f64 = 0.000286;

/// A planet on a near-circular, near-planar orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalBody {
    /// Label used in reports.
    #[serde(default)]
    pub name: String,
    /// Semi-major axis in AU. Must be positive.
    pub semi_major_axis_au: f64,
    /// Mass in solar masses. Must be positive.
    pub mass_msun: f64,
}

impl OrbitalBody {
    /// Create and validate a body.
    pub fn new(
        name: impl Into<String>,
        semi_major_axis_au: f64,
        mass_msun: f64,
    ) -> Result<Self, SecularError> {
        let body = Self {
            name: name.into(),
            semi_major_axis_au,
            mass_msun,
        };
        body.validate()?;
        Ok(body)
    }

    pub fn validate(&self) -> Result<(), SecularError> {
        if !(self.semi_major_axis_au.is_finite() && self.semi_major_axis_au > 0.0) {
            return Err(self.invalid("semi-major axis must be positive and finite"));
        }
        if !(self.mass_msun.is_finite() && self.mass_msun > 0.0) {
            return Err(self.invalid("mass must be positive and finite"));
        }
        Ok(())
    }

    /// Keplerian mean motion `sqrt(mu / a^3)` in rad/yr.
    pub fn mean_motion(&self, mu: f64) -> f64 {
        (mu / self.semi_major_axis_au.powi(3)).sqrt()
    }

    fn invalid(&self, reason: &'static str) -> SecularError {
        SecularError::InvalidBody {
            name: self.name.clone(),
            reason,
        }
    }
}

fn default_central_mass() -> f64 {
    1.0
}

fn default_gravitational_parameter() -> f64 {
    G_AU3_PER_MSUN_YR2
}

/// Inner and outer planet around a central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoBodySystem {
    pub inner: OrbitalBody,
    pub outer: OrbitalBody,
    /// Central star mass in solar masses. Default: 1.
    #[serde(default = "default_central_mass")]
    pub central_mass_msun: f64,
    /// Gravitational constant in the chosen units. Default: `4 pi^2`.
    #[serde(default = "default_gravitational_parameter")]
    pub gravitational_parameter: f64,
}

impl TwoBodySystem {
    /// Solar-mass star with the default gravitational constant.
    pub fn new(inner: OrbitalBody, outer: OrbitalBody) -> Self {
        Self {
            inner,
            outer,
            central_mass_msun: default_central_mass(),
            gravitational_parameter: default_gravitational_parameter(),
        }
    }

    pub fn with_central_mass(mut self, central_mass_msun: f64) -> Self {
        self.central_mass_msun = central_mass_msun;
        self
    }

    pub fn with_gravitational_parameter(mut self, g: f64) -> Self {
        self.gravitational_parameter = g;
        self
    }

    /// Jupiter and Saturn around the Sun.
    pub fn jupiter_saturn() -> Self {
        Self::new(
            OrbitalBody {
                name: "Jupiter".to_string(),
                semi_major_axis_au: JUPITER_A_AU,
                mass_msun: JUPITER_MASS_MSUN,
            },
            OrbitalBody {
                name: "Saturn".to_string(),
                semi_major_axis_au: SATURN_A_AU,
                mass_msun: SATURN_MASS_MSUN,
            },
        )
    }

    /// `G * M_central`.
    pub fn mu(&self) -> f64 {
        self.gravitational_parameter * self.central_mass_msun
    }

    /// Inner-to-outer semi-major-axis ratio, checked to lie in (0, 1).
    pub fn alpha(&self) -> Result<Alpha, SecularError> {
        Ok(Alpha::from_axes(
            self.inner.semi_major_axis_au,
            self.outer.semi_major_axis_au,
        )?)
    }

    /// Validate both bodies and the central parameters.
    ///
    /// The axis ordering is not checked here; [`Self::alpha`] reports it
    /// as a domain error.
    pub fn validate(&self) -> Result<(), SecularError> {
        self.inner.validate()?;
        self.outer.validate()?;
        if !(self.central_mass_msun.is_finite() && self.central_mass_msun > 0.0) {
            return Err(SecularError::InvalidConfig(
                "central mass must be positive and finite",
            ));
        }
        if !(self.gravitational_parameter.is_finite() && self.gravitational_parameter > 0.0) {
            return Err(SecularError::InvalidConfig(
                "gravitational parameter must be positive and finite",
            ));
        }
        Ok(())
    }
}
