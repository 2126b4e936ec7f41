//! Coupling frequencies and the 2x2 secular matrix.
//!
//! Each planet's apsidal (or nodal) orientation is driven by the other at
//! a rate proportional to the perturber's mass, the Laplace coefficient
//! `b_{3/2}^{(1)}(alpha)` and the driven planet's mean motion:
//!
//! ```text
//! w(driver -> driven) = m_driver / (4 M) * a_driven * a_in / a_out^2
//!                       * sqrt(G M / a_driven^3) * b_{3/2}^{(1)}(alpha)
//! ```
//!
//! Laplace-Lagrange theory at first order in the masses, e.g. Murray &
//! Dermott, _Solar System Dynamics_, ch. 7.

use nalgebra::Matrix2;
use secular_laplace::Alpha;
use serde::Serialize;

use crate::body::{OrbitalBody, TwoBodySystem};
use crate::error::SecularError;

/// Mutual precession rates in rad/yr.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Couplings {
    /// Rate at which the outer planet drives the inner one (row 0).
    pub outer_on_inner: f64,
    /// Rate at which the inner planet drives the outer one (row 1).
    pub inner_on_outer: f64,
}

impl Couplings {
    /// Both couplings from one normalised Laplace coefficient
    /// (`b_{3/2}^{(1)} / (3 alpha)`).
    pub fn compute(system: &TwoBodySystem, alpha: Alpha, coefficient: f64) -> Self {
        Self {
            outer_on_inner: coupling_frequency(
                system,
                &system.outer,
                &system.inner,
                alpha,
                coefficient,
            ),
            inner_on_outer: coupling_frequency(
                system,
                &system.inner,
                &system.outer,
                alpha,
                coefficient,
            ),
        }
    }

    /// `[[-w_io, w_io], [w_oi, -w_oi]]`, rows summing to zero.
    pub fn matrix(&self) -> Matrix2<f64> {
        let w_io = self.outer_on_inner;
        let w_oi = self.inner_on_outer;
        Matrix2::new(-w_io, w_io, w_oi, -w_oi)
    }
}

/// Precession rate of `driven` caused by `driver`, in rad/yr.
pub fn coupling_frequency(
    system: &TwoBodySystem,
    driver: &OrbitalBody,
    driven: &OrbitalBody,
    alpha: Alpha,
    coefficient: f64,
) -> f64 {
    let a_in = system.inner.semi_major_axis_au;
    let a_out = system.outer.semi_major_axis_au;
    driver.mass_msun / (4.0 * system.central_mass_msun)
        * driven.semi_major_axis_au
        * (a_in / (a_out * a_out))
        * driven.mean_motion(system.mu())
        * coefficient
        * 3.0
        * alpha.value()
}

/// Assemble the secular matrix for `system` from a normalised coefficient.
///
/// Validates the bodies and the axis ratio; does not evaluate the
/// coefficient itself.
pub fn secular_matrix(
    system: &TwoBodySystem,
    coefficient: f64,
) -> Result<Matrix2<f64>, SecularError> {
    system.validate()?;
    let alpha = system.alpha()?;
    Ok(Couplings::compute(system, alpha, coefficient).matrix())
}

/// Row sums of a secular matrix; zero for any valid assembly.
pub fn row_sums(m: &Matrix2<f64>) -> [f64; 2] {
    [m[(0, 0)] + m[(0, 1)], m[(1, 0)] + m[(1, 1)]]
}
