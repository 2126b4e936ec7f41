//! Human-readable and serialisable summaries of a secular solve.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::body::{OrbitalBody, TwoBodySystem};
use crate::matrix::Couplings;
use crate::secular::EigenResult;

/// Flat summary for printing or JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecularReport {
    pub inner: OrbitalBody,
    pub outer: OrbitalBody,
    /// Laplace coefficient strategy that produced the result.
    pub strategy: &'static str,
    pub alpha: f64,
    pub laplace_coefficient: f64,
    pub couplings_rad_per_yr: Couplings,
    pub eigenvalues_rad_per_yr: [f64; 2],
    /// Eigenvector matrix, row-major; column `k` is the mode of eigenvalue `k`.
    pub mode_amplitudes: [[f64; 2]; 2],
    pub precession_frequency_rad_per_yr: f64,
    pub precession_period_yr: f64,
}

impl SecularReport {
    pub fn new(system: &TwoBodySystem, result: &EigenResult, strategy: &'static str) -> Self {
        let v = &result.eigenvectors;
        Self {
            inner: system.inner.clone(),
            outer: system.outer.clone(),
            strategy,
            alpha: result.alpha,
            laplace_coefficient: result.laplace_coefficient,
            couplings_rad_per_yr: result.couplings,
            eigenvalues_rad_per_yr: result.eigenvalues,
            mode_amplitudes: [[v[(0, 0)], v[(0, 1)]], [v[(1, 0)], v[(1, 1)]]],
            precession_frequency_rad_per_yr: result.frequency_rad_per_yr,
            precession_period_yr: result.period_yr,
        }
    }

    fn label(body: &OrbitalBody, fallback: &'static str) -> String {
        if body.name.is_empty() {
            fallback.to_string()
        } else {
            body.name.clone()
        }
    }
}

impl Display for SecularReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let inner = Self::label(&self.inner, "inner");
        let outer = Self::label(&self.outer, "outer");
        writeln!(
            f,
            "{inner} & {outer} precession period: {:.1} yr",
            self.precession_period_yr
        )?;
        writeln!(
            f,
            "Precession frequency: {:.6e} rad/yr",
            self.precession_frequency_rad_per_yr
        )?;
        writeln!(
            f,
            "alpha = {:.6}, b(3/2,1)/(3 alpha) = {:.6} ({})",
            self.alpha, self.laplace_coefficient, self.strategy
        )?;
        writeln!(
            f,
            "Eigenvalues: [{:.6e}, {:.6e}] rad/yr",
            self.eigenvalues_rad_per_yr[0], self.eigenvalues_rad_per_yr[1]
        )?;
        writeln!(f, "Mode amplitudes:")?;
        for row in &self.mode_amplitudes {
            writeln!(f, "  [{:>10.6}, {:>10.6}]", row[0], row[1])?;
        }
        Ok(())
    }
}
