//! Laplace coefficient by uniform-grid quadrature over relative phase.
//!
//! Uses the integral form
//!
//! ```text
//! b_{3/2}^{(j)}(a) = (1/pi) * Integral_0^{2 pi} cos(j psi) / (1 - 2 a cos psi + a^2)^{3/2} dpsi
//! ```
//!
//! The integrand is smooth and 2pi-periodic, so the plain mean over an
//! evenly spaced grid (endpoint excluded) converges geometrically with the
//! number of samples. No adaptive refinement is needed.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::alpha::Alpha;
use crate::error::LaplaceError;
use crate::evaluator::LaplaceEvaluator;

/// Default number of phase samples.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Grid settings for [`QuadratureLaplace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Number of evenly spaced phase samples on [0, 2pi). Default: 10 000.
    pub samples: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl QuadratureConfig {
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    pub fn validate(&self) -> Result<(), LaplaceError> {
        if self.samples < 2 {
            return Err(LaplaceError::InvalidConfig(
                "quadrature samples must be at least 2",
            ));
        }
        Ok(())
    }
}

/// Production evaluator: periodic rectangle rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadratureLaplace {
    config: QuadratureConfig,
}

impl QuadratureLaplace {
    pub fn new(config: QuadratureConfig) -> Result<Self, LaplaceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> QuadratureConfig {
        self.config
    }

    /// Mean of the integrand over the grid, equal to `b_{3/2}^{(j)} / 2`.
    fn integrand_mean(&self, alpha: f64, harmonic: u32) -> f64 {
        let n = self.config.samples;
        let step = TAU / n as f64;
        let j = f64::from(harmonic);
        let one_plus_a2 = 1.0 + alpha * alpha;
        let two_a = 2.0 * alpha;

        let sum: f64 = (0..n)
            .map(|k| {
                let psi = k as f64 * step;
                let d = one_plus_a2 - two_a * psi.cos();
                (j * psi).cos() / (d * d.sqrt())
            })
            .sum();
        sum / n as f64
    }
}

impl LaplaceEvaluator for QuadratureLaplace {
    fn name(&self) -> &'static str {
        "quadrature"
    }

    fn evaluate_alpha(&self, alpha: Alpha, harmonic: u32) -> f64 {
        let a = alpha.value();
        let value = self.integrand_mean(a, harmonic) * 2.0 / (3.0 * a);
        tracing::trace!(alpha = a, harmonic, samples = self.config.samples, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(alpha: f64, j: u32) -> f64 {
        QuadratureLaplace::default().evaluate_alpha(Alpha::new(alpha).unwrap(), j)
    }

    #[test]
    fn default_samples() {
        assert_eq!(QuadratureLaplace::default().config().samples, 10_000);
    }

    #[test]
    fn rejects_tiny_grid() {
        assert!(QuadratureLaplace::new(QuadratureConfig::new(1)).is_err());
        assert!(QuadratureLaplace::new(QuadratureConfig::new(0)).is_err());
        assert!(QuadratureLaplace::new(QuadratureConfig::new(2)).is_ok());
    }

    #[test]
    fn small_alpha_limit() {
        // b_{3/2}^{(1)} ~ 3 alpha, so the normalised value tends to 1
        let v = eval(1e-4, 1);
        assert!((v - 1.0).abs() < 1e-6, "v = {v}");
    }

    #[test]
    fn zeroth_harmonic_small_alpha() {
        // b_{3/2}^{(0)} -> 2, normalised by 3 alpha
        let a = 1e-3;
        let v = eval(a, 0);
        assert!((v * 3.0 * a - 2.0).abs() < 1e-4, "v = {v}");
    }

    #[test]
    fn converged_at_modest_grid() {
        let coarse = QuadratureLaplace::new(QuadratureConfig::new(400))
            .unwrap()
            .evaluate_alpha(Alpha::new(0.5).unwrap(), 1);
        let fine = eval(0.5, 1);
        assert!((coarse - fine).abs() < 1e-12 * fine);
    }

    #[test]
    fn b_three_halves_scaling() {
        let q = QuadratureLaplace::default();
        let a = Alpha::new(0.4).unwrap();
        let b = q.b_three_halves(a, 1);
        assert!((b - q.evaluate_alpha(a, 1) * 1.2).abs() < 1e-14);
    }
}
