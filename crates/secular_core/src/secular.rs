//! End-to-end secular frequency computation.

use std::f64::consts::TAU;

use nalgebra::{Matrix2, Vector2};
use secular_laplace::{LaplaceEvaluator, QuadratureLaplace};

use crate::body::TwoBodySystem;
use crate::config::SecularConfig;
use crate::eigen::{eigen_decompose, nontrivial_index};
use crate::error::SecularError;
use crate::matrix::Couplings;

/// Harmonic of the Laplace coefficient entering first-order secular theory.
const SECULAR_HARMONIC: u32 = 1;

/// Full outcome of one secular solve.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenResult {
    /// Inner-to-outer semi-major-axis ratio.
    pub alpha: f64,
    /// Normalised Laplace coefficient `b_{3/2}^{(1)}(alpha) / (3 alpha)`.
    pub laplace_coefficient: f64,
    pub couplings: Couplings,
    pub matrix: Matrix2<f64>,
    /// Both eigenvalues in rad/yr, in solver order.
    pub eigenvalues: [f64; 2],
    /// Unit mode shapes; column `k` belongs to `eigenvalues[k]`.
    pub eigenvectors: Matrix2<f64>,
    /// Index of the rigid-rotation (zero) mode.
    pub trivial_index: usize,
    /// Nontrivial eigenvalue in rad/yr. Negative means retrograde.
    pub frequency_rad_per_yr: f64,
    /// `2 pi / |frequency|` in years.
    pub period_yr: f64,
}

impl EigenResult {
    pub fn nontrivial_index(&self) -> usize {
        1 - self.trivial_index
    }

    /// Mode shape of the rigid rotation, proportional to (1, 1).
    pub fn trivial_mode(&self) -> Vector2<f64> {
        self.eigenvectors.column(self.trivial_index).into_owned()
    }

    /// Mode shape of the precession eigenvector.
    pub fn precession_mode(&self) -> Vector2<f64> {
        self.eigenvectors.column(self.nontrivial_index()).into_owned()
    }
}

/// Precession period in years for a frequency in rad/yr.
pub fn precession_period_yr(frequency_rad_per_yr: f64) -> f64 {
    TAU / frequency_rad_per_yr.abs()
}

/// Secular frequencies using the quadrature Laplace coefficient.
pub fn secular_frequencies(
    system: &TwoBodySystem,
    config: &SecularConfig,
) -> Result<EigenResult, SecularError> {
    config.validate()?;
    let evaluator = QuadratureLaplace::new(config.quadrature)?;
    secular_frequencies_with(system, config, &evaluator)
}

/// Secular frequencies with a caller-chosen coefficient strategy.
///
/// `config.quadrature` is ignored here; the evaluator carries its own settings.
pub fn secular_frequencies_with<E: LaplaceEvaluator + ?Sized>(
    system: &TwoBodySystem,
    config: &SecularConfig,
    evaluator: &E,
) -> Result<EigenResult, SecularError> {
    config.validate()?;
    system.validate()?;
    let alpha = system.alpha()?;

    let laplace_coefficient = evaluator.evaluate_alpha(alpha, SECULAR_HARMONIC);
    let couplings = Couplings::compute(system, alpha, laplace_coefficient);
    let matrix = couplings.matrix();
    tracing::debug!(
        strategy = evaluator.name(),
        alpha = alpha.value(),
        laplace_coefficient,
        outer_on_inner = couplings.outer_on_inner,
        inner_on_outer = couplings.inner_on_outer,
        "assembled secular matrix"
    );

    let decomposition = eigen_decompose(&matrix)?;
    let eigenvalues = decomposition.eigenvalues;
    tracing::debug!(?eigenvalues, tolerance = config.zero_tolerance, "eigenvalues");

    let nontrivial = match nontrivial_index(&eigenvalues, config.zero_tolerance) {
        Ok(i) => i,
        Err(e) => {
            tracing::warn!(%e, "could not isolate the precession mode");
            return Err(e);
        }
    };
    let frequency_rad_per_yr = eigenvalues[nontrivial];

    Ok(EigenResult {
        alpha: alpha.value(),
        laplace_coefficient,
        couplings,
        matrix,
        eigenvalues,
        eigenvectors: decomposition.eigenvectors,
        trivial_index: 1 - nontrivial,
        frequency_rad_per_yr,
        period_yr: precession_period_yr(frequency_rad_per_yr),
    })
}
