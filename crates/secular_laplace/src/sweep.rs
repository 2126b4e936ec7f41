//! Parallel evaluation of the coefficient over many ratios.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::LaplaceError;
use crate::evaluator::LaplaceEvaluator;

/// One sampled point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub alpha: f64,
    pub value: f64,
}

/// Evenly spaced ratios from `from` to `to`, both ends included.
///
/// `steps == 1` yields `[from]`. Endpoints are not validated here; the
/// sweep itself rejects values outside (0, 1).
pub fn alpha_grid(from: f64, to: f64, steps: usize) -> Result<Vec<f64>, LaplaceError> {
    match steps {
        0 => Err(LaplaceError::InvalidConfig("sweep needs at least one step")),
        1 => Ok(vec![from]),
        n => {
            let h = (to - from) / (n - 1) as f64;
            Ok((0..n).map(|i| from + h * i as f64).collect())
        }
    }
}

/// Evaluate `evaluator` at every alpha, in parallel, preserving order.
///
/// Fails on the first ratio outside (0, 1).
pub fn sweep<E: LaplaceEvaluator + ?Sized>(
    evaluator: &E,
    alphas: &[f64],
    harmonic: i32,
) -> Result<Vec<SweepPoint>, LaplaceError> {
    tracing::debug!(
        strategy = evaluator.name(),
        points = alphas.len(),
        harmonic,
        "starting sweep"
    );
    alphas
        .par_iter()
        .map(|&alpha| {
            evaluator
                .evaluate(alpha, harmonic)
                .map(|value| SweepPoint { alpha, value })
        })
        .collect()
}
