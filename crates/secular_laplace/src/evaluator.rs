//! Strategy seam for Laplace coefficient evaluation.

use crate::alpha::{Alpha, harmonic_index};
use crate::error::LaplaceError;

/// A way of computing the normalised Laplace coefficient
/// `b_{3/2}^{(j)}(alpha) / (3 alpha)`.
///
/// Implementations must be pure: the same `(alpha, j)` always yields the
/// same value. This is what lets the secular solver and the alpha sweep
/// swap strategies freely and evaluate them from several threads.
pub trait LaplaceEvaluator: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Evaluate for an already validated ratio and harmonic.
    fn evaluate_alpha(&self, alpha: Alpha, harmonic: u32) -> f64;

    /// Validate raw inputs, then evaluate.
    fn evaluate(&self, alpha: f64, harmonic: i32) -> Result<f64, LaplaceError> {
        let alpha = Alpha::new(alpha)?;
        let harmonic = harmonic_index(harmonic)?;
        Ok(self.evaluate_alpha(alpha, harmonic))
    }

    /// The unnormalised coefficient `b_{3/2}^{(j)}(alpha)`.
    fn b_three_halves(&self, alpha: Alpha, harmonic: u32) -> f64 {
        self.evaluate_alpha(alpha, harmonic) * 3.0 * alpha.value()
    }
}

impl<E: LaplaceEvaluator + ?Sized> LaplaceEvaluator for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate_alpha(&self, alpha: Alpha, harmonic: u32) -> f64 {
        (**self).evaluate_alpha(alpha, harmonic)
    }
}
