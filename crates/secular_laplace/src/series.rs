//! Truncated power series for the Laplace coefficient.
//!
//! ```text
//! b_s^{(j)}(a) = 2 (s)_j / j! * a^j * Sum_k (s)_k (s+j)_k / (k! (j+1)_k) * a^{2k}
//! ```
//!
//! with `s = 3/2` and `(x)_k` the rising factorial. Three terms at `j = 1`
//! give the textbook `3a (1 + 15/8 a^2 + 175/64 a^4)`.
//!
//! Accuracy degrades quickly as `a -> 1`, so this is a cross-check for the
//! quadrature path, not a replacement for it.

use serde::{Deserialize, Serialize};

use crate::alpha::Alpha;
use crate::error::LaplaceError;
use crate::evaluator::LaplaceEvaluator;

const S: f64 = 1.5;

/// Default truncation: constant, a^2 and a^4 terms.
pub const DEFAULT_TERMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Number of terms kept in the sum over k. Default: 3.
    pub terms: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS,
        }
    }
}

impl SeriesConfig {
    pub fn new(terms: usize) -> Self {
        Self { terms }
    }

    pub fn validate(&self) -> Result<(), LaplaceError> {
        if self.terms == 0 {
            return Err(LaplaceError::InvalidConfig(
                "series must keep at least one term",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesLaplace {
    config: SeriesConfig,
}

impl SeriesLaplace {
    pub fn new(config: SeriesConfig) -> Result<Self, LaplaceError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> SeriesConfig {
        self.config
    }
}

impl LaplaceEvaluator for SeriesLaplace {
    fn name(&self) -> &'static str {
        "series"
    }

    fn evaluate_alpha(&self, alpha: Alpha, harmonic: u32) -> f64 {
        let a = alpha.value();
        let a2 = a * a;
        let j = f64::from(harmonic);

        // 2 (s)_j / j! * a^j
        let mut prefactor = 2.0;
        for i in 0..harmonic {
            let i = f64::from(i);
            prefactor *= (S + i) / (i + 1.0) * a;
        }

        let mut term = 1.0;
        let mut sum = 1.0;
        for k in 1..self.config.terms {
            let k = (k - 1) as f64;
            term *= (S + k) * (S + j + k) / ((k + 1.0) * (j + 1.0 + k)) * a2;
            sum += term;
        }

        prefactor * sum / (3.0 * a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_three_terms() {
        let a = 0.3;
        let v = SeriesLaplace::default().evaluate_alpha(Alpha::new(a).unwrap(), 1);
        let expected = 1.0 + 15.0 / 8.0 * a * a + 175.0 / 64.0 * a.powi(4);
        assert!((v - expected).abs() < 1e-14, "v = {v}, expected {expected}");
    }

    #[test]
    fn single_term_is_leading_order() {
        let s = SeriesLaplace::new(SeriesConfig::new(1)).unwrap();
        let v = s.evaluate_alpha(Alpha::new(0.7).unwrap(), 1);
        assert!((v - 1.0).abs() < 1e-15);
    }

    #[test]
    fn zeroth_harmonic_leading_term() {
        // b_{3/2}^{(0)} = 2 (1 + 9/4 a^2 + ...)
        let s = SeriesLaplace::new(SeriesConfig::new(2)).unwrap();
        let a = 0.2;
        let b = s.b_three_halves(Alpha::new(a).unwrap(), 0);
        assert!((b - 2.0 * (1.0 + 2.25 * a * a)).abs() < 1e-14);
    }

    #[test]
    fn second_harmonic_leading_term() {
        // b_{3/2}^{(2)} ~ 2 * (3/2)(5/2)/2 * a^2 = 15/4 a^2
        let s = SeriesLaplace::new(SeriesConfig::new(1)).unwrap();
        let a = 0.1;
        let b = s.b_three_halves(Alpha::new(a).unwrap(), 2);
        assert!((b - 3.75 * a * a).abs() < 1e-15);
    }

    #[test]
    fn zero_terms_rejected() {
        assert!(matches!(
            SeriesLaplace::new(SeriesConfig::new(0)),
            Err(LaplaceError::InvalidConfig(_))
        ));
    }
}
