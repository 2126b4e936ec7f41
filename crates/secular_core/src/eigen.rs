//! General real eigen-decomposition of the secular matrix.
//!
//! The matrix is not symmetric (the two couplings differ), so eigenvalues
//! come from nalgebra's real Schur form and each eigenvector from the
//! null space of `M - lambda I`, taken as the right singular vector of
//! the smallest singular value.

use nalgebra::{Matrix2, Vector2};

use crate::error::SecularError;

/// Eigenvalues and unit-norm eigenvectors. Column `k` of `eigenvectors`
/// belongs to `eigenvalues[k]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenDecomposition {
    pub eigenvalues: [f64; 2],
    pub eigenvectors: Matrix2<f64>,
}

/// Decompose a real 2x2 matrix with a real spectrum.
///
/// Complex-conjugate pairs are reported as
/// [`SecularError::DegenerateSpectrum`] with their real parts attached.
pub fn eigen_decompose(m: &Matrix2<f64>) -> Result<EigenDecomposition, SecularError> {
    let Some(values) = m.eigenvalues() else {
        let complex = m.complex_eigenvalues();
        return Err(SecularError::DegenerateSpectrum {
            reason: "complex eigenvalues",
            eigenvalues: complex.iter().map(|c| c.re).collect(),
        });
    };
    let eigenvalues = [values[0], values[1]];
    let v0 = null_vector(m, eigenvalues[0])?;
    let v1 = null_vector(m, eigenvalues[1])?;
    Ok(EigenDecomposition {
        eigenvalues,
        eigenvectors: Matrix2::from_columns(&[v0, v1]),
    })
}

/// Unit vector spanning the (numerical) null space of `m - lambda I`.
///
/// Sign is fixed so the first nonzero component is positive.
fn null_vector(m: &Matrix2<f64>, lambda: f64) -> Result<Vector2<f64>, SecularError> {
    let shifted = m - Matrix2::identity() * lambda;
    let svd = shifted.svd(false, true);
    let v_t = svd
        .v_t
        .ok_or(SecularError::Internal("SVD did not return right singular vectors"))?;
    let smallest = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .ok_or(SecularError::Internal("SVD returned no singular values"))?;

    let mut v: Vector2<f64> = v_t.row(smallest).transpose();
    let norm = v.norm();
    if norm == 0.0 {
        return Err(SecularError::Internal("zero-length eigenvector"));
    }
    v /= norm;
    let lead = if v[0] != 0.0 { v[0] } else { v[1] };
    if lead < 0.0 {
        v = -v;
    }
    Ok(v)
}

/// Index of the single eigenvalue with `|lambda| > tolerance`.
///
/// Zero or two survivors mean the rigid-rotation mode could not be
/// separated from the precession mode.
pub fn nontrivial_index(eigenvalues: &[f64; 2], tolerance: f64) -> Result<usize, SecularError> {
    let survivors: Vec<usize> = (0..2)
        .filter(|&i| eigenvalues[i].abs() > tolerance)
        .collect();
    match survivors.as_slice() {
        [i] => Ok(*i),
        [] => Err(SecularError::DegenerateSpectrum {
            reason: "no eigenvalue exceeds the zero tolerance",
            eigenvalues: eigenvalues.to_vec(),
        }),
        _ => Err(SecularError::DegenerateSpectrum {
            reason: "more than one eigenvalue exceeds the zero tolerance",
            eigenvalues: eigenvalues.to_vec(),
        }),
    }
}
