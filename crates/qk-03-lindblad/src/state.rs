//! Scalar summaries of a density matrix.

use num_complex::Complex64;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::ComplexMatrix;

/// Derived scalars of a density matrix.
///
/// `trace ≈ 1` is expected for a physical state but not enforced; trace drift
/// under an unstable step size is the caller's to watch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityMatrixState {
    /// Real part of `Tr(ρ)`.
    pub trace: f64,
    /// Real part of `Tr(ρ²)`. `1` for a pure state, `1/d` for maximally mixed.
    pub purity: f64,
    /// Linear entropy `1 − purity`.
    pub entropy: f64,
}

impl DensityMatrixState {
    /// Computes the summary for a square density matrix.
    pub fn from_density_matrix(rho: &ComplexMatrix) -> MatrixResult<Self> {
        if rho.rows() != rho.cols() {
            return Err(MatrixError::NotSquare {
                rows: rho.rows(),
                cols: rho.cols(),
            });
        }

        let dim = rho.rows();
        // Tr(ρ²) without forming the product matrix.
        let mut purity = Complex64::new(0.0, 0.0);
        for i in 0..dim {
            for k in 0..dim {
                purity += rho.at(i, k) * rho.at(k, i);
            }
        }

        let purity = purity.re;
        Ok(Self {
            trace: rho.trace().re,
            purity,
            entropy: 1.0 - purity,
        })
    }
}

/// Expectation value `Tr(ρ·O)`.
///
/// Computed as `Σ_{i,k} ρ[i][k]·O[k][i]` without forming the product matrix.
pub fn expectation(rho: &ComplexMatrix, observable: &ComplexMatrix) -> MatrixResult<Complex64> {
    if rho.rows() != rho.cols() {
        return Err(MatrixError::NotSquare {
            rows: rho.rows(),
            cols: rho.cols(),
        });
    }
    if observable.rows() != rho.rows() || observable.cols() != rho.cols() {
        return Err(MatrixError::ShapeMismatch {
            expected: (rho.rows(), rho.cols()),
            found: (observable.rows(), observable.cols()),
        });
    }

    let dim = rho.rows();
    let mut sum = Complex64::new(0.0, 0.0);
    for i in 0..dim {
        for k in 0..dim {
            sum += rho.at(i, k) * observable.at(k, i);
        }
    }
    Ok(sum)
}

// ============================================================================
// TESTS
// ============================================================================
