//! Lindblad system assembly and the master-equation right-hand side.

use num_complex::Complex64;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::ComplexMatrix;

/// Upper bound on registered jump operators per system.
pub const MAX_JUMP_OPS: usize = 8;

/// One registered decay channel.
///
/// The decay rate is folded into the stored operator at registration
/// (`operator = L·√γ`), and the adjoint and `L†L` products are cached, so the
/// right-hand side does no adjoint or rate arithmetic per step.
#[derive(Debug, Clone)]
pub struct JumpOperator {
    operator: ComplexMatrix,
    adjoint: ComplexMatrix,
    l_dag_l: ComplexMatrix,
}

impl JumpOperator {
    /// The rate-scaled operator `L·√γ`.
    pub fn operator(&self) -> &ComplexMatrix {
        &self.operator
    }

    /// Cached adjoint of the rate-scaled operator.
    pub fn adjoint(&self) -> &ComplexMatrix {
        &self.adjoint
    }

    /// Cached product `(L·√γ)†(L·√γ)`.
    pub fn l_dag_l(&self) -> &ComplexMatrix {
        &self.l_dag_l
    }
}

/// The two halves of the master equation, separately retrievable.
#[derive(Debug, Clone)]
pub struct LindbladTerms {
    /// `−i[H, ρ]`.
    pub unitary: ComplexMatrix,
    /// `Σ_k (L_k ρ L_k† − ½{L_k†L_k, ρ})`.
    pub dissipative: ComplexMatrix,
}

/// A Hamiltonian plus a bounded list of jump operators.
#[derive(Debug, Clone)]
pub struct LindbladSystem {
    dim: usize,
    hamiltonian: ComplexMatrix,
    jump_ops: Vec<JumpOperator>,
}

impl LindbladSystem {
    /// Empty system of dimension `dim` (zero Hamiltonian, no jumps).
    pub fn new(dim: usize) -> MatrixResult<Self> {
        Ok(Self {
            dim,
            hamiltonian: ComplexMatrix::zeros(dim, dim)?,
            jump_ops: Vec::new(),
        })
    }

    /// Hilbert-space dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The installed Hamiltonian.
    pub fn hamiltonian(&self) -> &ComplexMatrix {
        &self.hamiltonian
    }

    /// Registered decay channels, in registration order.
    pub fn jump_operators(&self) -> &[JumpOperator] {
        &self.jump_ops
    }

    /// Installs the Hamiltonian. Must be `dim × dim`.
    pub fn set_hamiltonian(&mut self, h: ComplexMatrix) -> MatrixResult<()> {
        if h.rows() != self.dim || h.cols() != self.dim {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.dim, self.dim),
                found: (h.rows(), h.cols()),
            });
        }
        self.hamiltonian = h;
        Ok(())
    }

    /// Registers a decay channel with rate `γ ≥ 0`.
    ///
    /// Stores `L·√γ` and precomputes its adjoint and `L†L`. Rejects the
    /// channel beyond [`MAX_JUMP_OPS`] with a capacity error.
    pub fn add_jump_operator(&mut self, l: &ComplexMatrix, rate: f64) -> MatrixResult<()> {
        if self.jump_ops.len() >= MAX_JUMP_OPS {
            return Err(MatrixError::JumpOperatorLimit { max: MAX_JUMP_OPS });
        }
        if l.rows() != self.dim || l.cols() != self.dim {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.dim, self.dim),
                found: (l.rows(), l.cols()),
            });
        }

        let mut operator = l.clone();
        operator.scale(Complex64::new(rate.sqrt(), 0.0));
        let adjoint = operator.adjoint();
        let l_dag_l = adjoint.mul(&operator)?;

        self.jump_ops.push(JumpOperator {
            operator,
            adjoint,
            l_dag_l,
        });
        Ok(())
    }

    /// Both halves of `dρ/dt` at the given density matrix.
    pub fn compute_terms(&self, rho: &ComplexMatrix) -> MatrixResult<LindbladTerms> {
        let mut unitary = self.hamiltonian.commutator(rho)?;
        unitary.scale(Complex64::new(0.0, -1.0));

        let mut dissipative = ComplexMatrix::zeros(self.dim, self.dim)?;
        for jump in &self.jump_ops {
            let sandwich = jump.operator.mul(rho)?.mul(&jump.adjoint)?;
            let anti = jump.l_dag_l.anticommutator(rho)?;
            dissipative.add_assign_scaled(&sandwich, Complex64::new(1.0, 0.0))?;
            dissipative.add_assign_scaled(&anti, Complex64::new(-0.5, 0.0))?;
        }

        Ok(LindbladTerms {
            unitary,
            dissipative,
        })
    }

    /// Full right-hand side `−i[H, ρ] + Σ_k D[L_k](ρ)`.
    pub fn rhs(&self, rho: &ComplexMatrix) -> MatrixResult<ComplexMatrix> {
        let terms = self.compute_terms(rho)?;
        terms.unitary.add(&terms.dissipative)
    }
}

// ============================================================================
// TESTS
// ============================================================================
