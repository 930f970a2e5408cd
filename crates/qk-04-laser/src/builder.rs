//! Operator construction on the tensor-product space.
//!
//! Everything is assembled in atom-major order: a product-space basis index
//! decomposes as `i·dim_cavity + n` for atomic level `i` and Fock level `n`.
//! Swapping the Kronecker factor order would silently change every observable,
//! so the order is pinned here and relied on by the observables module.

use num_complex::Complex64;

use qk_03_lindblad::{ComplexMatrix, LindbladSystem, MatrixResult};

use crate::error::LaserResult;
use crate::params::LaserParams;

/// Kronecker product `A ⊗ B`: `C[i·rb+k][j·cb+l] = A[i][j]·B[k][l]`.
pub fn kron(a: &ComplexMatrix, b: &ComplexMatrix) -> MatrixResult<ComplexMatrix> {
    let (ra, ca) = (a.rows(), a.cols());
    let (rb, cb) = (b.rows(), b.cols());
    let mut out = ComplexMatrix::zeros(ra * rb, ca * cb)?;
    let zero = Complex64::new(0.0, 0.0);

    for i in 0..ra {
        for j in 0..ca {
            let factor = a.get(i, j)?;
            if factor == zero {
                continue;
            }
            for k in 0..rb {
                for l in 0..cb {
                    out.set(i * rb + k, j * cb + l, factor * b.get(k, l)?)?;
                }
            }
        }
    }
    Ok(out)
}

/// Cavity annihilation operator, `a|n⟩ = √n |n−1⟩`.
fn annihilation_cavity(dim_cavity: usize) -> MatrixResult<ComplexMatrix> {
    let mut a = ComplexMatrix::zeros(dim_cavity, dim_cavity)?;
    for n in 1..dim_cavity {
        a.set(n - 1, n, Complex64::new((n as f64).sqrt(), 0.0))?;
    }
    Ok(a)
}

/// Atomic transition operator `|i⟩⟨j|` on the atom space alone.
///
/// Levels outside the atomic dimension yield the zero matrix.
fn sigma_atom(i: usize, j: usize, dim_atom: usize) -> MatrixResult<ComplexMatrix> {
    let mut sigma = ComplexMatrix::zeros(dim_atom, dim_atom)?;
    if i < dim_atom && j < dim_atom {
        sigma.set(i, j, Complex64::new(1.0, 0.0))?;
    }
    Ok(sigma)
}

/// Cavity annihilation on the product space, `I_atom ⊗ a`.
pub fn annihilation(dim_atom: usize, dim_cavity: usize) -> MatrixResult<ComplexMatrix> {
    let i_atom = ComplexMatrix::identity(dim_atom)?;
    let a_cavity = annihilation_cavity(dim_cavity)?;
    kron(&i_atom, &a_cavity)
}

/// Cavity creation on the product space, `(I_atom ⊗ a)†`.
pub fn creation(dim_atom: usize, dim_cavity: usize) -> MatrixResult<ComplexMatrix> {
    Ok(annihilation(dim_atom, dim_cavity)?.adjoint())
}

/// Photon number operator `a†a` on the product space.
pub fn number_operator(dim_atom: usize, dim_cavity: usize) -> MatrixResult<ComplexMatrix> {
    let a = annihilation(dim_atom, dim_cavity)?;
    a.adjoint().mul(&a)
}

/// Atomic transition `|i⟩⟨j|` on the product space, `σ_atom ⊗ I_cavity`.
pub fn sigma(
    i: usize,
    j: usize,
    dim_atom: usize,
    dim_cavity: usize,
) -> MatrixResult<ComplexMatrix> {
    let s = sigma_atom(i, j, dim_atom)?;
    let i_cavity = ComplexMatrix::identity(dim_cavity)?;
    kron(&s, &i_cavity)
}

/// Builds the full laser system and its initial state.
///
/// Returns the assembled [`LindbladSystem`] and `ρ₀ = |0,0⟩⟨0,0|` (ground
/// atom, vacuum cavity). Jump channels are registered in a fixed order:
/// cavity loss, pump, then the three decays from the highest level down.
pub fn build_system(params: &LaserParams) -> LaserResult<(LindbladSystem, ComplexMatrix)> {
    let dim_a = params.dim_atom;
    let dim_c = params.dim_cavity;
    let dim = params.total_dim();

    let mut system = LindbladSystem::new(dim)?;

    let a = annihilation(dim_a, dim_c)?;
    let a_dag = a.adjoint();
    let sigma_12 = sigma(1, 2, dim_a, dim_c)?;
    let sigma_21 = sigma(2, 1, dim_a, dim_c)?;

    // H = ω_c·a†a + ω_a·σ₂₂ + g·(a†σ₁₂ + a·σ₂₁)
    let mut h = a_dag.mul(&a)?;
    h.scale(Complex64::new(params.omega_cavity, 0.0));
    let sigma_22 = sigma(2, 2, dim_a, dim_c)?;
    h.add_assign_scaled(&sigma_22, Complex64::new(params.omega_atom, 0.0))?;
    let coupling = a_dag.mul(&sigma_12)?.add(&a.mul(&sigma_21)?)?;
    h.add_assign_scaled(&coupling, Complex64::new(params.g, 0.0))?;
    system.set_hamiltonian(h)?;

    system.add_jump_operator(&a, params.kappa)?;
    system.add_jump_operator(&sigma(3, 0, dim_a, dim_c)?, params.pump_rate)?;
    system.add_jump_operator(&sigma(2, 3, dim_a, dim_c)?, params.gamma_32)?;
    system.add_jump_operator(&sigma_12, params.gamma_21)?;
    system.add_jump_operator(&sigma(0, 1, dim_a, dim_c)?, params.gamma_10)?;

    let mut rho0 = ComplexMatrix::zeros(dim, dim)?;
    rho0.set(0, 0, Complex64::new(1.0, 0.0))?;

    Ok((system, rho0))
}

// ============================================================================
// TESTS
// ============================================================================
