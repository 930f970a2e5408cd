//! # qk-03-lindblad
//!
//! Open-quantum-system evolution: bounded dense complex matrices, the
//! Lindblad master-equation right-hand side, and a fixed-step RK4 integrator.
//!
//! ## Overview
//!
//! The engine integrates
//!
//! ```text
//!   dρ/dt = -i[H, ρ] + Σ_k ( L_k ρ L_k† − ½{L_k†L_k, ρ} )
//!           ╰── unitary ──╯  ╰────── dissipative ───────╯
//! ```
//!
//! over a density matrix `ρ`, with one Hamiltonian `H` and up to
//! [`MAX_JUMP_OPS`](system::MAX_JUMP_OPS) jump operators `L_k`. Rates are
//! folded into the stored operators (`L·√γ`) at registration, and `L†` and
//! `L†L` are cached there too, so the right-hand side performs no adjoint or
//! rate work per step.
//!
//! ```text
//!   LindbladSystem ──rhs(ρ)──► dρ/dt ──RK4──► ρ(t+dt) ──► observer samples
//! ```
//!
//! Matrix dimensions are bounded by [`matrix::MAX_DIM`]; every constructor
//! and operation checks dimensions and shapes, returning a typed
//! [`MatrixError`] instead of corrupting state. Numerical stability of the
//! integration is the caller's problem: pick a `dt` suited to the operator
//! magnitudes, because the integrator will not detect divergence.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qk_03_lindblad::{ComplexMatrix, LindbladSystem, evolve};
//! use num_complex::Complex64;
//!
//! let mut h = ComplexMatrix::zeros(2, 2)?;
//! h.set(0, 0, Complex64::new(1.0, 0.0))?;
//! h.set(1, 1, Complex64::new(-1.0, 0.0))?;
//!
//! let mut system = LindbladSystem::new(2)?;
//! system.set_hamiltonian(h)?;
//!
//! let mut rho = ComplexMatrix::zeros(2, 2)?;
//! rho.set(0, 0, Complex64::new(1.0, 0.0))?;
//!
//! evolve(&system, &mut rho, 0.0, 10.0, 0.01, 100, |i, t, rho| {
//!     println!("sample {} at t = {:.2}: trace = {:.6}", i, t, rho.trace().re);
//!     Ok(())
//! })?;
//! ```

pub mod error;
pub mod integrator;
pub mod matrix;
pub mod state;
pub mod system;

pub use error::{MatrixError, MatrixResult};
pub use integrator::{evolve, step_rk4};
pub use matrix::{ComplexMatrix, MAX_DIM};
pub use state::{expectation, DensityMatrixState};
pub use system::{LindbladSystem, LindbladTerms, MAX_JUMP_OPS};
