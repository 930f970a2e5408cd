//! # qk-01-operator
//!
//! The quasiperiodic operator at the heart of the Quasi-Kernel engine.
//!
//! ## Overview
//!
//! Every subsystem that evolves state does so under a single scalar drive:
//!
//! ```text
//!     O(n) = cos(π·n) · cos(π·φ'·n + δ)
//!          = (-1)^n  · cos(π·φ'·n + δ)
//! ```
//!
//! where `φ'` is the golden ratio conjugate (≈ 0.618) and `δ` an optional
//! phase offset. Because `φ'` is irrational, the phase `π·φ'·n` never repeats
//! modulo `2π`: the operator visits its range `[-1, 1]` quasiperiodically,
//! with the parity factor flipping sign on every step.
//!
//! ```text
//!   step n ──► parity (-1)^n ──┐
//!                              ├──► O(n) ∈ [-1, 1]
//!   step n ──► cos(π·φ'·n + δ) ┘
//! ```
//!
//! ## Numeric representations
//!
//! | Form | Module | Use |
//! |------|--------|-----|
//! | `f64` | [`golden`] | Canonical. All engine subsystems consume this one. |
//! | Q16.16 | [`fixed`] | Integer-only build for environments without an FPU. |
//!
//! The two forms are not interchangeable: the fixed-point cosine is a folded
//! 4th-order Taylor approximation with a documented absolute error bound of
//! `2.1e-2` for step indices up to `10^7`. See [`fixed`] for the breakdown.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qk_01_operator::{operator_value_default, fixed};
//!
//! let o = operator_value_default(42);
//! assert!(o.abs() <= 1.0);
//!
//! let o_fp = fixed::fixed_operator_value(42, 0);
//! assert!((fixed::to_float(o_fp) - o).abs() < 2.1e-2);
//! ```

pub mod fixed;
pub mod golden;

pub use golden::{operator_value, operator_value_default, parity, phase_accumulator};
