//! Floating-point form of the quasiperiodic operator.
//!
//! Pure and total: every finite input maps to a value in `[-1, 1]`, no state,
//! no error conditions.

use std::f64::consts::PI;

use shared_types::GOLDEN_CONJUGATE;

/// Parity factor `cos(π·n) = (-1)^n` for integer `n`.
#[inline]
pub fn parity(n: u64) -> f64 {
    if n & 1 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Unwrapped operator phase `π·phi·n`.
///
/// Reported as an observable; the operator itself only needs it modulo `2π`.
#[inline]
pub fn phase_accumulator(n: u64, phi: f64) -> f64 {
    PI * phi * n as f64
}

/// Operator value `(-1)^n · cos(π·phi·n + delta)`.
///
/// Guarantees `|result| <= 1` for every `n` and finite `phi`, `delta`.
#[inline]
pub fn operator_value(n: u64, phi: f64, delta: f64) -> f64 {
    parity(n) * (phase_accumulator(n, phi) + delta).cos()
}

/// Operator value at the golden ratio conjugate frequency with zero offset.
#[inline]
pub fn operator_value_default(n: u64) -> f64 {
    operator_value(n, GOLDEN_CONJUGATE, 0.0)
}

// ============================================================================
// TESTS
// ============================================================================
