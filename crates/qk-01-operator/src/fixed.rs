//! Q16.16 fixed-point form of the operator, for integer-only builds.
//!
//! The phase `π·φ'·n + δ` is accumulated in Q32.32 through 128-bit
//! intermediates, reduced modulo `2π`, narrowed to Q16.16, folded into
//! `[-π/2, π/2]`, and passed through a 4th-order Taylor cosine.
//!
//! ## Error bound
//!
//! Absolute error versus [`crate::golden::operator_value`] is at most
//! `2.1e-2` for all `n ≤ 10^7`:
//!
//! | Source | Contribution |
//! |--------|--------------|
//! | Taylor truncation at the fold boundary `±π/2` | `2.0e-2` |
//! | Phase increment quantization (`2.83e-11` rad/step, `n = 10^7`) | `3.2e-4` |
//! | Q16.16 narrowing and arithmetic truncation | `< 1e-4` |
//!
//! Beyond `10^7` steps the accumulated phase drift grows linearly and the
//! bound no longer holds.

/// Q16.16 signed fixed-point value.
pub type Fixed = i32;

/// Fractional bits in [`Fixed`].
pub const FP_SHIFT: u32 = 16;

/// The value `1.0` in Q16.16.
pub const FP_ONE: Fixed = 1 << FP_SHIFT;

/// `π` in Q16.16.
pub const PI_FP: Fixed = 205_887;

/// `2π` in Q16.16.
pub const TWO_PI_FP: Fixed = 411_774;

// Q32.32 phase constants. Rounding π·φ'·2^32 to an integer costs 2.83e-11 rad
// per step, so the phase stays within 3.2e-4 rad of exact for n up to 10^7.
const PHASE_INCREMENT_Q32: i128 = 8_339_155_913;
const TWO_PI_Q32: i128 = 26_986_075_409;

/// Converts an `f64` to Q16.16, rounding to nearest.
#[inline]
pub fn to_fixed(x: f64) -> Fixed {
    (x * FP_ONE as f64).round() as Fixed
}

/// Converts a Q16.16 value to `f64`.
#[inline]
pub fn to_float(x: Fixed) -> f64 {
    x as f64 / FP_ONE as f64
}

/// 4th-order Taylor cosine. Requires `|x| <= π/2` in Q16.16.
#[inline]
fn cos_taylor(x: i64) -> i64 {
    let x2 = (x * x) >> FP_SHIFT;
    let x4 = (x2 * x2) >> FP_SHIFT;
    FP_ONE as i64 - (x2 >> 1) + x4 / 24
}

/// Folds `x ∈ [-π, π]` into `[-π/2, π/2]` with `cos(x) = -cos(π - x)`.
#[inline]
fn cos_half_turn(mut x: i64) -> i64 {
    let half_pi = (PI_FP / 2) as i64;
    let mut sign = 1i64;
    if x > half_pi {
        x = PI_FP as i64 - x;
        sign = -1;
    } else if x < -half_pi {
        x = -(PI_FP as i64) - x;
        sign = -1;
    }
    sign * cos_taylor(x)
}

/// Cosine of a Q16.16 angle of any magnitude.
#[inline]
pub fn cos_fixed(x: Fixed) -> Fixed {
    let mut x = (x as i64).rem_euclid(TWO_PI_FP as i64);
    if x > PI_FP as i64 {
        x -= TWO_PI_FP as i64;
    }
    cos_half_turn(x) as Fixed
}

/// Operator value `(-1)^n · cos(π·φ'·n + delta)` in Q16.16.
///
/// `delta` is a Q16.16 phase offset. The phase product is carried in i128,
/// so no step index a `u64` can hold overflows the accumulator.
pub fn fixed_operator_value(n: u64, delta: Fixed) -> Fixed {
    let phase = PHASE_INCREMENT_Q32 * n as i128 + ((delta as i128) << FP_SHIFT);
    let reduced = phase.rem_euclid(TWO_PI_Q32);

    // Narrow Q32.32 -> Q16.16, then center [0, 2π) on zero.
    let mut x = (reduced >> FP_SHIFT) as i64;
    if x > PI_FP as i64 {
        x -= TWO_PI_FP as i64;
    }

    let qp_cos = cos_half_turn(x);
    let signed = if n & 1 == 0 { qp_cos } else { -qp_cos };
    signed as Fixed
}

// ============================================================================
// TESTS
// ============================================================================
