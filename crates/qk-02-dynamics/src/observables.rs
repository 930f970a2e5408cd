//! Derived observables of a scalar state.

use serde::{Deserialize, Serialize};

use qk_01_operator::phase_accumulator;

use crate::config::DynamicsConfig;
use crate::state::ScalarState;

/// Observable bundle, recomputed on demand from a state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarObservables {
    /// Unwrapped operator phase `π·φ·n`.
    pub phase_accumulator: f64,
    /// Inverse participation ratio of the Bloch state, `1 − 0.5·cos²(θ/2)`.
    pub ipr: f64,
    /// Informational Reynolds number `|O_n| / η · 1000`.
    pub reynolds: f64,
    /// Projection of the Bloch vector on the z axis, `cos θ`.
    pub centroid_z: f64,
}

impl ScalarObservables {
    /// Computes the bundle for the given state.
    pub fn compute(state: &ScalarState, config: &DynamicsConfig) -> Self {
        let cos_half = (state.theta / 2.0).cos();
        Self {
            phase_accumulator: phase_accumulator(state.step_index, config.phi),
            ipr: 1.0 - 0.5 * cos_half * cos_half,
            reynolds: state.operator_value.abs() / state.viscosity * 1000.0,
            centroid_z: state.theta.cos(),
        }
    }
}

/// Inverse participation ratio `Σa⁴ / (Σa²)²` over an amplitude slice.
///
/// `1.0` (fully localized) for an empty or near-zero-norm slice. For `N`
/// equal amplitudes the value is `1/N` (fully delocalized).
pub fn amplitude_ipr(amplitudes: &[f64]) -> f64 {
    if amplitudes.is_empty() {
        return 1.0;
    }

    let mut sum2 = 0.0;
    let mut sum4 = 0.0;
    for &a in amplitudes {
        let a2 = a * a;
        sum2 += a2;
        sum4 += a2 * a2;
    }

    if sum2 < 1e-10 {
        return 1.0;
    }
    sum4 / (sum2 * sum2)
}

// ============================================================================
// TESTS
// ============================================================================
