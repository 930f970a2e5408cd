//! The evolving scalar state and its step function.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use qk_01_operator::operator_value;

use crate::config::{DynamicsConfig, RelaxationTarget};

/// One evolving angle and everything derived from it.
///
/// Owned exclusively by its embedding entity and mutated only through its own
/// step functions. The two Lagrangians and the two increment fields are
/// diagnostics, recomputed wholesale each step, never accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarState {
    /// Bloch angle, kept in `[0, 2π)`.
    pub theta: f64,
    /// Last operator value, `|operator_value| ≤ 1`.
    pub operator_value: f64,
    /// Conservative increment applied on the last step.
    pub conservative_term: f64,
    /// Dissipative increment applied on the last step.
    pub dissipative_term: f64,
    /// Symplectic Lagrangian `½θ̇² − cos θ` of the last step.
    pub lagrangian_symplectic: f64,
    /// Metric Lagrangian `½η(θ − θ_eq)²` of the last step.
    pub lagrangian_metriplectic: f64,
    /// Derived entropy, in `[0.025, 0.275]` once stepping begins.
    pub entropy: f64,
    /// Bath viscosity at the angle the last step departed from.
    pub viscosity: f64,
    /// Step counter. Monotonic, never reset.
    pub step_index: u64,
    /// Phase offset handed to the operator on every step.
    pub phase_offset: f64,
}

impl ScalarState {
    /// A fresh state at the north pole of the Bloch sphere.
    pub fn new() -> Self {
        Self {
            theta: 0.0,
            operator_value: 1.0,
            conservative_term: 0.0,
            dissipative_term: 0.0,
            lagrangian_symplectic: 0.0,
            lagrangian_metriplectic: 0.0,
            entropy: local_entropy(0.0),
            viscosity: 0.1,
            step_index: 0,
            phase_offset: 0.0,
        }
    }

    /// A fresh state with a fixed operator phase offset.
    ///
    /// At step 0 the operator reduces to `cos(offset)` for any frequency.
    pub fn with_phase_offset(offset: f64) -> Self {
        Self {
            phase_offset: offset,
            operator_value: offset.cos(),
            ..Self::new()
        }
    }

    /// One metriplectic step toward the config's own relaxation target.
    pub fn advance(&mut self, config: &DynamicsConfig) {
        self.advance_toward(config, config.relaxation());
    }

    /// One metriplectic step toward an explicit relaxation target.
    ///
    /// Order matters: the step index is incremented first, the operator is
    /// evaluated at the new index, and all θ-dependent quantities use the
    /// pre-step angle.
    pub fn advance_toward(&mut self, config: &DynamicsConfig, target: RelaxationTarget) {
        self.step_index += 1;
        self.operator_value = operator_value(self.step_index, config.phi, self.phase_offset);

        let theta = self.theta;
        let eta = bath_viscosity(theta, config);

        let theta_dot = self.operator_value * PI / 100.0;
        self.lagrangian_symplectic = 0.5 * theta_dot * theta_dot - theta.cos();
        let deviation = theta - target.theta_equilibrium;
        self.lagrangian_metriplectic = 0.5 * eta * deviation * deviation;

        self.conservative_term =
            self.operator_value * (2.0 * theta).sin() * config.conservative_scale;
        self.dissipative_term = eta * (target.theta_equilibrium - theta) * target.rate;

        self.theta = wrap_angle(theta + self.conservative_term + self.dissipative_term);
        self.entropy = local_entropy(self.theta);
        self.viscosity = eta;
    }

    /// Recomputes the operator value at the current step index without
    /// advancing. The pool calls this when a record is (re)allocated.
    pub fn refresh_operator(&mut self, config: &DynamicsConfig) {
        self.operator_value = operator_value(self.step_index, config.phi, self.phase_offset);
    }
}

impl Default for ScalarState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps an angle into `[0, 2π)`. Total for any finite input.
#[inline]
pub fn wrap_angle(theta: f64) -> f64 {
    // rem_euclid can round up to the modulus itself for tiny negative inputs.
    let wrapped = theta.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Bath viscosity `η(θ) = η₀ · exp(θ/T) · (1 + 0.5·sin(θ/2))`.
///
/// Strictly positive for `θ ∈ [0, 2π)`; with the default config it stays
/// inside `[0.1, 0.16]`.
#[inline]
pub fn bath_viscosity(theta: f64, config: &DynamicsConfig) -> f64 {
    config.eta0 * (theta / config.bath_temperature).exp() * (1.0 + 0.5 * (theta / 2.0).sin())
}

/// Derived entropy `(|sin θ| + 0.1) / 4`, in `[0.025, 0.275]`.
#[inline]
pub fn local_entropy(theta: f64) -> f64 {
    (theta.sin().abs() + 0.1) / 4.0
}

// ============================================================================
// TESTS
// ============================================================================
