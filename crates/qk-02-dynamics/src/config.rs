//! Constants of the metriplectic step.

use serde::{Deserialize, Serialize};
use shared_types::GOLDEN_CONJUGATE;
use std::f64::consts::{FRAC_PI_2, PI};

/// Fixed parameters of the scalar dynamics.
///
/// One instance is shared by the global state and all pool records; per-record
/// variation enters through the record's phase offset, not through the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicsConfig {
    /// Operator frequency. Defaults to the golden ratio conjugate.
    pub phi: f64,
    /// Base bath viscosity `η₀`.
    pub eta0: f64,
    /// Bath temperature `T` in the viscosity exponent.
    pub bath_temperature: f64,
    /// Relaxation constant applied to the dissipative increment.
    pub relaxation_rate: f64,
    /// Equilibrium angle the dissipative half pulls toward.
    pub theta_equilibrium: f64,
    /// Scale of the conservative increment.
    pub conservative_scale: f64,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            phi: GOLDEN_CONJUGATE,
            eta0: 0.1,
            bath_temperature: 300.0,
            relaxation_rate: 0.02,
            theta_equilibrium: PI,
            conservative_scale: FRAC_PI_2 / 100.0,
        }
    }
}

impl DynamicsConfig {
    /// The relaxation target encoded in this config.
    pub fn relaxation(&self) -> RelaxationTarget {
        RelaxationTarget {
            theta_equilibrium: self.theta_equilibrium,
            rate: self.relaxation_rate,
        }
    }
}

/// Where, and how fast, the dissipative half pulls the angle.
///
/// [`ScalarState::advance`](crate::ScalarState::advance) uses the config's
/// target; the pool overrides it for evaporating records so their angle is
/// carried past the reset threshold near `2π`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelaxationTarget {
    /// Equilibrium angle for this step.
    pub theta_equilibrium: f64,
    /// Relaxation constant for this step.
    pub rate: f64,
}

// ============================================================================
// TESTS
// ============================================================================
