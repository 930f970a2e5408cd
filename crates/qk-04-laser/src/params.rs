//! Laser model parameters and the closed-form threshold.

use serde::{Deserialize, Serialize};

/// Physical parameters of the four-level laser.
///
/// Defaults put the system at exact atom-cavity resonance with weak coupling,
/// fast `3 → 2` and `1 → 0` relaxation, slow spontaneous emission on the
/// lasing transition, and a horizon of 50 cavity lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserParams {
    /// Atomic levels. The model is built for 4.
    pub dim_atom: usize,
    /// Fock levels kept in the cavity truncation.
    pub dim_cavity: usize,
    /// Cavity mode frequency `ω_c`.
    pub omega_cavity: f64,
    /// Atomic transition frequency `ω_a`.
    pub omega_atom: f64,
    /// Jaynes-Cummings coupling `g`.
    pub g: f64,
    /// Cavity loss rate `κ`.
    pub kappa: f64,
    /// Incoherent pump rate `0 → 3`.
    pub pump_rate: f64,
    /// Decay rate `3 → 2`.
    pub gamma_32: f64,
    /// Decay rate `2 → 1` (the lasing transition).
    pub gamma_21: f64,
    /// Decay rate `1 → 0`.
    pub gamma_10: f64,
    /// Evolution start time.
    pub t_start: f64,
    /// Evolution end time.
    pub t_end: f64,
    /// Integrator step.
    pub dt: f64,
}

impl Default for LaserParams {
    fn default() -> Self {
        let kappa = 0.05;
        Self {
            dim_atom: 4,
            dim_cavity: 12,
            omega_cavity: 1.0,
            omega_atom: 1.0,
            g: 0.1,
            kappa,
            pump_rate: 0.2,
            gamma_32: 1.0,
            gamma_21: 0.01,
            gamma_10: 1.0,
            t_start: 0.0,
            t_end: 50.0 / kappa,
            dt: 0.01,
        }
    }
}

impl LaserParams {
    /// Lasing threshold pump rate, `κ·γ₂₁ / (4g²)`.
    ///
    /// From the gain-equals-loss condition of the four-level scheme. A
    /// vanishing coupling (`g² < 1e-10`) reports `1e10`: effectively no
    /// pump reaches threshold.
    pub fn threshold(&self) -> f64 {
        let g2 = self.g * self.g;
        if g2 < 1e-10 {
            return 1e10;
        }
        (self.kappa * self.gamma_21) / (4.0 * g2)
    }

    /// How far above (or below) threshold the configured pump sits.
    pub fn threshold_param(&self) -> f64 {
        self.pump_rate / self.threshold()
    }

    /// Dimension of the tensor-product space.
    pub fn total_dim(&self) -> usize {
        self.dim_atom * self.dim_cavity
    }
}

// ============================================================================
// TESTS
// ============================================================================
