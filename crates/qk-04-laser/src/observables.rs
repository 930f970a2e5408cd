//! Physical observables of the laser state.

use serde::{Deserialize, Serialize};

use qk_03_lindblad::{expectation, ComplexMatrix, DensityMatrixState, MatrixResult};

use crate::builder::{number_operator, sigma};
use crate::params::LaserParams;

/// Snapshot of the laser observables at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserObservables {
    /// Mean cavity photon number `⟨a†a⟩`.
    pub n_photons: f64,
    /// Atomic level populations `⟨σ_ii⟩` for levels 0 through 3.
    pub populations: [f64; 4],
    /// Population inversion on the lasing transition, `P₂ − P₁`.
    pub inversion: f64,
    /// Lasing coherence magnitude `|⟨σ₂₁⟩|`.
    pub coherence: f64,
    /// State purity `Tr(ρ²)`.
    pub purity: f64,
    /// Linear entropy `1 − Tr(ρ²)`.
    pub entropy: f64,
    /// Pump rate over lasing threshold.
    pub threshold_param: f64,
}

impl LaserObservables {
    /// Evaluates every observable against the given density matrix.
    pub fn compute(params: &LaserParams, rho: &ComplexMatrix) -> MatrixResult<Self> {
        let dim_a = params.dim_atom;
        let dim_c = params.dim_cavity;

        let n_op = number_operator(dim_a, dim_c)?;
        let n_photons = expectation(rho, &n_op)?.re;

        let mut populations = [0.0; 4];
        for (level, population) in populations.iter_mut().enumerate() {
            let projector = sigma(level, level, dim_a, dim_c)?;
            *population = expectation(rho, &projector)?.re;
        }

        let sigma_21 = sigma(2, 1, dim_a, dim_c)?;
        let coherence = expectation(rho, &sigma_21)?.norm();

        let summary = DensityMatrixState::from_density_matrix(rho)?;

        Ok(Self {
            n_photons,
            populations,
            inversion: populations[2] - populations[1],
            coherence,
            purity: summary.purity,
            entropy: summary.entropy,
            threshold_param: params.threshold_param(),
        })
    }

    /// Second-order coherence estimate.
    ///
    /// Low-order approximation `g² ≈ 1 + (1 − purity)`: a pure coherent-like
    /// state reads 1, a fully mixed thermal-like state reads 2.
    pub fn g2(&self) -> f64 {
        1.0 + (1.0 - self.purity)
    }
}

/// One timestamped row of the evolution record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserSample {
    /// Simulation time of the snapshot.
    pub time: f64,
    /// Mean cavity photon number at that time.
    pub n_photons: f64,
    /// Population inversion `P₂ − P₁` at that time.
    pub inversion: f64,
    /// Second-order coherence estimate at that time.
    pub g2: f64,
}

// ============================================================================
// TESTS
// ============================================================================
