//! Laser time evolution with evenly sampled observables.

use crate::builder::build_system;
use crate::error::{LaserError, LaserResult};
use crate::observables::{LaserObservables, LaserSample};
use crate::params::LaserParams;

/// Evolves the laser from `|0,0⟩⟨0,0|` over `[t_start, t_end]` and records
/// exactly `num_samples` evenly spaced observable rows.
///
/// `num_samples` must be at least 1; the first row always captures the
/// initial state.
pub fn evolve(params: &LaserParams, num_samples: usize) -> LaserResult<Vec<LaserSample>> {
    if num_samples == 0 {
        return Err(LaserError::InvalidSampleCount);
    }

    let (system, mut rho) = build_system(params)?;
    let mut samples = Vec::with_capacity(num_samples);

    qk_03_lindblad::evolve(
        &system,
        &mut rho,
        params.t_start,
        params.t_end,
        params.dt,
        num_samples,
        |_, time, rho| {
            let obs = LaserObservables::compute(params, rho)?;
            samples.push(LaserSample {
                time,
                n_photons: obs.n_photons,
                inversion: obs.inversion,
                g2: obs.g2(),
            });
            Ok(())
        },
    )?;

    Ok(samples)
}

// ============================================================================
// TESTS
// ============================================================================
