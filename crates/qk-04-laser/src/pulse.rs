//! Wavelength-labelled pulse emission.
//!
//! Callers address the laser by a wavelength label instead of a raw atomic
//! frequency. Two labels are recognized: `"1550"` (telecom infrared, near
//! resonance with the cavity) and `"405"` (violet, far detuned). Labels are
//! matched by substring so `"pulse-1550nm"` works; an unrecognized label
//! keeps the base parameters as they are.

use crate::error::LaserResult;
use crate::evolve::evolve;
use crate::observables::LaserSample;
use crate::params::LaserParams;

/// Resolves a wavelength label against a base parameter set.
pub fn wavelength_params(label: &str, base: &LaserParams) -> LaserParams {
    let mut params = *base;
    if label.contains("1550") {
        params.omega_atom = 0.8;
    } else if label.contains("405") {
        params.omega_atom = 2.5;
    }
    params
}

/// Runs one pulse at the labelled wavelength and returns its sample record.
pub fn emit_pulse(
    label: &str,
    base: &LaserParams,
    num_samples: usize,
) -> LaserResult<Vec<LaserSample>> {
    evolve(&wavelength_params(label, base), num_samples)
}

// ============================================================================
// TESTS
// ============================================================================
