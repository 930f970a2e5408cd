//! Fixed-step RK4 integration of the master equation.

use num_complex::Complex64;

use crate::error::MatrixResult;
use crate::matrix::ComplexMatrix;
use crate::system::LindbladSystem;

/// One classical RK4 step: `ρ ← ρ + dt/6·(k₁ + 2k₂ + 2k₃ + k₄)`.
///
/// Fixed step, no error estimate, no stability detection; the caller owns the
/// choice of `dt`.
pub fn step_rk4(system: &LindbladSystem, rho: &mut ComplexMatrix, dt: f64) -> MatrixResult<()> {
    let half_dt = Complex64::new(dt / 2.0, 0.0);
    let full_dt = Complex64::new(dt, 0.0);

    let k1 = system.rhs(rho)?;
    let stage = rho.add_scaled(&k1, half_dt)?;
    let k2 = system.rhs(&stage)?;
    let stage = rho.add_scaled(&k2, half_dt)?;
    let k3 = system.rhs(&stage)?;
    let stage = rho.add_scaled(&k3, full_dt)?;
    let k4 = system.rhs(&stage)?;

    let sixth = Complex64::new(dt / 6.0, 0.0);
    let third = Complex64::new(dt / 3.0, 0.0);
    rho.add_assign_scaled(&k1, sixth)?;
    rho.add_assign_scaled(&k2, third)?;
    rho.add_assign_scaled(&k3, third)?;
    rho.add_assign_scaled(&k4, sixth)?;
    Ok(())
}

/// Integrates `ρ` from `t_start` to `t_end` at fixed step `dt`, delivering
/// exactly `num_samples` observer calls at evenly spaced checkpoints.
///
/// The first sample fires at `t_start` before any step; subsequent targets
/// sit `(t_end - t_start) / (num_samples - 1)` apart and fire at the first
/// step boundary that reaches them. Checkpoints the grid never reaches
/// (uneven final step) are delivered at the final state, so the observer
/// always runs `num_samples` times. An observer error aborts the evolution.
///
/// `dt ≤ 0` performs no steps; the samples all see the initial state.
pub fn evolve<F>(
    system: &LindbladSystem,
    rho: &mut ComplexMatrix,
    t_start: f64,
    t_end: f64,
    dt: f64,
    num_samples: usize,
    mut observer: F,
) -> MatrixResult<()>
where
    F: FnMut(usize, f64, &ComplexMatrix) -> MatrixResult<()>,
{
    let t_total = t_end - t_start;
    let total_steps = if dt > 0.0 && t_total > 0.0 {
        (t_total / dt).ceil() as u64
    } else {
        0
    };
    // Zero spacing for a single sample keeps the index-0 target finite.
    let dt_sample = if num_samples > 1 {
        t_total / (num_samples - 1) as f64
    } else {
        0.0
    };

    let mut sample_index = 0usize;
    let mut t = t_start;
    for step in 0..=total_steps {
        t = t_start + step as f64 * dt;
        while sample_index < num_samples
            && t + 1e-12 >= t_start + sample_index as f64 * dt_sample
        {
            observer(sample_index, t, rho)?;
            sample_index += 1;
        }
        if step < total_steps {
            step_rk4(system, rho, dt)?;
        }
    }

    // Checkpoints beyond the last step boundary land on the final state.
    while sample_index < num_samples {
        observer(sample_index, t, rho)?;
        sample_index += 1;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
