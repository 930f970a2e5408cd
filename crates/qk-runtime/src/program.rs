//! Scripted demonstration program, run once at startup.
//!
//! Walks every subsystem in sequence: a near-resonant laser pulse, the global
//! scalar dynamics, the resource pool lifecycle, a thermal check, and a
//! far-detuned pulse after shifting the global phase offset. The heartbeat
//! takes over afterwards.

use std::f64::consts::PI;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use uuid::Uuid;

use qk_02_dynamics::{DynamicsConfig, ScalarObservables, ScalarState};
use qk_04_laser::{emit_pulse, LaserParams};
use qk_05_pool::{ResourcePool, ThermalVerdict};
use qk_telemetry::engine_span;

/// Run the demonstration sequence against the live engine state.
///
/// The laser horizon is shortened here so the program completes promptly;
/// the physical defaults stay untouched for the rest of the session.
pub fn run(
    run_id: Uuid,
    dynamics: &DynamicsConfig,
    state: &mut ScalarState,
    pool: &mut ResourcePool,
) -> Result<()> {
    let span = engine_span!("demo_program", run_id = %run_id);
    let _guard = span.enter();

    info!("[demo] Scripted demonstration program starting");

    let mut base = LaserParams::default();
    base.dim_cavity = 4;
    base.t_end = 2.0;

    // Step 1: near-resonant pulse.
    let samples = emit_pulse("pulse-1550nm", &base, 8).context("1550 nm pulse failed")?;
    if let Some(last) = samples.last() {
        info!(
            "[demo] 1550 nm pulse: n = {:.4}, inversion = {:+.4}, g2 = {:.4} at t = {:.2}",
            last.n_photons, last.inversion, last.g2, last.time
        );
    }

    // Step 2: warm up the global dynamics and read the diagnostics.
    for _ in 0..16 {
        state.advance(dynamics);
    }
    let observables = ScalarObservables::compute(state, dynamics);
    info!(
        theta = state.theta,
        reynolds = observables.reynolds,
        centroid_z = observables.centroid_z,
        "[demo] Global dynamics after warm-up"
    );

    // Step 3: exercise the pool lifecycle.
    let first = pool.allocate(1024).context("first allocation failed")?;
    let second = pool.allocate(2048).context("second allocation failed")?;
    let third = pool.allocate(8192).context("third allocation failed")?;
    info!(
        "[demo] Allocated pages at {:#x}, {:#x}, {:#x} ({} occupied)",
        first,
        second,
        third,
        pool.occupied()
    );
    pool.free(second);
    info!(
        "[demo] Freed page {:#x}; reclamation rides on the heartbeat",
        second
    );

    // Step 4: thermal check on a page that stays allocated.
    match pool.thermal_check(first, 0.5) {
        Some(ThermalVerdict::Stable) => info!("[demo] Thermal check on {:#x}: stable", first),
        Some(ThermalVerdict::Critical) => warn!("[demo] Thermal check on {:#x}: critical", first),
        None => warn!("[demo] Thermal check on {:#x}: no live record", first),
    }

    // Step 5: shift the global phase offset and emit the far-detuned pulse.
    *state = ScalarState::with_phase_offset(PI);
    info!("[demo] Global phase offset shifted to pi");

    let samples = emit_pulse("pulse-405nm", &base, 8).context("405 nm pulse failed")?;
    if let Some(last) = samples.last() {
        info!(
            "[demo] 405 nm pulse: n = {:.4}, inversion = {:+.4}, g2 = {:.4} at t = {:.2}",
            last.n_photons, last.inversion, last.g2, last.time
        );
    }

    // Step 6: threshold report.
    info!(
        "[demo] Lasing threshold: pump {:.4} vs threshold {:.4} (ratio {:.1})",
        base.pump_rate,
        base.threshold(),
        base.threshold_param()
    );

    let report = serde_json::to_string(&pool.report()).context("pool report failed")?;
    debug!("[demo] Pool report: {}", report);

    info!("[demo] Scripted demonstration program complete");
    Ok(())
}
