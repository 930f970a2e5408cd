//! Pool records and the lifecycle projection.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

use qk_02_dynamics::ScalarState;

/// Thermodynamic lifecycle of one pool record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Vacant slot, angle at the north pole.
    Empty,
    /// In use, angle in the transition band.
    Allocated,
    /// Saturated, angle near the equator.
    Thermal,
    /// Being reclaimed, angle drifting toward `2π`.
    Evaporating,
}

impl LifecycleState {
    /// Whether the tick projection may relabel this state as `next`.
    ///
    /// Only forward edges are walkable: `Allocated → Thermal`,
    /// `Allocated → Evaporating`, `Thermal → Evaporating`. `Empty` is entered
    /// through the evaporation reset and left through `allocate`, never
    /// through the projection; a backward projection outcome leaves the
    /// stored label untouched.
    pub fn can_advance_to(self, next: LifecycleState) -> bool {
        matches!(
            (self, next),
            (LifecycleState::Allocated, LifecycleState::Thermal)
                | (LifecycleState::Allocated, LifecycleState::Evaporating)
                | (LifecycleState::Thermal, LifecycleState::Evaporating)
        )
    }
}

/// Maps `(operator_value, theta)` onto a lifecycle label.
///
/// Band edges, checked top-down with strict inequalities:
///
/// | Condition | Label |
/// |-----------|-------|
/// | `θ > 5π/4` | `Evaporating` |
/// | `θ > 3π/4` and `\|O\| > 1.5` | `Thermal` |
/// | `θ > π/4` and `\|O\| > 0.5` | `Allocated` |
/// | otherwise | `Empty` |
///
/// The tick generator keeps `|O| ≤ 1`, so the `Thermal` band only opens for
/// operator magnitudes supplied from outside the dynamics.
pub fn project_state(operator_value: f64, theta: f64) -> LifecycleState {
    if theta > 5.0 * FRAC_PI_4 {
        LifecycleState::Evaporating
    } else if theta > 3.0 * FRAC_PI_4 && operator_value.abs() > 1.5 {
        LifecycleState::Thermal
    } else if theta > FRAC_PI_4 && operator_value.abs() > 0.5 {
        LifecycleState::Allocated
    } else {
        LifecycleState::Empty
    }
}

/// One page slot. Slots are created at pool construction and only relabeled
/// afterwards; the address never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Page address, fixed at construction.
    pub address: u64,
    /// Bytes handed out by the current allocation, clamped to the page size.
    pub size: u64,
    /// The slot's scalar dynamics.
    pub state: ScalarState,
    /// Current lifecycle label.
    pub lifecycle: LifecycleState,
}

impl ResourceRecord {
    /// A vacant slot at the given index.
    ///
    /// Each slot gets its own operator phase offset (`phase_step · index`) so
    /// record dynamics decorrelate across the pool.
    pub fn vacant(index: usize, base_address: u64, page_size: u64, phase_step: f64) -> Self {
        Self {
            address: base_address + index as u64 * page_size,
            size: 0,
            state: ScalarState::with_phase_offset(phase_step * index as f64),
            lifecycle: LifecycleState::Empty,
        }
    }
}

/// Serializable view of one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    /// Slot index inside the pool.
    pub index: usize,
    /// Page address of the slot.
    pub address: u64,
    /// Current Bloch angle.
    pub theta: f64,
    /// Current lifecycle label.
    pub lifecycle: LifecycleState,
    /// Current local entropy.
    pub entropy: f64,
}

// ============================================================================
// TESTS
// ============================================================================
