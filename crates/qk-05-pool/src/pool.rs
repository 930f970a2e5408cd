//! The fixed-capacity resource pool.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{debug, info, warn};

use qk_02_dynamics::{DynamicsConfig, RelaxationTarget};
use shared_types::SCHEDULING_DELTA;

use crate::error::{PoolError, PoolResult};
use crate::record::{project_state, LifecycleState, RecordSnapshot, ResourceRecord};

/// Construction parameters of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of page slots.
    pub capacity: usize,
    /// Bytes per page; allocation sizes are clamped to this.
    pub page_size: u64,
    /// Address of slot 0; slot `i` sits at `base_address + i·page_size`.
    pub base_address: u64,
    /// Width of the reset window below `2π`.
    pub evaporation_epsilon: f64,
    /// Relaxation rate of evaporating records (their target is `2π`).
    pub evaporation_rate: f64,
    /// Coupling of information density into the metric determinant.
    pub metric_coupling: f64,
    /// Per-slot operator phase offset step.
    pub slot_phase_step: f64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            page_size: 4096,
            base_address: 0x0010_0000,
            evaporation_epsilon: 0.1,
            evaporation_rate: 0.05,
            metric_coupling: 0.1,
            slot_phase_step: SCHEDULING_DELTA,
        }
    }
}

/// Pool-wide observables, recomputed wholesale at the end of every tick.
///
/// Means run over the non-`Empty` records. An empty pool reads determinant 1
/// and zeros everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolAggregates {
    /// Mean angle normalized to `[0, 1)` (`mean θ / 2π`).
    pub centroid: f64,
    /// Mean angle of the live records.
    pub mean_angle: f64,
    /// Summed local entropy.
    pub total_entropy: f64,
    /// Mean bath viscosity.
    pub mean_viscosity: f64,
    /// `1 + metric_coupling · mean(density)` with per-record
    /// `density = (size/page_size)·(1 + sin θ)`.
    pub metric_determinant: f64,
    /// `(metric_determinant − 1) / occupied`; 0 for an empty pool.
    pub curvature: f64,
}

impl Default for PoolAggregates {
    fn default() -> Self {
        Self {
            centroid: 0.0,
            mean_angle: 0.0,
            total_entropy: 0.0,
            mean_viscosity: 0.0,
            metric_determinant: 1.0,
            curvature: 0.0,
        }
    }
}

/// Diagnostic verdict of a [`ResourcePool::thermal_check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalVerdict {
    /// Record entropy at or below the caller's threshold.
    Stable,
    /// Record entropy above the caller's threshold.
    Critical,
}

/// Serializable picture of the whole pool: counts, aggregates, live records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolReport {
    /// Number of non-`Empty` records.
    pub occupied: usize,
    /// Total slot count.
    pub capacity: usize,
    /// Aggregates as of the last tick.
    pub aggregates: PoolAggregates,
    /// Snapshots of the non-`Empty` records, in slot order.
    pub records: Vec<RecordSnapshot>,
}

/// Fixed-capacity page pool whose records live on the Bloch sphere.
///
/// `allocate` starts a record near the north pole, ticking relaxes it toward
/// the equator, and `free` hands it to the evaporation flow toward `2π`,
/// where the ε-reset makes the slot vacant again. Aggregates reflect the
/// state as of the last [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct ResourcePool {
    config: PoolConfig,
    dynamics: DynamicsConfig,
    records: Vec<ResourceRecord>,
    occupied: usize,
    aggregates: PoolAggregates,
}

impl ResourcePool {
    /// Builds a pool with every slot vacant.
    pub fn new(config: PoolConfig, dynamics: DynamicsConfig) -> Self {
        let records = (0..config.capacity)
            .map(|index| {
                ResourceRecord::vacant(
                    index,
                    config.base_address,
                    config.page_size,
                    config.slot_phase_step,
                )
            })
            .collect();
        Self {
            config,
            dynamics,
            records,
            occupied: 0,
            aggregates: PoolAggregates::default(),
        }
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of non-`Empty` records.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Aggregates as of the last tick.
    pub fn aggregates(&self) -> PoolAggregates {
        self.aggregates
    }

    /// Allocates a page and returns its address.
    ///
    /// Picks the vacant record with the smallest angle (ties go to the lowest
    /// index). The request size is clamped to the page size. Fails with
    /// [`PoolError::Exhausted`], touching nothing, when no record is vacant;
    /// freed records still mid-evaporation count as occupied here.
    pub fn allocate(&mut self, size: u64) -> PoolResult<u64> {
        let mut best: Option<(usize, f64)> = None;
        for (index, record) in self.records.iter().enumerate() {
            if record.lifecycle != LifecycleState::Empty {
                continue;
            }
            let theta = record.state.theta;
            if best.map_or(true, |(_, best_theta)| theta < best_theta) {
                best = Some((index, theta));
            }
        }

        let (index, _) = match best {
            Some(found) => found,
            None => {
                warn!(
                    capacity = self.config.capacity,
                    "allocation failed, pool exhausted"
                );
                return Err(PoolError::Exhausted {
                    capacity: self.config.capacity,
                });
            }
        };

        let record = &mut self.records[index];
        record.size = size.min(self.config.page_size);
        record.state.theta = 0.1;
        record.state.refresh_operator(&self.dynamics);
        record.lifecycle = LifecycleState::Allocated;
        self.occupied += 1;

        debug!(
            index = index,
            address = record.address,
            size = record.size,
            "record allocated"
        );
        Ok(record.address)
    }

    /// Hands a record to the evaporation flow.
    ///
    /// The record is only relabeled; the slot stays occupied until its angle
    /// crosses the reset window near `2π`. An unknown address or an
    /// already-vacant record is a no-op, so a double `free` cannot skew the
    /// occupancy count.
    pub fn free(&mut self, address: u64) {
        match self.records.iter().position(|r| r.address == address) {
            Some(index) if self.records[index].lifecycle != LifecycleState::Empty => {
                self.records[index].lifecycle = LifecycleState::Evaporating;
                debug!(index = index, address = address, "record marked evaporating");
            }
            Some(_) => {
                debug!(address = address, "free of a vacant record ignored");
            }
            None => {
                debug!(address = address, "free of an unknown address ignored");
            }
        }
    }

    /// Advances every live record by one metriplectic step.
    ///
    /// `Allocated`/`Thermal` records relax toward the equilibrium of the
    /// dynamics config; `Evaporating` records relax toward `2π` at the
    /// pool's evaporation rate. The lifecycle projection is applied along
    /// forward edges only, then any evaporating record inside the ε-window
    /// below `2π` is reset to vacancy. Aggregates are recomputed last.
    pub fn tick(&mut self) {
        let relaxation = self.dynamics.relaxation();
        let evaporation = RelaxationTarget {
            theta_equilibrium: TAU,
            rate: self.config.evaporation_rate,
        };

        for (index, record) in self.records.iter_mut().enumerate() {
            if record.lifecycle == LifecycleState::Empty {
                continue;
            }

            let target = if record.lifecycle == LifecycleState::Evaporating {
                evaporation
            } else {
                relaxation
            };
            record.state.advance_toward(&self.dynamics, target);

            let projected = project_state(record.state.operator_value, record.state.theta);
            if record.lifecycle.can_advance_to(projected) {
                let previous = record.lifecycle;
                record.lifecycle = projected;
                debug!(
                    index = index,
                    from = ?previous,
                    to = ?projected,
                    theta = record.state.theta,
                    "record projected forward"
                );
            }

            if record.lifecycle == LifecycleState::Evaporating
                && record.state.theta > TAU - self.config.evaporation_epsilon
            {
                record.lifecycle = LifecycleState::Empty;
                record.state.theta = 0.0;
                record.size = 0;
                self.occupied -= 1;
                info!(
                    index = index,
                    address = record.address,
                    "record evaporated back to vacancy"
                );
            }
        }

        self.recompute_aggregates();
    }

    /// Snapshot of the slot at `index`, vacant or not.
    pub fn snapshot(&self, index: usize) -> Option<RecordSnapshot> {
        self.records
            .get(index)
            .map(|record| make_snapshot(index, record))
    }

    /// Full pool picture: counts, aggregates, and the live records.
    pub fn report(&self) -> PoolReport {
        let records = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.lifecycle != LifecycleState::Empty)
            .map(|(index, record)| make_snapshot(index, record))
            .collect();
        PoolReport {
            occupied: self.occupied,
            capacity: self.config.capacity,
            aggregates: self.aggregates,
            records,
        }
    }

    /// Compares a record's entropy against a caller threshold.
    ///
    /// Returns `None` for an address outside the pool.
    pub fn thermal_check(&self, address: u64, threshold: f64) -> Option<ThermalVerdict> {
        self.records
            .iter()
            .find(|record| record.address == address)
            .map(|record| {
                if record.state.entropy > threshold {
                    ThermalVerdict::Critical
                } else {
                    ThermalVerdict::Stable
                }
            })
    }

    fn recompute_aggregates(&mut self) {
        if self.occupied == 0 {
            self.aggregates = PoolAggregates::default();
            return;
        }

        let mut sum_theta = 0.0;
        let mut sum_entropy = 0.0;
        let mut sum_viscosity = 0.0;
        let mut sum_density = 0.0;
        for record in &self.records {
            if record.lifecycle == LifecycleState::Empty {
                continue;
            }
            sum_theta += record.state.theta;
            sum_entropy += record.state.entropy;
            sum_viscosity += record.state.viscosity;
            sum_density += (record.size as f64 / self.config.page_size as f64)
                * (1.0 + record.state.theta.sin());
        }

        let count = self.occupied as f64;
        let mean_angle = sum_theta / count;
        let metric_determinant = 1.0 + self.config.metric_coupling * (sum_density / count);
        self.aggregates = PoolAggregates {
            centroid: mean_angle / TAU,
            mean_angle,
            total_entropy: sum_entropy,
            mean_viscosity: sum_viscosity / count,
            metric_determinant,
            curvature: (metric_determinant - 1.0) / count,
        };
    }
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::new(PoolConfig::default(), DynamicsConfig::default())
    }
}

fn make_snapshot(index: usize, record: &ResourceRecord) -> RecordSnapshot {
    RecordSnapshot {
        index,
        address: record.address,
        theta: record.state.theta,
        lifecycle: record.lifecycle,
        entropy: record.state.entropy,
    }
}

// ============================================================================
// TESTS
// ============================================================================
