//! Fixed-rate tick loop driving the global state and the resource pool.

use std::time::Duration;

use tracing::info;

use qk_02_dynamics::{DynamicsConfig, ScalarObservables, ScalarState};
use qk_05_pool::ResourcePool;

/// How often the heartbeat logs a summary line, in ticks.
const SUMMARY_EVERY: u64 = 1000;

/// Owns the mutable engine state and advances it once per tick.
///
/// Core calls stay strictly sequential; the heartbeat is async only for the
/// interval timer between ticks.
pub struct Heartbeat {
    dynamics: DynamicsConfig,
    state: ScalarState,
    pool: ResourcePool,
    tick_hz: u64,
    budget: u64,
}

impl Heartbeat {
    pub fn new(
        dynamics: DynamicsConfig,
        state: ScalarState,
        pool: ResourcePool,
        tick_hz: u64,
        budget: u64,
    ) -> Self {
        Self {
            dynamics,
            state,
            pool,
            tick_hz,
            budget,
        }
    }

    /// Run the tick loop until the demo budget is spent.
    pub async fn run(mut self) {
        // At least one microsecond; a zero period would panic the timer.
        let period = Duration::from_micros((1_000_000 / self.tick_hz.max(1)).max(1));
        info!(
            "[heartbeat] Started at {} Hz, budget {} ticks",
            self.tick_hz.max(1),
            self.budget
        );

        let mut interval = tokio::time::interval(period);
        let mut tick: u64 = 0;
        while tick < self.budget {
            interval.tick().await;

            self.state.advance(&self.dynamics);
            self.pool.tick();
            tick += 1;

            if tick % SUMMARY_EVERY == 0 {
                let observables = ScalarObservables::compute(&self.state, &self.dynamics);
                let aggregates = self.pool.aggregates();
                info!(
                    tick,
                    theta = self.state.theta,
                    reynolds = observables.reynolds,
                    ipr = observables.ipr,
                    occupied = self.pool.occupied(),
                    metric_determinant = aggregates.metric_determinant,
                    "[heartbeat] summary"
                );
            }
        }

        info!("[heartbeat] Demo budget of {} ticks spent", self.budget);
    }
}
