//! Engine-level runtime configuration.

use serde::{Deserialize, Serialize};

/// Top-level knobs for the engine runtime.
///
/// Subsystem parameters (dynamics constants, pool geometry, laser model
/// parameters) are owned by their subsystems; this covers only the runtime
/// loop itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Target tick rate of the demo loop, in ticks per second.
    pub tick_hz: u64,
    /// Number of records in the resource pool.
    pub pool_capacity: usize,
    /// How many ticks the demo runs before shutting down on its own.
    pub demo_ticks: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_hz: 1000,
            pool_capacity: 256,
            demo_ticks: 5000,
        }
    }
}

impl EngineConfig {
    /// Builds a config from defaults, then applies environment overrides.
    ///
    /// Recognized variables: `QK_TICK_HZ`, `QK_POOL_CAPACITY`, `QK_DEMO_TICKS`.
    /// Unparsable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("QK_TICK_HZ") {
            if let Ok(hz) = v.parse() {
                config.tick_hz = hz;
            }
        }
        if let Ok(v) = std::env::var("QK_POOL_CAPACITY") {
            if let Ok(cap) = v.parse() {
                config.pool_capacity = cap;
            }
        }
        if let Ok(v) = std::env::var("QK_DEMO_TICKS") {
            if let Ok(ticks) = v.parse() {
                config.demo_ticks = ticks;
            }
        }

        config
    }
}

// ============================================================================
// TESTS
// ============================================================================
