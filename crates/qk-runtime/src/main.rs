//! # Quasi-Kernel Engine Runtime
//!
//! The main entry point for the Quasi-Kernel engine.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (env-configured, compact or JSON)
//! 2. Load configuration (defaults + environment overrides)
//! 3. Run the scripted demonstration program once
//! 4. Start the heartbeat at the configured tick rate
//! 5. Run until the demo tick budget is spent or Ctrl+C
//!
//! ## Engine Loop
//!
//! ```text
//!   demo program (once)            heartbeat (every tick)
//!   ───────────────────            ──────────────────────
//!   1550 nm pulse                  ScalarState::advance
//!   global observables      ──►    ResourcePool::tick
//!   allocate / free / check        summary every 1000 ticks
//!   phase offset to pi
//!   405 nm pulse
//!   threshold report
//! ```
//!
//! The core subsystems are synchronous; async appears only here, for the
//! interval timer and the Ctrl+C listener.

mod heartbeat;
mod program;

use std::time::Duration;

use anyhow::Result;
use tracing::{error, info};
use uuid::Uuid;

use qk_02_dynamics::{DynamicsConfig, ScalarState};
use qk_05_pool::{PoolConfig, ResourcePool};
use qk_telemetry::{init_telemetry, TelemetryConfig};
use shared_types::EngineConfig;

use crate::heartbeat::Heartbeat;

/// The engine runtime orchestrating the demo program and the heartbeat.
pub struct EngineRuntime {
    /// Runtime-level configuration.
    config: EngineConfig,
    /// Session identifier carried through the log context.
    run_id: Uuid,
    /// Handle of the spawned heartbeat task.
    heartbeat: Option<tokio::task::JoinHandle<()>>,
    /// Shutdown signal sender.
    shutdown_tx: tokio::sync::watch::Sender<bool>,
    /// Shutdown signal receiver.
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
}

impl EngineRuntime {
    /// Create a new engine runtime with configuration.
    pub fn new(config: EngineConfig) -> Self {
        info!("Creating Quasi-Kernel engine runtime");

        let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

        Self {
            config,
            run_id: Uuid::new_v4(),
            heartbeat: None,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Start the engine.
    ///
    /// Runs the demonstration program to completion on the caller's context,
    /// then hands the engine state to the heartbeat task.
    pub async fn start(&mut self) -> Result<()> {
        info!("===========================================");
        info!("  Quasi-Kernel Engine Runtime v0.1.0");
        info!("  Run ID: {}", self.run_id);
        info!("===========================================");

        // Mirror the runtime knobs into the subsystem configs.
        let dynamics = DynamicsConfig::default();
        let pool_config = PoolConfig {
            capacity: self.config.pool_capacity,
            ..PoolConfig::default()
        };
        let mut state = ScalarState::new();
        let mut pool = ResourcePool::new(pool_config, dynamics);

        program::run(self.run_id, &dynamics, &mut state, &mut pool)?;

        // The heartbeat owns the engine state from here on.
        let heartbeat = Heartbeat::new(
            dynamics,
            state,
            pool,
            self.config.tick_hz,
            self.config.demo_ticks,
        );
        let mut shutdown = self.shutdown_rx.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = heartbeat.run() => {}
                _ = shutdown.changed() => {
                    info!("[heartbeat] Shutdown signal received");
                }
            }
        });
        self.heartbeat = Some(handle);

        info!("Engine initialized and running");
        info!("Tick rate: {} Hz", self.config.tick_hz);
        info!("Pool capacity: {}", self.config.pool_capacity);
        info!("Demo budget: {} ticks", self.config.demo_ticks);

        Ok(())
    }

    /// Wait for the heartbeat to spend its tick budget.
    pub async fn wait(&mut self) {
        if let Some(handle) = self.heartbeat.as_mut() {
            if let Err(e) = handle.await {
                error!("Heartbeat task failed: {}", e);
            }
        }
    }

    /// Shut the engine down gracefully.
    pub async fn shutdown(&self) {
        info!("Initiating graceful shutdown...");

        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }

        // Give the heartbeat time to observe the signal.
        tokio::time::sleep(Duration::from_millis(500)).await;

        info!("Shutdown complete");
    }
}

/// Load configuration from the environment.
///
/// Recognized variables: `QK_TICK_HZ`, `QK_POOL_CAPACITY`, `QK_DEMO_TICKS`;
/// unparsable values fall back to the defaults.
fn load_config() -> EngineConfig {
    EngineConfig::from_env()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; the guard flushes on exit.
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;

    let config = load_config();

    let mut runtime = EngineRuntime::new(config);
    runtime.start().await?;

    // Keep the engine running until the budget is spent or the operator stops it.
    info!("Engine is running. Press Ctrl+C to stop.");
    tokio::select! {
        _ = runtime.wait() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl+C received");
        }
    }

    // Graceful shutdown
    runtime.shutdown().await;

    Ok(())
}
