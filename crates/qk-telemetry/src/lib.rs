//! # qk-telemetry
//!
//! Tracing setup for the engine: an `EnvFilter`-driven subscriber with either
//! a compact console format or JSON lines, held alive by a guard.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qk_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())
//!         .expect("telemetry init");
//!
//!     tracing::info!("engine starting");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QK_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honored) |
//! | `QK_LOG_JSON` | `false` | `true`/`1` switches to JSON output |

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry initialization errors.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("telemetry already initialized for this process")]
    AlreadyInitialized,

    /// The configured log level did not parse as a filter directive.
    #[error("invalid log filter: {0}")]
    Filter(String),
}

/// Guard that keeps the telemetry stack alive. Drop on shutdown.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "telemetry shut down");
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the config's `log_level` when set. Installing twice
/// in one process yields [`TelemetryError::AlreadyInitialized`].
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_output {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(false);
        registry.with(json_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true);
        registry.with(fmt_layer).try_init()
    };
    installed.map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::info!(
        service = %config.service_name,
        log_level = %config.log_level,
        json = config.json_output,
        "telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Convenience macro for engine-scoped spans.
///
/// ```rust,ignore
/// let _span = engine_span!("pool_tick", tick = tick_index).entered();
/// ```
#[macro_export]
macro_rules! engine_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
    ($name:expr) => {
        tracing::info_span!($name)
    };
}

// ============================================================================
// TESTS
// ============================================================================
