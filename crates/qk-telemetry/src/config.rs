//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for the tracing stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name stamped on the startup log line.
    pub service_name: String,
    /// Log level filter (trace, debug, info, warn, error), used when
    /// `RUST_LOG` is not set.
    pub log_level: String,
    /// Emit JSON-formatted lines instead of the compact console format.
    pub json_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "quasi-kernel".to_string(),
            log_level: "info".to_string(),
            json_output: false,
        }
    }
}

impl TelemetryConfig {
    /// Builds the configuration from environment variables.
    ///
    /// - `QK_LOG_LEVEL` (falling back to `RUST_LOG`): log level filter
    /// - `QK_LOG_JSON`: `true`/`1` switches to JSON output
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("QK_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_output: env::var("QK_LOG_JSON")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),

            ..Self::default()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
