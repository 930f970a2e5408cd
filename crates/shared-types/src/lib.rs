//! # shared-types
//!
//! Shared vocabulary of the Quasi-Kernel engine: the numeric constants every
//! subsystem agrees on, and the top-level engine configuration.
//!
//! ## Overview
//!
//! This crate deliberately has no engine logic. It provides:
//!
//! - **Constants**: the golden-ratio pair driving the quasiperiodic operator,
//!   the scheduling phase step, and the classification thresholds consumers
//!   apply to derived observables.
//! - **Configuration**: [`EngineConfig`], the runtime-level knobs, with
//!   environment-variable overrides.
//!
//! Subsystem-specific configuration (dynamics constants, pool geometry, laser
//! parameters) lives with the subsystem that owns it.

pub mod config;
pub mod constants;

pub use config::EngineConfig;
pub use constants::{
    CHAOS_THRESHOLD, GOLDEN_CONJUGATE, GOLDEN_RATIO, REYNOLDS_LAMINAR_THRESHOLD, SCHEDULING_DELTA,
};
