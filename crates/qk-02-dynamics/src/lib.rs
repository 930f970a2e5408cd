//! # qk-02-dynamics
//!
//! Metriplectic evolution of a single angle variable.
//!
//! ## Overview
//!
//! A [`ScalarState`] carries one "Bloch angle" `θ ∈ [0, 2π)` plus the
//! quantities derived from it. Each step splits into two halves that are
//! summed, never mixed:
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!   operator O(n) │ conservative (symplectic)    │   O · sin(2θ) · scale
//!        ──────►  │                              ├──┐
//!                 └──────────────────────────────┘  │
//!                                                   ├──► θ' = wrap(θ + ΔH + ΔD)
//!                 ┌──────────────────────────────┐  │
//!   bath η(θ)     │ dissipative (metric)         ├──┘
//!        ──────►  │                              │   η · (θ_eq − θ) · rate
//!                 └──────────────────────────────┘
//! ```
//!
//! The conservative half is driven by the quasiperiodic operator from
//! `qk-01-operator`; the dissipative half pulls `θ` toward an equilibrium
//! angle through a θ-dependent bath viscosity. Both Lagrangians are kept as
//! diagnostics so the two halves stay separately inspectable.
//!
//! The same step function serves the global engine state and every record of
//! the resource pool; pool records override the relaxation target during
//! evaporation via [`RelaxationTarget`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use qk_02_dynamics::{DynamicsConfig, ScalarState, ScalarObservables};
//!
//! let config = DynamicsConfig::default();
//! let mut state = ScalarState::new();
//! for _ in 0..100 {
//!     state.advance(&config);
//! }
//! let obs = ScalarObservables::compute(&state, &config);
//! assert!(obs.reynolds > 0.0);
//! ```

pub mod config;
pub mod observables;
pub mod state;

pub use config::{DynamicsConfig, RelaxationTarget};
pub use observables::{amplitude_ipr, ScalarObservables};
pub use state::{bath_viscosity, local_entropy, wrap_angle, ScalarState};
