//! # qk-04-laser
//!
//! A four-level laser with an optical cavity, expressed as a Lindblad system.
//!
//! ## Overview
//!
//! The model lives on the tensor-product space `H_atom ⊗ H_cavity` (4 atomic
//! levels, `dim_cavity` Fock levels):
//!
//! ```text
//!   |3⟩ ──γ32──► |2⟩ ─┐
//!    ▲                │ g (Jaynes-Cummings, photon exchange with cavity)
//!    │ pump           │
//!    │                ▼
//!   |0⟩ ◄──γ10── |1⟩ ◄┘ γ21
//!
//!   cavity: a†a photons, loss κ
//! ```
//!
//! Hamiltonian `H = ω_c·a†a + ω_a·σ₂₂ + g·(a†σ₁₂ + a·σ₂₁)`, five jump
//! channels registered in a fixed order: cavity loss, incoherent pump
//! `0 → 3`, and the `3 → 2`, `2 → 1`, `1 → 0` decays. The lasing transition
//! is `2 → 1`: the pump inverts it through the fast `3 → 2` decay while the
//! fast `1 → 0` decay keeps the lower level empty.
//!
//! | Item | Where |
//! |------|-------|
//! | Parameters and threshold | [`params`] |
//! | Operator construction (Kronecker products) | [`builder`] |
//! | Observables (photons, populations, coherence, g²) | [`observables`] |
//! | Time evolution with sampling | [`evolve`] |
//! | Wavelength-labelled pulse bridge | [`pulse`] |
//!
//! With the default parameters the pump sits a factor 16 above the lasing
//! threshold `κ·γ₂₁/(4g²) = 0.0125`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use qk_04_laser::{LaserParams, evolve::evolve};
//!
//! let mut params = LaserParams::default();
//! params.dim_cavity = 4;   // keep the demo quick
//! params.t_end = 2.0;
//!
//! for sample in evolve(&params, 10)? {
//!     println!("t = {:6.2}  n = {:.4}  inversion = {:+.4}",
//!              sample.time, sample.n_photons, sample.inversion);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod evolve;
pub mod observables;
pub mod params;
pub mod pulse;

pub use builder::build_system;
pub use error::{LaserError, LaserResult};
pub use evolve::evolve;
pub use observables::{LaserObservables, LaserSample};
pub use params::LaserParams;
pub use pulse::{emit_pulse, wavelength_params};
