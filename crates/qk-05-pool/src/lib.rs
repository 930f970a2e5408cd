//! # qk-05-pool
//!
//! A fixed-capacity resource pool whose page lifecycle is driven by
//! per-record metriplectic dynamics.
//!
//! ## Overview
//!
//! Every slot embeds a scalar state on the Bloch sphere. Allocation parks a
//! record near the north pole, ticking relaxes it toward the equator, and
//! freeing hands it to an evaporation flow toward `2π`, where it resets to
//! vacancy:
//!
//! ```text
//!           allocate                     θ > thresholds
//! [Empty] ───────────► [Allocated] ─────────────────────► [Thermal]
//!    ▲                      │                                 │
//!    │ ε-reset              │ free                            │ projection
//!    │                      ▼                                 ▼
//!    └───────────────[Evaporating] ◄──────────────────────────┘
//! ```
//!
//! During `tick` the band projection is applied along forward edges only
//! (`Allocated → Thermal → Evaporating`); `Empty` is entered solely through
//! the ε-reset and left solely through `allocate`. Reclamation is lazy: a
//! freed record keeps its slot occupied until its angle crosses
//! `2π − evaporation_epsilon`.
//!
//! Pool-wide aggregates (centroid, entropy, viscosity, metric determinant,
//! curvature) are recomputed wholesale at the end of every tick and exposed
//! through [`PoolAggregates`] and [`PoolReport`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use qk_05_pool::{PoolConfig, ResourcePool};
//! use qk_02_dynamics::DynamicsConfig;
//!
//! let mut pool = ResourcePool::new(PoolConfig::default(), DynamicsConfig::default());
//! let address = pool.allocate(1024)?;
//!
//! for _ in 0..100 {
//!     pool.tick();
//! }
//!
//! pool.free(address);
//! println!("occupied: {}/{}", pool.occupied(), pool.capacity());
//! println!("centroid: {:.4}", pool.aggregates().centroid);
//! ```

pub mod error;
pub mod pool;
pub mod record;

pub use error::{PoolError, PoolResult};
pub use pool::{PoolAggregates, PoolConfig, PoolReport, ResourcePool, ThermalVerdict};
pub use record::{project_state, LifecycleState, RecordSnapshot, ResourceRecord};
