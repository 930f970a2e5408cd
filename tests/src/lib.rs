//! # Quasi-Kernel Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/               # Cross-subsystem flows
//!     ├── engine_cycle.rs        # Demo-shaped end-to-end pass
//!     ├── lindblad_conservation.rs # Trace, Hermiticity, purity under evolution
//!     ├── operator_parity.rs     # Operator drive across representations
//!     └── pool_lifecycle.rs      # Allocation, evaporation, reuse
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qk-tests
//!
//! # By category
//! cargo test -p qk-tests integration::
//!
//! # Benchmarks
//! cargo bench -p qk-tests
//! ```

pub mod integration;
