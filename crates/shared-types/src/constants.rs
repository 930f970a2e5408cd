//! Numeric constants shared across the engine.
//!
//! The operator chain is driven by the golden ratio conjugate: it is the
//! "most irrational" frequency, so the sequence `π · φ' · n` never locks onto
//! a rational cycle and the operator samples its range quasiperiodically.

/// Golden ratio, `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

/// Golden ratio conjugate, `φ - 1 = 1/φ`. Default operator frequency.
pub const GOLDEN_CONJUGATE: f64 = 0.6180339887498948;

/// Phase offset applied per scheduling slot so co-resident records decorrelate.
pub const SCHEDULING_DELTA: f64 = 0.18;

/// Reynolds numbers below this are classified laminar.
pub const REYNOLDS_LAMINAR_THRESHOLD: f64 = 2300.0;

/// Operator magnitudes above this are classified chaotic.
pub const CHAOS_THRESHOLD: f64 = 0.5;

// ============================================================================
// TESTS
// ============================================================================
