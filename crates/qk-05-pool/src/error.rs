//! Pool-level errors.

use thiserror::Error;

/// Result alias for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors surfaced by the resource pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Allocation found no vacant record. Freed records evaporate lazily, so
    /// the pool can be exhausted even right after a `free`.
    #[error("pool exhausted: all {capacity} records are occupied or evaporating")]
    Exhausted { capacity: usize },
}

// ============================================================================
// TESTS
// ============================================================================
