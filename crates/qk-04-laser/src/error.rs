//! Laser-level errors.

use qk_03_lindblad::MatrixError;
use thiserror::Error;

/// Result alias for laser construction and evolution.
pub type LaserResult<T> = Result<T, LaserError>;

/// Errors surfaced by the laser model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaserError {
    /// A matrix-engine failure (dimension, shape, or channel capacity).
    #[error("matrix engine error: {0}")]
    Matrix(#[from] MatrixError),

    /// The observable series needs at least one sample.
    #[error("sample count must be at least 1")]
    InvalidSampleCount,
}

// ============================================================================
// TESTS
// ============================================================================
