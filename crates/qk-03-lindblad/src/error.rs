//! Typed errors for the matrix engine.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors surfaced by matrix construction, arithmetic, and system assembly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A requested dimension exceeds the compile-time bound.
    #[error("matrix dimension {dim} exceeds the maximum of {max}")]
    DimensionExceeded { dim: usize, max: usize },

    /// Operand shapes are incompatible for the requested operation.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A square-only operation was handed a rectangular matrix.
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The jump-operator list is full.
    #[error("jump operator limit of {max} reached")]
    JumpOperatorLimit { max: usize },

    /// An index is outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

// ============================================================================
// TESTS
// ============================================================================
