//! Error types for matrix construction and multiplication.

use crate::matrix::Dimensions;

/// A matrix does not have the shape an operation requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// The matrix has no rows, or its first row has no elements.
    #[error("matrix is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("ragged matrix: row {row} has {found} elements, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Element-wise operands have different shapes.
    #[error("shape mismatch: {left} vs {right}")]
    Mismatched { left: Dimensions, right: Dimensions },

    /// Quadrant split needs both dimensions even.
    #[error("cannot split {0} matrix into quadrants: dimensions must be even")]
    OddDimension(Dimensions),

    /// Quadrants passed to a join do not line up.
    #[error("incompatible quadrants: {top_left} | {top_right} / {bottom_left} | {bottom_right}")]
    QuadrantMismatch {
        top_left: Dimensions,
        top_right: Dimensions,
        bottom_left: Dimensions,
        bottom_right: Dimensions,
    },

    /// An operation required a square matrix of a specific side.
    #[error("expected {expected}x{expected} matrix, got {found}")]
    WrongSize { expected: usize, found: Dimensions },

    /// The recursive engine requires square operands with a power-of-two side.
    #[error("expected square power-of-two operands, got {left} and {right}")]
    NotPowerOfTwoSquare { left: Dimensions, right: Dimensions },
}

/// Error type for Strassen multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrassenError {
    /// An operand has an invalid shape.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// The operands cannot be multiplied: `cols(left) != rows(right)`.
    #[error("dimension mismatch: cannot multiply {left} by {right}")]
    DimensionMismatch { left: Dimensions, right: Dimensions },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Products from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}
