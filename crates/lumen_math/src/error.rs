//! Errors raised by the algebra core.

use thiserror::Error;

/// Errors that can occur during tuple and matrix operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The matrix has a zero determinant and cannot be inverted.
    #[error("matrix is not invertible (determinant = {determinant})")]
    SingularMatrix { determinant: f64 },

    /// A tuple operation with no geometric meaning, e.g. adding two points.
    #[error("invalid tuple operation: {0}")]
    InvalidTupleOperation(&'static str),

    /// Two matrices of different sizes were combined.
    #[error("matrix dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },
}

pub type MathResult<T> = Result<T, MathError>;
