//! The `Multiplier` trait and the error type shared by all multipliers.

use crate::guard::{ArithmeticOverflow, OpCounts};
use crate::matrix::Matrix;

/// Error type for matrix multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// An intermediate value did not fit in the element type.
    #[error(transparent)]
    Overflow(#[from] ArithmeticOverflow),

    /// The dimension cannot be handled by the selected algorithm.
    #[error("invalid dimension {0}: must be a power of two no smaller than 2")]
    InvalidDimension(usize),

    /// Operands (or a row and its matrix) disagree on size.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Products from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// A computed product together with the work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub matrix: Matrix,
    pub ops: OpCounts,
}

/// Square matrix multiplication strategy.
pub trait Multiplier: Send + Sync {
    /// Compute `a * b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Product, MatrixError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &str;
}

/// Reject operands of different size.
pub(crate) fn ensure_same_dim(a: &Matrix, b: &Matrix) -> Result<usize, MatrixError> {
    if a.dim() == b.dim() {
        Ok(a.dim())
    } else {
        Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::Operation;

    #[test]
    fn overflow_converts_and_displays_transparently() {
        let err: MatrixError = ArithmeticOverflow {
            op: Operation::Addition,
            lhs: i32::MAX,
            rhs: 1,
        }
        .into();
        assert_eq!(
            err.to_string(),
            format!("addition overflow for a = {} b = 1", i32::MAX)
        );
    }

    #[test]
    fn same_dim_check() {
        assert_eq!(ensure_same_dim(&Matrix::zeros(4), &Matrix::zeros(4)), Ok(4));
        assert_eq!(
            ensure_same_dim(&Matrix::zeros(4), &Matrix::zeros(2)),
            Err(MatrixError::DimensionMismatch { left: 4, right: 2 })
        );
    }
}
