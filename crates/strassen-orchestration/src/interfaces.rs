//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{Matrix, MatrixError, Product};

/// The two operands of a multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    pub a: Matrix,
    pub b: Matrix,
}

/// Produces a pair of `dim x dim` operand matrices.
pub trait MatrixSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load or generate both operands.
    fn load(&self, dim: usize) -> Result<Operands, Self::Error>;
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the operands that are about to be multiplied.
    fn present_operands(&self, operands: &Operands);

    /// Present one multiplication result.
    fn present_result(&self, result: &MultiplicationResult, details: bool);

    /// Present a timing comparison of several results.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Product, MatrixError>,
    /// Computation duration.
    pub duration: Duration,
}

impl MultiplicationResult {
    /// The product matrix, if the multiplication succeeded.
    #[must_use]
    pub fn matrix(&self) -> Option<&Matrix> {
        self.outcome.as_ref().ok().map(|p| &p.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strassen_core::OpCounts;

    #[test]
    fn matrix_accessor() {
        let ok = MultiplicationResult {
            algorithm: "Strassen".into(),
            outcome: Ok(Product {
                matrix: Matrix::identity(2),
                ops: OpCounts::default(),
            }),
            duration: Duration::from_millis(1),
        };
        assert_eq!(ok.matrix(), Some(&Matrix::identity(2)));

        let err = MultiplicationResult {
            algorithm: "Strassen".into(),
            outcome: Err(MatrixError::InvalidDimension(3)),
            duration: Duration::ZERO,
        };
        assert!(err.matrix().is_none());
    }
}
