//! # strassen-core
//!
//! Square integer matrix multiplication with Strassen's algorithm.
//! All element arithmetic is overflow-checked; an out-of-range intermediate
//! aborts the multiplication with [`MatrixError::Overflow`].

pub mod constants;
pub mod guard;
pub mod matrix;
pub mod multiplier;
pub mod quadrant;
pub mod registry;
pub mod standard;
pub mod strassen;

// Re-exports
pub use constants::{exit_codes, MAX_CLI_DIMENSION};
pub use guard::{ArithmeticGuard, ArithmeticOverflow, OpCounts};
pub use matrix::{Matrix, MatrixView};
pub use multiplier::{MatrixError, Multiplier, Product};
pub use registry::{DefaultFactory, MultiplierFactory};
pub use standard::StandardMultiplier;
pub use strassen::StrassenMultiplier;

/// Multiply two square matrices with Strassen's algorithm.
///
/// The dimension must be a power of two no smaller than 2.
///
/// # Example
/// ```
/// use strassen_core::{strassen_multiply, Matrix};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
/// let c = strassen_multiply(&a, &b).unwrap();
/// assert_eq!(c.get(1, 1), 50);
/// ```
pub fn strassen_multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    StrassenMultiplier::new()
        .multiply(a, b)
        .map(|product| product.matrix)
}
