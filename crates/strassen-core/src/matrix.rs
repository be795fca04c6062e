//! Square integer matrices and borrowed sub-views.

use std::fmt;

use crate::multiplier::MatrixError;
use crate::quadrant::Quadrant;

/// Owned, row-major `dim x dim` matrix of `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// All-zero matrix.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0; dim * dim],
        }
    }

    /// Identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        Self::from_fn(dim, |r, c| i32::from(r == c))
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> i32) -> Self {
        let mut data = Vec::with_capacity(dim * dim);
        for r in 0..dim {
            for c in 0..dim {
                data.push(f(r, c));
            }
        }
        Self { dim, data }
    }

    /// Build a matrix from row vectors; every row must have as many entries
    /// as there are rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let dim = rows.len();
        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            if row.len() != dim {
                return Err(MatrixError::DimensionMismatch {
                    left: dim,
                    right: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self { dim, data })
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(row, col)`. Panics when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col]
    }

    /// Overwrite the element at `(row, col)`. Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col] = value;
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // `chunks_exact(0)` panics, and a 0x0 matrix has no rows anyway.
        self.data.chunks_exact(self.dim.max(1))
    }

    /// Whole-matrix view.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView {
            data: &self.data,
            stride: self.dim,
            row: 0,
            col: 0,
            dim: self.dim,
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for v in row {
                write!(f, "{v}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Borrowed square window into a parent matrix's storage.
///
/// Quadrants are taken by shifting the row/column offsets and halving the
/// dimension; no elements are copied.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    data: &'a [i32],
    stride: usize,
    row: usize,
    col: usize,
    dim: usize,
}

impl<'a> MatrixView<'a> {
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at `(row, col)` relative to this view's origin.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        debug_assert!(row < self.dim && col < self.dim);
        self.data[(self.row + row) * self.stride + self.col + col]
    }

    /// Half-size view of one corner. `dim` must be even.
    #[must_use]
    pub fn quadrant(&self, q: Quadrant) -> MatrixView<'a> {
        debug_assert!(self.dim % 2 == 0, "quadrant of odd dimension {}", self.dim);
        let half = self.dim / 2;
        let (dr, dc) = q.origin(half);
        MatrixView {
            data: self.data,
            stride: self.stride,
            row: self.row + dr,
            col: self.col + dc,
            dim: half,
        }
    }
}
