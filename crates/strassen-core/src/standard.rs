//! Cubic-time reference multiplication, used to cross-check Strassen.

use tracing::debug;

use crate::guard::ArithmeticGuard;
use crate::matrix::Matrix;
use crate::multiplier::{ensure_same_dim, MatrixError, Multiplier, Product};

/// Row-by-column multiplier for any square dimension.
pub struct StandardMultiplier;

impl StandardMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for StandardMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for StandardMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Product, MatrixError> {
        let n = ensure_same_dim(a, b)?;
        let mut guard = ArithmeticGuard::new();
        let mut c = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0;
                for k in 0..n {
                    let p = guard.mul(a.get(i, k), b.get(k, j))?;
                    acc = guard.add(acc, p)?;
                }
                c.set(i, j, acc);
            }
        }
        let ops = guard.counts();
        debug!(dim = n, multiplications = ops.multiplications, "standard multiply complete");
        Ok(Product { matrix: c, ops })
    }

    fn name(&self) -> &'static str {
        "Standard"
    }
}
