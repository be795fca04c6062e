//! Strassen's divide-and-conquer matrix multiplication.
//!
//! ```text
//! | C00 C01 |   | A00 A01 | | B00 B01 |
//! |         | = |         | |         |
//! | C10 C11 |   | A10 A11 | | B10 B11 |
//!
//! M1 = (A00 + A11)(B00 + B11)      C00 = M1 + M4 - M5 + M7
//! M2 = (A10 + A11) B00             C01 = M3 + M5
//! M3 = A00 (B01 - B11)             C10 = M2 + M4
//! M4 = A11 (B10 - B00)             C11 = M1 - M2 + M3 + M6
//! M5 = (A00 + A01) B11
//! M6 = (A10 - A00)(B00 + B01)
//! M7 = (A01 - A11)(B10 + B11)
//! ```
//!
//! Each level recurses on seven half-size products instead of eight. At
//! dimension 2 the quadrants are scalars and the seven products are computed
//! directly. Every scalar add, sub and mul, including intermediate sums, is
//! checked by the [`ArithmeticGuard`].

use tracing::{debug, trace};

use crate::constants::BASE_CASE_DIM;
use crate::guard::{ArithmeticGuard, ArithmeticOverflow};
use crate::matrix::{Matrix, MatrixView};
use crate::multiplier::{ensure_same_dim, MatrixError, Multiplier, Product};
use crate::quadrant::{add, split, sub, write_quadrant, Quadrant};

/// Recursive Strassen multiplier for power-of-two dimensions.
pub struct StrassenMultiplier;

impl StrassenMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The recursion only halves down to 2x2, so `dim` must be a power of
    /// two and at least 2.
    pub fn validate_dim(dim: usize) -> Result<(), MatrixError> {
        if dim >= BASE_CASE_DIM && dim.is_power_of_two() {
            Ok(())
        } else {
            Err(MatrixError::InvalidDimension(dim))
        }
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Product, MatrixError> {
        let dim = ensure_same_dim(a, b)?;
        Self::validate_dim(dim)?;

        let mut guard = ArithmeticGuard::new();
        let matrix = multiply_recursive(a.view(), b.view(), &mut guard, 0)?;
        let ops = guard.counts();
        debug!(
            dim,
            additions = ops.additions,
            multiplications = ops.multiplications,
            "strassen multiply complete"
        );
        Ok(Product { matrix, ops })
    }

    fn name(&self) -> &'static str {
        "Strassen"
    }
}

fn multiply_recursive(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    guard: &mut ArithmeticGuard,
    depth: u32,
) -> Result<Matrix, ArithmeticOverflow> {
    let n = a.dim();
    if n == BASE_CASE_DIM {
        return multiply_base(a, b, guard);
    }
    trace!(dim = n, depth, "strassen level");

    let [a00, a01, a10, a11] = split(a);
    let [b00, b01, b10, b11] = split(b);
    let next = depth + 1;

    let (l, r) = (add(a00, a11, guard)?, add(b00, b11, guard)?);
    let m1 = multiply_recursive(l.view(), r.view(), guard, next)?;

    let l = add(a10, a11, guard)?;
    let m2 = multiply_recursive(l.view(), b00, guard, next)?;

    let r = sub(b01, b11, guard)?;
    let m3 = multiply_recursive(a00, r.view(), guard, next)?;

    let r = sub(b10, b00, guard)?;
    let m4 = multiply_recursive(a11, r.view(), guard, next)?;

    let l = add(a00, a01, guard)?;
    let m5 = multiply_recursive(l.view(), b11, guard, next)?;

    let (l, r) = (sub(a10, a00, guard)?, add(b00, b01, guard)?);
    let m6 = multiply_recursive(l.view(), r.view(), guard, next)?;

    let (l, r) = (sub(a01, a11, guard)?, add(b10, b11, guard)?);
    let m7 = multiply_recursive(l.view(), r.view(), guard, next)?;

    let q1 = add(m1.view(), m4.view(), guard)?;
    let q1 = sub(q1.view(), m5.view(), guard)?;
    let q1 = add(q1.view(), m7.view(), guard)?;

    let q2 = add(m3.view(), m5.view(), guard)?;
    let q3 = add(m2.view(), m4.view(), guard)?;

    let q4 = sub(m1.view(), m2.view(), guard)?;
    let q4 = add(q4.view(), m3.view(), guard)?;
    let q4 = add(q4.view(), m6.view(), guard)?;

    let mut c = Matrix::zeros(n);
    write_quadrant(&mut c, Quadrant::TopLeft, &q1);
    write_quadrant(&mut c, Quadrant::TopRight, &q2);
    write_quadrant(&mut c, Quadrant::BottomLeft, &q3);
    write_quadrant(&mut c, Quadrant::BottomRight, &q4);
    Ok(c)
}

/// The seven scalar products of a 2x2 pair, then the four result cells.
fn multiply_base(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    g: &mut ArithmeticGuard,
) -> Result<Matrix, ArithmeticOverflow> {
    let (a00, a01, a10, a11) = (a.get(0, 0), a.get(0, 1), a.get(1, 0), a.get(1, 1));
    let (b00, b01, b10, b11) = (b.get(0, 0), b.get(0, 1), b.get(1, 0), b.get(1, 1));

    let m1 = {
        let l = g.add(a00, a11)?;
        let r = g.add(b00, b11)?;
        g.mul(l, r)?
    };
    let m2 = {
        let l = g.add(a10, a11)?;
        g.mul(l, b00)?
    };
    let m3 = {
        let r = g.sub(b01, b11)?;
        g.mul(a00, r)?
    };
    let m4 = {
        let r = g.sub(b10, b00)?;
        g.mul(a11, r)?
    };
    let m5 = {
        let l = g.add(a00, a01)?;
        g.mul(l, b11)?
    };
    let m6 = {
        let l = g.sub(a10, a00)?;
        let r = g.add(b00, b01)?;
        g.mul(l, r)?
    };
    let m7 = {
        let l = g.sub(a01, a11)?;
        let r = g.add(b10, b11)?;
        g.mul(l, r)?
    };

    let c00 = {
        let t = g.add(m1, m4)?;
        let t = g.sub(t, m5)?;
        g.add(t, m7)?
    };
    let c01 = g.add(m3, m5)?;
    let c10 = g.add(m2, m4)?;
    let c11 = {
        let t = g.sub(m1, m2)?;
        let t = g.add(t, m3)?;
        g.add(t, m6)?
    };

    let cells = [[c00, c01], [c10, c11]];
    Ok(Matrix::from_fn(BASE_CASE_DIM, |r, c| cells[r][c]))
}
