//! Quadrant addressing and guarded element-wise quadrant arithmetic.

use crate::guard::{ArithmeticGuard, ArithmeticOverflow};
use crate::matrix::{Matrix, MatrixView};

/// One of the four half-size corners of a square matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// `(row, col)` of this quadrant's first element, given the half dimension.
    #[must_use]
    pub fn origin(self, half: usize) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, half),
            Self::BottomLeft => (half, 0),
            Self::BottomRight => (half, half),
        }
    }
}

/// The four quadrants of a view, in `[00, 01, 10, 11]` order.
#[must_use]
pub fn split(m: MatrixView<'_>) -> [MatrixView<'_>; 4] {
    Quadrant::ALL.map(|q| m.quadrant(q))
}

/// Element-wise `a + b`, each element pair checked before it is summed.
pub fn add(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    guard: &mut ArithmeticGuard,
) -> Result<Matrix, ArithmeticOverflow> {
    zip_with(a, b, |x, y| guard.add(x, y))
}

/// Element-wise `a - b`, each element pair checked before it is subtracted.
pub fn sub(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    guard: &mut ArithmeticGuard,
) -> Result<Matrix, ArithmeticOverflow> {
    zip_with(a, b, |x, y| guard.sub(x, y))
}

fn zip_with(
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    mut op: impl FnMut(i32, i32) -> Result<i32, ArithmeticOverflow>,
) -> Result<Matrix, ArithmeticOverflow> {
    debug_assert_eq!(a.dim(), b.dim());
    let dim = a.dim();
    let mut out = Matrix::zeros(dim);
    for r in 0..dim {
        for c in 0..dim {
            out.set(r, c, op(a.get(r, c), b.get(r, c))?);
        }
    }
    Ok(out)
}

/// Copy `block` into the given quadrant of `target`.
pub fn write_quadrant(target: &mut Matrix, q: Quadrant, block: &Matrix) {
    let half = block.dim();
    debug_assert_eq!(target.dim(), half * 2);
    let (r0, c0) = q.origin(half);
    for (r, row) in block.rows().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            target.set(r0 + r, c0 + c, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::Operation;

    fn m(rows: &[&[i32]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn origins() {
        assert_eq!(Quadrant::TopLeft.origin(4), (0, 0));
        assert_eq!(Quadrant::TopRight.origin(4), (0, 4));
        assert_eq!(Quadrant::BottomLeft.origin(4), (4, 0));
        assert_eq!(Quadrant::BottomRight.origin(4), (4, 4));
    }

    #[test]
    fn split_orders_quadrants() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let [q00, q01, q10, q11] = split(a.view());
        assert_eq!(
            [q00.get(0, 0), q01.get(0, 0), q10.get(0, 0), q11.get(0, 0)],
            [1, 2, 3, 4]
        );
    }

    #[test]
    fn add_and_sub_elementwise() {
        let a = m(&[&[1, 2], &[3, 4]]);
        let b = m(&[&[10, 20], &[30, 40]]);
        let mut g = ArithmeticGuard::new();
        assert_eq!(
            add(a.view(), b.view(), &mut g).unwrap(),
            m(&[&[11, 22], &[33, 44]])
        );
        assert_eq!(
            sub(a.view(), b.view(), &mut g).unwrap(),
            m(&[&[-9, -18], &[-27, -36]])
        );
        assert_eq!(g.counts().additions, 8);
    }

    #[test]
    fn add_overflow_aborts() {
        let a = m(&[&[0, i32::MAX], &[0, 0]]);
        let b = m(&[&[0, 1], &[0, 0]]);
        let mut g = ArithmeticGuard::new();
        let err = add(a.view(), b.view(), &mut g).unwrap_err();
        assert_eq!(err.op, Operation::Addition);
        assert_eq!((err.lhs, err.rhs), (i32::MAX, 1));
    }

    #[test]
    fn sub_on_quadrant_views() {
        let a = Matrix::from_fn(4, |r, c| i32::try_from(r * 4 + c).unwrap());
        let [q00, _, _, q11] = split(a.view());
        let mut g = ArithmeticGuard::new();
        let d = sub(q11, q00, &mut g).unwrap();
        assert_eq!(d, Matrix::from_fn(2, |_, _| 10));
    }

    #[test]
    fn write_quadrant_places_block() {
        let mut target = Matrix::zeros(4);
        write_quadrant(&mut target, Quadrant::BottomRight, &m(&[&[1, 2], &[3, 4]]));
        assert_eq!(target.get(2, 2), 1);
        assert_eq!(target.get(2, 3), 2);
        assert_eq!(target.get(3, 2), 3);
        assert_eq!(target.get(3, 3), 4);
        assert_eq!(target.get(0, 0), 0);
    }
}
