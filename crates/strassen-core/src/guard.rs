//! Overflow-checked arithmetic on bounded matrix elements.
//!
//! Every addition, subtraction and multiplication performed by the
//! multipliers goes through an [`ArithmeticGuard`]. An operation whose result
//! does not fit in `i32` yields an [`ArithmeticOverflow`] instead of a wrapped
//! value.

use std::fmt;

/// The elementary operation that overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
        };
        f.write_str(s)
    }
}

/// An add/sub/mul whose exact result is outside the `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{op} overflow for a = {lhs} b = {rhs}")]
pub struct ArithmeticOverflow {
    pub op: Operation,
    pub lhs: i32,
    pub rhs: i32,
}

/// Which checks [`check_overflow`] should run on an operand pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checks {
    pub add: bool,
    pub mul: bool,
}

impl Checks {
    pub const ADD: Self = Self {
        add: true,
        mul: false,
    };
    pub const MUL: Self = Self {
        add: false,
        mul: true,
    };
    pub const BOTH: Self = Self {
        add: true,
        mul: true,
    };
}

/// Number of guarded elementary operations performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Additions and subtractions.
    pub additions: u64,
    pub multiplications: u64,
}

/// Two's-complement wraparound signature: both operands share a sign and
/// the wrapped sum does not.
#[must_use]
pub fn addition_overflows(a: i32, b: i32) -> bool {
    let s = a.wrapping_add(b);
    (a > 0 && b > 0 && s < 0) || (a < 0 && b < 0 && s >= 0)
}

/// `a - b` checked as `a + (-b)`; `-i32::MIN` is itself unrepresentable, so
/// subtracting it overflows for every non-negative `a`.
#[must_use]
pub fn subtraction_overflows(a: i32, b: i32) -> bool {
    if b == i32::MIN {
        a >= 0
    } else {
        addition_overflows(a, -b)
    }
}

/// The wrapped product must divide back to each non-zero operand.
#[must_use]
pub fn multiplication_overflows(a: i32, b: i32) -> bool {
    if a == 0 || b == 0 {
        return false;
    }
    // `i32::MIN / -1` traps, and so does the product it would recover.
    if (a == -1 && b == i32::MIN) || (b == -1 && a == i32::MIN) {
        return true;
    }
    let p = a.wrapping_mul(b);
    p / a != b || p / b != a
}

/// Verify that the requested operations on `(a, b)` stay in range.
pub fn check_overflow(a: i32, b: i32, checks: Checks) -> Result<(), ArithmeticOverflow> {
    if checks.add && addition_overflows(a, b) {
        return Err(ArithmeticOverflow {
            op: Operation::Addition,
            lhs: a,
            rhs: b,
        });
    }
    if checks.mul && multiplication_overflows(a, b) {
        return Err(ArithmeticOverflow {
            op: Operation::Multiplication,
            lhs: a,
            rhs: b,
        });
    }
    Ok(())
}

/// Checks and performs elementary operations, counting each one.
#[derive(Debug, Default)]
pub struct ArithmeticGuard {
    counts: OpCounts,
}

impl ArithmeticGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checked `a + b`.
    pub fn add(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticOverflow> {
        check_overflow(a, b, Checks::ADD)?;
        self.counts.additions += 1;
        Ok(a + b)
    }

    /// Checked `a - b`.
    pub fn sub(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticOverflow> {
        if subtraction_overflows(a, b) {
            return Err(ArithmeticOverflow {
                op: Operation::Subtraction,
                lhs: a,
                rhs: b,
            });
        }
        self.counts.additions += 1;
        Ok(a - b)
    }

    /// Checked `a * b`.
    pub fn mul(&mut self, a: i32, b: i32) -> Result<i32, ArithmeticOverflow> {
        check_overflow(a, b, Checks::MUL)?;
        self.counts.multiplications += 1;
        Ok(a * b)
    }

    /// Operations performed so far.
    #[must_use]
    pub fn counts(&self) -> OpCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_pass() {
        let mut g = ArithmeticGuard::new();
        assert_eq!(g.add(2, 3), Ok(5));
        assert_eq!(g.sub(2, 3), Ok(-1));
        assert_eq!(g.mul(-4, 3), Ok(-12));
        assert_eq!(
            g.counts(),
            OpCounts {
                additions: 2,
                multiplications: 1
            }
        );
    }

    #[test]
    fn addition_overflow_positive() {
        let mut g = ArithmeticGuard::new();
        let err = g.add(i32::MAX, 1).unwrap_err();
        assert_eq!(err.op, Operation::Addition);
        assert_eq!((err.lhs, err.rhs), (i32::MAX, 1));
        assert_eq!(g.counts().additions, 0);
    }

    #[test]
    fn addition_overflow_negative() {
        assert!(addition_overflows(i32::MIN, -1));
        assert!(addition_overflows(i32::MIN, i32::MIN));
        assert!(!addition_overflows(i32::MIN, 0));
        assert!(!addition_overflows(i32::MAX, i32::MIN));
    }

    #[test]
    fn addition_at_boundary_is_fine() {
        assert!(!addition_overflows(i32::MAX - 1, 1));
        assert!(!addition_overflows(i32::MIN + 1, -1));
    }

    #[test]
    fn subtraction_overflow() {
        assert!(subtraction_overflows(i32::MIN, 1));
        assert!(subtraction_overflows(0, i32::MIN));
        assert!(subtraction_overflows(i32::MAX, -1));
        assert!(!subtraction_overflows(-1, i32::MIN));
        assert!(!subtraction_overflows(i32::MAX, i32::MAX));

        let mut g = ArithmeticGuard::new();
        let err = g.sub(0, i32::MIN).unwrap_err();
        assert_eq!(err.op, Operation::Subtraction);
    }

    #[test]
    fn multiplication_overflow() {
        assert!(multiplication_overflows(65_536, 65_536));
        assert!(multiplication_overflows(i32::MAX, 2));
        assert!(multiplication_overflows(i32::MIN, -1));
        assert!(multiplication_overflows(-1, i32::MIN));
        assert!(!multiplication_overflows(46_340, 46_340));
        assert!(!multiplication_overflows(i32::MIN, 1));
        assert!(!multiplication_overflows(0, i32::MIN));
    }

    #[test]
    fn check_flags_are_independent() {
        // Sum fits, product does not.
        assert!(check_overflow(100_000, 100_000, Checks::ADD).is_ok());
        assert!(check_overflow(100_000, 100_000, Checks::MUL).is_err());
        assert!(check_overflow(100_000, 100_000, Checks::default()).is_ok());

        let err = check_overflow(i32::MAX, i32::MAX, Checks::BOTH).unwrap_err();
        assert_eq!(err.op, Operation::Addition);
    }

    #[test]
    fn overflow_message_names_operands() {
        let err = ArithmeticOverflow {
            op: Operation::Multiplication,
            lhs: 70_000,
            rhs: 70_000,
        };
        assert_eq!(
            err.to_string(),
            "multiplication overflow for a = 70000 b = 70000"
        );
    }
}
