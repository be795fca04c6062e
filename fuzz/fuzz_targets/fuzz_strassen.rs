#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{Matrix, MatrixError, Multiplier, StandardMultiplier, StrassenMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the dimension (2, 4 or 8), the rest fills A then B.
    let dim = 2usize << (data[0] % 3);
    let cells = &data[1..];
    let cell = |i: usize| -> i32 {
        let hi = cells.get(2 * i).copied().unwrap_or(0);
        let lo = cells.get(2 * i + 1).copied().unwrap_or(0);
        i32::from(i16::from_le_bytes([lo, hi]))
    };
    let a = Matrix::from_fn(dim, |r, c| cell(r * dim + c));
    let b = Matrix::from_fn(dim, |r, c| cell(dim * dim + r * dim + c));

    let fast = StrassenMultiplier::new().multiply(&a, &b);
    let slow = StandardMultiplier::new().multiply(&a, &b);
    match (fast, slow) {
        (Ok(f), Ok(s)) => assert_eq!(f.matrix, s.matrix),
        // Strassen's intermediates can overflow where the cubic sum does not.
        (Err(MatrixError::Overflow(_)), _) | (_, Err(MatrixError::Overflow(_))) => {}
        (f, s) => panic!("unexpected outcome: {f:?} vs {s:?}"),
    }
});
