//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use strassen_core::{Matrix, OpCounts};

/// Render a matrix row-major, each element followed by a tab.
#[must_use]
pub fn format_matrix(m: &Matrix) -> String {
    m.to_string()
}

/// Render operand matrices with right-aligned four-column cells.
#[must_use]
pub fn format_operand(m: &Matrix) -> String {
    let mut out = String::new();
    for row in m.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:4}")).collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// One-line summary of the guarded operations a multiplication performed.
#[must_use]
pub fn format_ops(ops: &OpCounts) -> String {
    format!(
        "{} multiplications, {} additions/subtractions",
        ops.multiplications, ops.additions
    )
}
