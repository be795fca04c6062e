//! CLI result presenter.

use std::fmt::Write as _;

use strassen_orchestration::{MultiplicationResult, Operands, ResultPresenter};

use crate::output::{format_duration, format_matrix, format_operand, format_ops};
use crate::ui::{format_header, print_error};

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Both operands under their headers; empty in quiet mode.
    #[must_use]
    pub fn render_operands(&self, operands: &Operands) -> String {
        if self.quiet {
            return String::new();
        }
        let mut out = format_header("Elements for matrix A");
        out.push_str(&format_operand(&operands.a));
        out.push_str(&format_header("Elements for matrix B"));
        out.push_str(&format_operand(&operands.b));
        out
    }

    /// A successful product. Quiet mode prints the bare matrix only.
    /// Returns `None` for a failed multiplication.
    #[must_use]
    pub fn render_result(&self, result: &MultiplicationResult, details: bool) -> Option<String> {
        let product = result.outcome.as_ref().ok()?;
        if self.quiet {
            return Some(format_matrix(&product.matrix));
        }

        let mut out = format_header(&result_heading(&result.algorithm));
        out.push_str(&format_matrix(&product.matrix));
        if details {
            let _ = writeln!(out, "Duration: {}", format_duration(result.duration));
            let _ = writeln!(out, "Operations: {}", format_ops(&product.ops));
        }
        Some(out)
    }

    /// Timing table for every multiplier that ran; empty in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[MultiplicationResult]) -> String {
        let mut out = String::new();
        if self.quiet {
            return out;
        }

        let _ = writeln!(out, "\nComparison Results:");
        let _ = writeln!(out, "{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            let _ = writeln!(
                out,
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
        out
    }
}

/// Header printed above a product.
#[must_use]
pub fn result_heading(algorithm: &str) -> String {
    if algorithm.eq_ignore_ascii_case("strassen") {
        "Result with strassen algo:".to_string()
    } else {
        format!(
            "Result with {} multiplication:",
            algorithm.to_ascii_lowercase()
        )
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_operands(&self, operands: &Operands) {
        print!("{}", self.render_operands(operands));
    }

    fn present_result(&self, result: &MultiplicationResult, details: bool) {
        match (&result.outcome, self.render_result(result, details)) {
            (_, Some(text)) => print!("{text}"),
            (Err(e), None) => self.present_error(&format!("{}: {e}", result.algorithm)),
            (Ok(_), None) => {}
        }
    }

    fn present_comparison(&self, results: &[MultiplicationResult]) {
        print!("{}", self.render_comparison(results));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
