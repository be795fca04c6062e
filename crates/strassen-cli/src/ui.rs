//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A section header line, styled unless `NO_COLOR` is set.
#[must_use]
pub fn format_header(text: &str) -> String {
    if is_color_disabled() {
        format!("{text}\n")
    } else {
        format!("{}\n", style(text).bold().cyan())
    }
}


/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("Error: {text}");
    } else {
        eprintln!("{} {text}", style("Error:").for_stderr().red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_text_survives_styling() {
        let header = format_header("Elements for matrix A");
        assert_eq!(
            console::strip_ansi_codes(&header),
            "Elements for matrix A\n"
        );
    }
}
