//! Application configuration from CLI flags and environment.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use strassen_core::{MatrixError, StrassenMultiplier, MAX_CLI_DIMENSION};

/// Multiply two square matrices using Strassen's algorithm.
///
/// The Strassen product is printed together with the standard cubic-time
/// product of the same operands for comparison.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Read matrix A and B from text files (see --a-file and --b-file).
    #[arg(short = 'f', long = "file")]
    pub from_file: bool,

    /// Generate matrix A and B with random values.
    #[arg(short = 'r', long = "random")]
    pub random: bool,

    /// Number of rows/columns: a power of two, at most 16.
    #[arg(short = 'n', long = "dim", env = "STRASSEN_N")]
    pub n: Option<usize>,

    /// File holding matrix A, one row per line.
    #[arg(long, default_value = "a.txt")]
    pub a_file: PathBuf,

    /// File holding matrix B, one row per line.
    #[arg(long, default_value = "b.txt")]
    pub b_file: PathBuf,

    /// Seed for random matrices.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Algorithm to use: strassen, standard, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Quiet mode (only print the product matrices).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show timings and operation counts.
    #[arg(short, long)]
    pub details: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Run(Box<AppConfig>),
    /// Unrecognised options: print usage and succeed.
    Usage,
}

/// Where the operands come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    File,
    Random,
}

/// Parse command-line arguments.
///
/// Unknown options, stray arguments and a flag missing its value are not
/// errors; they select [`Invocation::Usage`]. Malformed values (a
/// non-numeric `-n`) and
/// `--help`/`--version` are returned as clap errors for the caller to
/// `exit()` on.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match AppConfig::try_parse_from(args) {
        Ok(config) => Ok(Invocation::Run(Box::new(config))),
        Err(e) if matches!(e.kind(), ErrorKind::UnknownArgument | ErrorKind::InvalidValue) => {
            Ok(Invocation::Usage)
        }
        Err(e) => Err(e),
    }
}

impl AppConfig {
    /// The selected source, when exactly one of `-f`/`-r` was given.
    #[must_use]
    pub fn source_mode(&self) -> Option<SourceMode> {
        match (self.from_file, self.random) {
            (true, false) => Some(SourceMode::File),
            (false, true) => Some(SourceMode::Random),
            _ => None,
        }
    }
}

/// Check a requested dimension against the CLI ceiling and the algorithm's
/// power-of-two requirement.
pub fn validate_dim(n: usize) -> Result<usize, MatrixError> {
    if n > MAX_CLI_DIMENSION {
        return Err(MatrixError::Config(format!(
            "dimension {n} is greater than the maximum of {MAX_CLI_DIMENSION}"
        )));
    }
    StrassenMultiplier::validate_dim(n)?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> AppConfig {
        match parse_args(std::iter::once("strassen").chain(args.iter().copied())).unwrap() {
            Invocation::Run(c) => *c,
            Invocation::Usage => panic!("expected a run configuration"),
        }
    }

    #[test]
    fn parses_short_flags() {
        let c = run(&["-r", "-n", "8"]);
        assert_eq!(c.source_mode(), Some(SourceMode::Random));
        assert_eq!(c.n, Some(8));
        assert_eq!(c.algo, "all");
        assert_eq!(c.a_file, PathBuf::from("a.txt"));
    }

    #[test]
    fn source_mode_requires_exactly_one() {
        assert_eq!(run(&["-n", "4"]).source_mode(), None);
        assert_eq!(run(&["-f", "-r", "-n", "4"]).source_mode(), None);
        assert_eq!(run(&["-f", "-n", "4"]).source_mode(), Some(SourceMode::File));
    }

    #[test]
    fn unknown_option_selects_usage() {
        let inv = parse_args(["strassen", "-x", "-n", "4"]).unwrap();
        assert!(matches!(inv, Invocation::Usage));
        let inv = parse_args(["strassen", "-r", "-n", "4", "extra"]).unwrap();
        assert!(matches!(inv, Invocation::Usage));
    }

    #[test]
    fn dimension_without_value_selects_usage() {
        let inv = parse_args(["strassen", "-r", "-n"]).unwrap();
        assert!(matches!(inv, Invocation::Usage));
        let inv = parse_args(["strassen", "-n", "-r"]).unwrap();
        assert!(matches!(inv, Invocation::Usage));
    }

    #[test]
    fn malformed_dimension_is_an_error() {
        assert!(parse_args(["strassen", "-r", "-n", "four"]).is_err());
    }

    #[test]
    fn validate_dim_rules() {
        assert_eq!(validate_dim(2), Ok(2));
        assert_eq!(validate_dim(16), Ok(16));
        assert!(matches!(validate_dim(32), Err(MatrixError::Config(_))));
        assert_eq!(validate_dim(6), Err(MatrixError::InvalidDimension(6)));
        assert_eq!(validate_dim(0), Err(MatrixError::InvalidDimension(0)));
        assert_eq!(validate_dim(1), Err(MatrixError::InvalidDimension(1)));
    }
}
