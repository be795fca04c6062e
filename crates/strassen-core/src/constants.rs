//! Constants for matrix dimensions and process exit codes.

/// Dimension at which the Strassen recursion bottoms out into seven scalar products.
pub const BASE_CASE_DIM: usize = 2;

/// Largest dimension the command line accepts.
///
/// This is a testing ceiling for the CLI only; the core multipliers work on
/// any power-of-two dimension.
pub const MAX_CLI_DIMENSION: usize = 16;

/// Upper bound (exclusive) for random elements of matrix A.
pub const RANDOM_A_BOUND: i32 = 100;

/// Upper bound (exclusive) for random elements of matrix B.
pub const RANDOM_B_BOUND: i32 = 101;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (bad input file, invalid dimension).
    pub const ERROR_GENERIC: i32 = 1;
    /// Strassen and standard products did not match.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// An intermediate value overflowed the element type.
    pub const ERROR_OVERFLOW: i32 = 5;
}
