//! # strassen-orchestration
//!
//! Parallel execution, multiplier selection, and result analysis.

pub mod interfaces;
pub mod multiplier_selection;
pub mod orchestrator;

pub use interfaces::{MatrixSource, MultiplicationResult, Operands, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
