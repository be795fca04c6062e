//! # strassen-cli
//!
//! Matrix sources (text files, random fill), CLI output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod source;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use source::{FileSource, RandomSource, SourceError};
