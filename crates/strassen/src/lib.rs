//! Strassen-rs library — application logic for the matrix multiplier CLI.

pub mod app;
pub mod config;
pub mod errors;
