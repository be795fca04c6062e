//! Workspace-level integration test harness for Strassen-rs.
//!
//! The tests live under `tests/`; this library is intentionally empty.
