//! Workspace-level integration tests for Strassen-rs.
//!
//! The tests live in `tests/`; this crate has no library code of its own.
