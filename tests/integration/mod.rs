//! Integration tests for mix-samples.
//!
//! Library-level runs with synthetic argument counts, and end-to-end runs of
//! the built sample binaries.

pub mod run_tests;
