//! Sample execution engine.

pub mod runner;
