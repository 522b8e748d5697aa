//! CLI module for argument capture and output formatting.

pub mod args;
pub mod output;
