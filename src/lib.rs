//! mix-samples library
//!
//! Small, deterministic programs used as targets for debugger tooling.
//!
//! Each sample derives one integer from its argument count, prints a single
//! `"<message> <value>"` line when it has a program name, and exits with
//! status 1 only when the derived value is zero:
//! - `sample_basic`: `total = argc + 2`, greeting `hello`
//! - `sample_branch`: `argc + 7` for odd counts, `argc - 3` for even ones,
//!   labelled `branch-taken` when the result exceeds 3
//!
//! # Example
//!
//! ```
//! use mix_samples::cli::args::Invocation;
//! use mix_samples::engine::runner::run_sample;
//! use mix_samples::samples::branch::Branch;
//!
//! let invocation = Invocation::synthetic(4, Some("sample_branch"));
//! let mut out = Vec::new();
//! let report = run_sample(&Branch, &invocation, &mut out);
//! assert_eq!(out, b"branch-not-taken 1\n");
//! assert_eq!(report.status, 0);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod samples;
pub mod version;

use std::fmt;

pub use config::RunConfig;
pub use engine::runner::{main_for, run_sample, RunReport};
pub use samples::Sample;

/// Exit status for a normal run
pub const STATUS_OK: u8 = 0;

/// Exit status reserved for a computed value of exactly zero
pub const STATUS_ZERO: u8 = 1;

/// Result of evaluating a sample for one argument count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Fixed label printed before the value
    pub message: &'static str,
    /// Value derived from the argument count
    pub value: i32,
}

impl Outcome {
    pub fn new(message: &'static str, value: i32) -> Self {
        Outcome { message, value }
    }

    /// Exit status for this outcome.
    ///
    /// Depends only on the value, never on whether anything was printed.
    pub fn status(&self) -> u8 {
        if self.value == 0 {
            STATUS_ZERO
        } else {
            STATUS_OK
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.message, self.value)
    }
}

/// Error types for mix-samples operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// Writing the result line failed
    Output {
        sample: &'static str,
        message: String,
    },
    /// Logger could not be installed
    Logging {
        message: String,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Output { sample, message } => {
                write!(f, "Failed to write output for {}: {}", sample, message)
            }
            SampleError::Logging { message } => {
                write!(f, "Failed to initialize logging: {}", message)
            }
        }
    }
}

impl std::error::Error for SampleError {}
