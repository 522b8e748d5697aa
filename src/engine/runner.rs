//! Sample execution.
//!
//! Evaluates a sample for an invocation, prints its line when the
//! invocation carries a program name, and derives the exit status.
//!
//! The status is computed from the outcome before anything is written, so
//! a failed write is logged and recorded but never changes it.

use crate::cli::args::Invocation;
use crate::cli::output::write_outcome;
use crate::config::RunConfig;
use crate::samples::Sample;
use crate::version::get_build_info;
use crate::{Outcome, SampleError};
use log::{debug, warn};
use std::io::{self, Write};
use std::process::ExitCode;

/// Everything observable about one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Whether the line was written successfully
    pub printed: bool,
    /// Write failure, if any
    pub error: Option<SampleError>,
    pub status: u8,
}

/// Run a sample against an invocation, writing to `out`.
pub fn run_sample<S, W>(sample: &S, invocation: &Invocation, out: &mut W) -> RunReport
where
    S: Sample + ?Sized,
    W: Write,
{
    let outcome = sample.evaluate(invocation.argc);
    let status = outcome.status();
    debug!(
        "{}: argc={} value={} status={}",
        sample.name(),
        invocation.argc,
        outcome.value,
        status
    );

    let mut printed = false;
    let mut error = None;
    if invocation.has_program_name() {
        match write_outcome(out, sample.name(), &outcome) {
            Ok(()) => printed = true,
            Err(e) => {
                warn!("{}", e);
                error = Some(e);
            }
        }
    } else {
        debug!("{}: empty argument vector, nothing printed", sample.name());
    }

    RunReport {
        outcome,
        printed,
        error,
        status,
    }
}

/// Entry point shared by the sample binaries.
pub fn main_for<S: Sample + ?Sized>(sample: &S) -> ExitCode {
    // Only fails when a logger is already installed
    let _ = RunConfig::default().init_logging();
    debug!("{}", get_build_info());

    let invocation = Invocation::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_sample(sample, &invocation, &mut out);

    ExitCode::from(report.status)
}
