//! Output formatting for the samples.
//!
//! One line per run: the message, a single space, the signed decimal value,
//! and a newline.

use crate::{Outcome, SampleError};
use std::io::Write;

/// Format an outcome as its output line (without the newline)
pub fn format_line(outcome: &Outcome) -> String {
    outcome.to_string()
}

/// Write an outcome line and flush.
pub fn write_outcome<W: Write>(
    out: &mut W,
    sample: &'static str,
    outcome: &Outcome,
) -> Result<(), SampleError> {
    writeln!(out, "{}", format_line(outcome))
        .and_then(|_| out.flush())
        .map_err(|e| SampleError::Output {
            sample,
            message: e.to_string(),
        })
}
