//! sample_branch entry point
//!
//! Prints `branch-taken` or `branch-not-taken` with the parity-adjusted
//! argument count, and exits 1 only if that value is zero.

use mix_samples::main_for;
use mix_samples::samples::branch::Branch;

use std::process::ExitCode;

fn main() -> ExitCode {
    main_for(&Branch)
}
