//! sample_basic entry point
//!
//! Prints `hello <argc + 2>` and exits 1 only if that total is zero.

use mix_samples::main_for;
use mix_samples::samples::basic::Basic;

use std::process::ExitCode;

fn main() -> ExitCode {
    main_for(&Basic)
}
