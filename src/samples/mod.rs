//! Sample programs.
//!
//! - basic: argument count plus two, greeting `hello`
//! - branch: parity-dependent adjustment, labelled by a threshold test
//!
//! Every sample is a pure function of the argument count. Printing and exit
//! status are handled by the runner.

pub mod basic;
pub mod branch;

use crate::Outcome;

/// A sample program driven by its argument count.
pub trait Sample {
    /// Binary name of the sample
    fn name(&self) -> &'static str;

    /// Derive the outcome for an argument count
    fn evaluate(&self, argc: i32) -> Outcome;
}

/// Get all samples
pub fn get_all_samples() -> Vec<Box<dyn Sample>> {
    vec![Box::new(basic::Basic), Box::new(branch::Branch)]
}
