//! Arithmetic greeting sample.
//!
//! Adds two to the argument count and greets with the total.

use crate::samples::Sample;
use crate::Outcome;

/// Greeting printed before the total
pub const GREETING: &str = "hello";

/// Amount added to the argument count
pub const INCREMENT: i32 = 2;

/// The `sample_basic` program
#[derive(Debug, Clone, Copy, Default)]
pub struct Basic;

/// Add two values, wrapping on overflow.
#[inline(never)]
pub fn add_values(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Total for an argument count
pub fn total(argc: i32) -> i32 {
    add_values(argc, INCREMENT)
}

impl Sample for Basic {
    fn name(&self) -> &'static str {
        "sample_basic"
    }

    fn evaluate(&self, argc: i32) -> Outcome {
        Outcome::new(GREETING, total(argc))
    }
}
