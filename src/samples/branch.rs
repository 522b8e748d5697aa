//! Branch classifier sample.
//!
//! Odd argument counts move up by seven, even ones down by three. The result
//! is labelled by whether it exceeds the threshold.

use crate::samples::Sample;
use crate::Outcome;

/// Values strictly above this take the branch
pub const THRESHOLD: i32 = 3;

/// Label selected for a computed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Taken,
    NotTaken,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Taken => "branch-taken",
            Label::NotTaken => "branch-not-taken",
        }
    }
}

/// The `sample_branch` program
#[derive(Debug, Clone, Copy, Default)]
pub struct Branch;

/// Adjust a value by its parity.
///
/// The low bit decides, so negative odd values take the odd path.
#[inline(never)]
pub fn compute(value: i32) -> i32 {
    if value & 1 != 0 {
        value.wrapping_add(7)
    } else {
        value.wrapping_sub(3)
    }
}

/// Label for a computed value
pub fn classify(out: i32) -> Label {
    if out > THRESHOLD {
        Label::Taken
    } else {
        Label::NotTaken
    }
}

impl Sample for Branch {
    fn name(&self) -> &'static str {
        "sample_branch"
    }

    fn evaluate(&self, argc: i32) -> Outcome {
        let out = compute(argc);
        Outcome::new(classify(out).as_str(), out)
    }
}
