//! Library run tests.
//!
//! Drives both samples through the runner with synthetic invocations.

use mix_samples::cli::args::Invocation;
use mix_samples::engine::runner::run_sample;
use mix_samples::samples::basic::Basic;
use mix_samples::samples::branch::Branch;
use mix_samples::samples::{get_all_samples, Sample};

// Helper to run a sample and capture its output as a string
fn run_captured<S: Sample + ?Sized>(sample: &S, argc: i32) -> (String, u8) {
    let mut out = Vec::new();
    let report = run_sample(sample, &Invocation::synthetic(argc, Some(sample.name())), &mut out);
    (String::from_utf8(out).unwrap(), report.status)
}

#[test]
fn test_basic_single_argument() {
    assert_eq!(run_captured(&Basic, 1), ("hello 3\n".to_string(), 0));
}

#[test]
fn test_basic_zero_total() {
    assert_eq!(run_captured(&Basic, -2), ("hello 0\n".to_string(), 1));
}

#[test]
fn test_basic_status_zero_for_real_counts() {
    for argc in 1..100 {
        let (line, status) = run_captured(&Basic, argc);
        assert_eq!(line, format!("hello {}\n", argc + 2));
        assert_eq!(status, 0);
    }
}

#[test]
fn test_branch_single_argument() {
    assert_eq!(run_captured(&Branch, 1), ("branch-taken 8\n".to_string(), 0));
}

#[test]
fn test_branch_four_arguments() {
    assert_eq!(run_captured(&Branch, 4), ("branch-not-taken 1\n".to_string(), 0));
}

#[test]
fn test_branch_zero_count() {
    assert_eq!(run_captured(&Branch, 0), ("branch-not-taken -3\n".to_string(), 0));
}

#[test]
fn test_branch_zero_out() {
    assert_eq!(run_captured(&Branch, -7), ("branch-not-taken 0\n".to_string(), 1));
}

#[test]
fn test_runs_are_repeatable() {
    for sample in get_all_samples() {
        for argc in [-7, -2, 0, 1, 3, 4] {
            assert_eq!(run_captured(sample.as_ref(), argc), run_captured(sample.as_ref(), argc));
        }
    }
}

#[test]
fn test_status_ignores_printing() {
    for sample in get_all_samples() {
        for argc in [-7, -2, 0, 1] {
            let mut out = Vec::new();
            let silent = run_sample(sample.as_ref(), &Invocation::synthetic(argc, None), &mut out);
            assert!(out.is_empty());
            let (_, status) = run_captured(sample.as_ref(), argc);
            assert_eq!(silent.status, status);
        }
    }
}
