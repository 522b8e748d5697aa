//! Argument vector capture.
//!
//! The samples recognize no options. Only the number of arguments and the
//! presence of a program name matter.

use std::env;
use std::ffi::OsString;

/// Summary of the argument vector a sample was launched with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Number of arguments including the program name
    pub argc: i32,
    /// First argument, if the vector was non-empty
    pub program: Option<OsString>,
}

impl Invocation {
    /// Capture the current process arguments.
    ///
    /// Arguments are read as `OsString` so non-UTF-8 input is still counted.
    pub fn from_env() -> Self {
        Self::from_args(env::args_os())
    }

    /// Build from an argument vector (for testing)
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter();
        let program = args.next().map(Into::into);
        let rest = args.count();
        let total = rest.saturating_add(usize::from(program.is_some()));

        Invocation {
            argc: i32::try_from(total).unwrap_or(i32::MAX),
            program,
        }
    }

    /// Build with an explicit argument count that need not match any real
    /// argument vector, e.g. zero or negative counts.
    pub fn synthetic(argc: i32, program: Option<&str>) -> Self {
        Invocation {
            argc,
            program: program.map(OsString::from),
        }
    }

    /// Whether the result line should be printed
    pub fn has_program_name(&self) -> bool {
        self.program.is_some()
    }
}
