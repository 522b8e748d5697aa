//! Run configuration.
//!
//! The samples take no user configuration. This only carries the logging
//! setup shared by both binaries.

use crate::SampleError;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Configuration for a sample run
///
/// The sample binaries always run with the default `Warn` level, so their
/// `debug` records are dropped. Library callers may install a more verbose
/// logger by building the struct themselves.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum level written to stderr
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            log_level: LevelFilter::Warn,
        }
    }
}

impl RunConfig {
    /// Install a stderr logger at the configured level.
    ///
    /// Fails if a logger is already installed for this process.
    pub fn init_logging(&self) -> Result<(), SampleError> {
        WriteLogger::init(self.log_level, Config::default(), std::io::stderr()).map_err(|e| {
            SampleError::Logging {
                message: e.to_string(),
            }
        })
    }
}
