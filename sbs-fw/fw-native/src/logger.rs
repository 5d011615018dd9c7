//! Host logger
//!
//! Installs the `sbs-io` log bridge over stdout so `log` macros from the core
//! and from application code share the printer's prefixes.

use crate::config::{ConfigError, NativeConfig};
use crate::output::WriterOutput;
use sbs_io::log::SinkLogger;
use std::io;

/// Log bridge writing to the host console
pub type StdoutLogger = SinkLogger<WriterOutput<io::Stdout>>;

/// Install the stdout logger at the configured verbosity
///
/// The returned handle changes the bridge threshold at runtime; see
/// [`PollLoop::attach_logger`](crate::PollLoop::attach_logger).
pub fn init(config: &NativeConfig) -> Result<&'static StdoutLogger, ConfigError> {
    let logger = SinkLogger::new(WriterOutput::stdout(), config.verbosity);
    sbs_io::log::init(logger).map_err(|_| ConfigError::LoggerInstalled)
}
