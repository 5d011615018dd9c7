//! `log` crate bridge
//!
//! Routes `log` records through the same verbosity gate and prefixes as
//! [`Printer`](crate::print::Printer), so library code using `log::warn!` and
//! application code using the facade produce identical output.

use crate::output::{OutputSink, SinkWriter};
use crate::verbosity::{Verbosity, VerbosityFilter};
use alloc::boxed::Box;
use core::cell::RefCell;
use core::fmt::Write;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

struct LoggerState<S> {
    filter: VerbosityFilter,
    sink: S,
    /// Set once this logger is the global `log` backend
    installed: bool,
}

/// Logger writing every accepted record, prefixed and newline-terminated, to `S`
pub struct SinkLogger<S> {
    state: Mutex<CriticalSectionRawMutex, RefCell<LoggerState<S>>>,
}

impl<S: OutputSink + Send> SinkLogger<S> {
    /// Logger over `sink`, not yet installed
    pub const fn new(sink: S, verbosity: Verbosity) -> Self {
        Self {
            state: Mutex::new(RefCell::new(LoggerState {
                filter: VerbosityFilter::new(verbosity),
                sink,
                installed: false,
            })),
        }
    }

    /// Current threshold
    pub fn verbosity(&self) -> Verbosity {
        self.state.lock(|state| state.borrow().filter.threshold())
    }

    /// Change the threshold; once installed, the global `log` max level follows
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        let installed = self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.filter.set_verbosity(verbosity);
            state.installed
        });
        if installed {
            log::set_max_level(self.max_level());
        }
    }

    /// Whether this logger is the global `log` backend
    pub fn is_installed(&self) -> bool {
        self.state.lock(|state| state.borrow().installed)
    }

    /// Most verbose `log` level this logger can emit
    pub fn max_level(&self) -> LevelFilter {
        match self.verbosity() {
            Verbosity::Mute => LevelFilter::Off,
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warning => LevelFilter::Warn,
            Verbosity::Debug => LevelFilter::Trace,
        }
    }

    /// Run `f` with exclusive access to the sink
    pub fn with_sink<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        self.state.lock(|state| f(&mut state.borrow_mut().sink))
    }
}

impl<S: OutputSink + Send> Log for SinkLogger<S> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = Verbosity::from(metadata.level());
        self.state.lock(|state| state.borrow().filter.allows(level))
    }

    fn log(&self, record: &Record) {
        let level = Verbosity::from(record.level());
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            let LoggerState { filter, sink, .. } = &mut *state;
            if filter.gate(level, &mut *sink) {
                let _ = SinkWriter::new(&mut *sink).write_fmt(*record.args());
                sink.print("\n");
            }
        });
    }

    fn flush(&self) {
        // Sinks deliver on write
    }
}

/// Install `logger` as the global `log` backend
///
/// Returns the installed logger so its threshold can be changed later.
pub fn init<S: OutputSink + Send + 'static>(
    logger: SinkLogger<S>,
) -> Result<&'static SinkLogger<S>, SetLoggerError> {
    let logger: &'static SinkLogger<S> = Box::leak(Box::new(logger));
    log::set_logger(logger)?;
    logger
        .state
        .lock(|state| state.borrow_mut().installed = true);
    log::set_max_level(logger.max_level());
    Ok(logger)
}
