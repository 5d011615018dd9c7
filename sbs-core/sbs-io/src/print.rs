//! Logging facade
//!
//! `Printer` is the logging context threaded through application code. It owns
//! the verbosity threshold and a handle to the active sink, and exposes one
//! entry point per severity family:
//!
//! - `logger` - always on, no prefix
//! - `error` / `warning` / `debug` - filtered, prefixed
//!
//! Each entry point accepts any [`Printable`] payload: text, an integer paired
//! with an [`IntFormat`], or an `f64` paired with a digit count. The gate runs
//! before any formatting, so dropped messages cost nothing.

use crate::format::{self, FormatInt, IntFormat};
use crate::output::{OutputSink, SharedOutput, SinkWriter};
use crate::verbosity::{Verbosity, VerbosityFilter};
use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::{self, Write};

/// Payload accepted by the [`Printer`] entry points
pub trait Printable {
    /// Write the payload, without prefix, to `out`
    fn print_to(&self, out: &mut dyn OutputSink);
}

impl Printable for str {
    fn print_to(&self, out: &mut dyn OutputSink) {
        out.print(self);
    }
}

impl Printable for String {
    fn print_to(&self, out: &mut dyn OutputSink) {
        out.print(self);
    }
}

impl Printable for Cow<'_, str> {
    fn print_to(&self, out: &mut dyn OutputSink) {
        out.print(self);
    }
}

impl<P: Printable + ?Sized> Printable for &P {
    fn print_to(&self, out: &mut dyn OutputSink) {
        (**self).print_to(out);
    }
}

impl<T: FormatInt> Printable for (T, IntFormat) {
    fn print_to(&self, out: &mut dyn OutputSink) {
        // SinkWriter never fails
        let _ = format::write_int(&mut SinkWriter::new(out), self.0, self.1);
    }
}

/// `(value, digits)`: fixed-point double
impl Printable for (f64, u8) {
    fn print_to(&self, out: &mut dyn OutputSink) {
        let _ = format::write_double(&mut SinkWriter::new(out), self.0, self.1);
    }
}

impl Printable for fmt::Arguments<'_> {
    fn print_to(&self, out: &mut dyn OutputSink) {
        let _ = SinkWriter::new(out).write_fmt(*self);
    }
}

/// Logging context: verbosity threshold plus active sink
pub struct Printer {
    filter: VerbosityFilter,
    output: SharedOutput,
}

impl Printer {
    /// Create a printer writing to `output` at the default threshold (`Error`)
    pub fn new(output: SharedOutput) -> Self {
        Self {
            filter: VerbosityFilter::default(),
            output,
        }
    }

    /// Create a printer writing to `output` at `verbosity`
    pub fn with_verbosity(output: SharedOutput, verbosity: Verbosity) -> Self {
        Self {
            filter: VerbosityFilter::new(verbosity),
            output,
        }
    }

    /// Change the threshold; applies from the next message on
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.filter.set_verbosity(verbosity);
    }

    /// Current threshold
    pub fn verbosity(&self) -> Verbosity {
        self.filter.threshold()
    }

    /// Replace the active sink
    pub fn set_output(&mut self, output: SharedOutput) {
        self.output = output;
    }

    /// Active sink
    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    /// Unfiltered, unprefixed output
    pub fn logger<P: Printable>(&self, payload: P) {
        self.emit(Verbosity::Mute, payload);
    }

    /// `ERROR `-prefixed; dropped only when muted
    pub fn error<P: Printable>(&self, payload: P) {
        self.emit(Verbosity::Error, payload);
    }

    /// `WARNING `-prefixed; needs a `Warning` or `Debug` threshold
    pub fn warning<P: Printable>(&self, payload: P) {
        self.emit(Verbosity::Warning, payload);
    }

    /// `DEBUG `-prefixed; needs a `Debug` threshold
    pub fn debug<P: Printable>(&self, payload: P) {
        self.emit(Verbosity::Debug, payload);
    }

    /// [`logger`](Self::logger) for `format_args!` output
    pub fn logger_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(Verbosity::Mute, args);
    }

    /// [`error`](Self::error) for `format_args!` output
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(Verbosity::Error, args);
    }

    /// [`warning`](Self::warning) for `format_args!` output
    pub fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(Verbosity::Warning, args);
    }

    /// [`debug`](Self::debug) for `format_args!` output
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.emit(Verbosity::Debug, args);
    }

    /// Run the gate once for `level`, then write the payload
    pub fn emit<P: Printable>(&self, level: Verbosity, payload: P) {
        let mut sink = self.output.borrow_mut();
        if self.filter.gate(level, &mut *sink) {
            payload.print_to(&mut *sink);
        }
    }
}
