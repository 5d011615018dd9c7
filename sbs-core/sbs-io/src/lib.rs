//! Hardware-abstraction and diagnostics core.
//!
//! This crate provides the pieces shared by every firmware build:
//! - numeric formatting that streams into a sink without allocating
//! - a verbosity gate that decides emission and writes severity prefixes
//! - output sinks, including a fan-out `MultiOutput`
//! - the `Printer` logging facade
//! - the device presence state machine
//!
//! Everything runs to completion on the caller's stack. There is no locking
//! except inside the `log` bridge, which must be `Sync` to be installed.

#![no_std]

extern crate alloc;

pub mod device;
pub mod format;
pub mod log;
pub mod output;
pub mod print;
pub mod verbosity;

pub use device::{BaseDevice, Device, ManagedDevice, Protocol, UnknownDevice};
pub use format::{FormatInt, IntFormat};
pub use output::{BufferOutput, MultiOutput, OutputSink, SharedOutput, SinkWriter, shared};
pub use print::{Printable, Printer};
pub use verbosity::{Verbosity, VerbosityFilter};
