//! Hosted firmware harness.
//!
//! Runs the `sbs-io` core on a desktop host: stdout stands in for the serial
//! link, configuration comes from the environment or JSON, and `PollLoop`
//! plays the role of the firmware main loop that polls device presence.

pub mod config;
pub mod logger;
pub mod output;
pub mod poll_loop;

pub use config::{ConfigError, NativeConfig};
pub use logger::StdoutLogger;
pub use output::WriterOutput;
pub use poll_loop::{PollLoop, Transition};
