//! Output sinks
//!
//! A sink accepts text and delivers it, in order, to some transport. Concrete
//! transports live in the firmware crates; this module holds the capability,
//! the fan-out composite, and an in-memory buffer.

pub mod buffer;
pub mod multi;

pub use buffer::BufferOutput;
pub use multi::MultiOutput;

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// Destination for text output
pub trait OutputSink {
    /// Deliver `text`. Characters appear in the order submitted.
    fn print(&mut self, text: &str);

    /// Deliver a single character
    fn print_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.print(c.encode_utf8(&mut buf));
    }

    /// Human-readable sink name
    fn name(&self) -> &str;
}

/// Sink shared between several holders; lives as long as the longest one
pub type SharedOutput = Rc<RefCell<dyn OutputSink>>;

/// Wrap a sink for shared membership
pub fn shared<S: OutputSink + 'static>(sink: S) -> SharedOutput {
    Rc::new(RefCell::new(sink))
}

/// `core::fmt::Write` adapter over a sink
///
/// Lets formatting code stream directly into a sink without building an
/// intermediate string.
pub struct SinkWriter<'a> {
    sink: &'a mut dyn OutputSink,
}

impl<'a> SinkWriter<'a> {
    pub fn new(sink: &'a mut dyn OutputSink) -> Self {
        Self { sink }
    }
}

impl fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.print(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.sink.print_char(c);
        Ok(())
    }
}
