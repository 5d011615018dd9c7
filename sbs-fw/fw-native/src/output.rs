//! `std::io::Write`-backed sink

use sbs_io::OutputSink;
use std::borrow::Cow;
use std::io::{self, Write};

/// Sink over any byte writer
///
/// Write errors are dropped; the sink capability has no failure channel.
pub struct WriterOutput<W> {
    writer: W,
    name: Cow<'static, str>,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterOutput<io::Stdout> {
    /// Host console, standing in for the serial link
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "Stdout")
    }
}

impl<W: Write> OutputSink for WriterOutput<W> {
    fn print(&mut self, text: &str) {
        let _ = self.writer.write_all(text.as_bytes());
        if text.ends_with('\n') {
            let _ = self.writer.flush();
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
