//! In-memory sink

use super::OutputSink;
use alloc::string::String;
use core::mem;

/// Sink that accumulates everything written to it
///
/// Useful as a log buffer and as a capture point in tests.
#[derive(Debug, Default, Clone)]
pub struct BufferOutput {
    buffer: String,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Everything written so far
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Return the accumulated text and leave the buffer empty
    pub fn take(&mut self) -> String {
        mem::take(&mut self.buffer)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl OutputSink for BufferOutput {
    fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn print_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    fn name(&self) -> &str {
        "Buffer"
    }
}
