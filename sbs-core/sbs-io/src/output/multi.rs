//! Fan-out sink

use super::{OutputSink, SharedOutput};
use alloc::vec::Vec;
use core::slice;

/// Sink that forwards every write to each registered sink, in registration order
///
/// Members are shared; the composite never assumes it is their only holder.
/// Registering a `MultiOutput` inside itself panics on the first write.
#[derive(Default)]
pub struct MultiOutput {
    outputs: Vec<SharedOutput>,
}

impl MultiOutput {
    /// Composite with no members
    pub fn new() -> Self {
        Self {
            outputs: Vec::new(),
        }
    }

    /// Append a sink. No de-duplication.
    pub fn push_output(&mut self, output: SharedOutput) {
        log::trace!("MultiOutput: registering {}", output.borrow().name());
        self.outputs.push(output);
    }

    /// Members in registration order
    pub fn iter(&self) -> slice::Iter<'_, SharedOutput> {
        self.outputs.iter()
    }

    /// Member list for owner-side membership changes
    pub fn outputs_mut(&mut self) -> &mut Vec<SharedOutput> {
        &mut self.outputs
    }

    /// Number of registrations, duplicates included
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Whether writes go nowhere
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl OutputSink for MultiOutput {
    fn print(&mut self, text: &str) {
        for output in &self.outputs {
            output.borrow_mut().print(text);
        }
    }

    fn print_char(&mut self, c: char) {
        for output in &self.outputs {
            output.borrow_mut().print_char(c);
        }
    }

    fn name(&self) -> &str {
        "Multi"
    }
}

impl<'a> IntoIterator for &'a MultiOutput {
    type Item = &'a SharedOutput;
    type IntoIter = slice::Iter<'a, SharedOutput>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
