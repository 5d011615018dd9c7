//! Verbosity threshold and the emission gate.

use crate::output::OutputSink;
use core::fmt;

/// Message severity, also used as the emission threshold
///
/// `Mute` as a threshold drops everything. As a message tag it marks
/// continuation writes that bypass filtering and carry no prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Mute,
    Error,
    Warning,
    Debug,
}

impl Verbosity {
    /// Prefix written in front of a message of this severity
    pub fn prefix(self) -> &'static str {
        match self {
            Verbosity::Mute => "",
            Verbosity::Error => "ERROR ",
            Verbosity::Warning => "WARNING ",
            Verbosity::Debug => "DEBUG ",
        }
    }

    /// Convert to string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Mute => "mute",
            Verbosity::Error => "error",
            Verbosity::Warning => "warning",
            Verbosity::Debug => "debug",
        }
    }

    /// Parse from string representation, ignoring ASCII case
    pub fn from_str(s: &str) -> Option<Self> {
        [
            Verbosity::Mute,
            Verbosity::Error,
            Verbosity::Warning,
            Verbosity::Debug,
        ]
        .into_iter()
        .find(|v| v.as_str().eq_ignore_ascii_case(s))
        .or_else(|| if s.eq_ignore_ascii_case("warn") { Some(Verbosity::Warning) } else { None })
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Error
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Verbosity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Verbosity::Error,
            log::Level::Warn => Verbosity::Warning,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Verbosity::Debug,
        }
    }
}

/// Current threshold plus the decide-and-prefix gate
///
/// Owned by whichever logging context uses it; there is no global instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerbosityFilter {
    threshold: Verbosity,
}

impl VerbosityFilter {
    /// Filter starting at `threshold`
    pub const fn new(threshold: Verbosity) -> Self {
        Self { threshold }
    }

    /// Current threshold
    pub fn threshold(&self) -> Verbosity {
        self.threshold
    }

    /// Replace the threshold
    pub fn set_verbosity(&mut self, threshold: Verbosity) {
        self.threshold = threshold;
    }

    /// Whether a message tagged `level` would be emitted, without writing anything
    pub fn allows(&self, level: Verbosity) -> bool {
        match (self.threshold, level) {
            (Verbosity::Mute, _) => false,
            (_, Verbosity::Mute) | (_, Verbosity::Error) => true,
            (threshold, Verbosity::Warning) => threshold != Verbosity::Error,
            (threshold, Verbosity::Debug) => threshold == Verbosity::Debug,
        }
    }

    /// Decide whether a message tagged `level` is emitted and, if so, write
    /// its prefix to `sink`.
    ///
    /// Call once per logical message. Continuation writes are tagged `Mute`
    /// so they pass without a second prefix.
    pub fn gate(&self, level: Verbosity, sink: &mut dyn OutputSink) -> bool {
        if !self.allows(level) {
            return false;
        }
        let prefix = level.prefix();
        if !prefix.is_empty() {
            sink.print(prefix);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::BufferOutput;

    fn run(threshold: Verbosity, level: Verbosity) -> (bool, alloc::string::String) {
        let filter = VerbosityFilter::new(threshold);
        let mut sink = BufferOutput::new();
        let emitted = filter.gate(level, &mut sink);
        (emitted, sink.take())
    }

    #[test]
    fn test_default_threshold_is_error() {
        assert_eq!(VerbosityFilter::default().threshold(), Verbosity::Error);
    }

    #[test]
    fn test_warning_threshold() {
        assert_eq!(run(Verbosity::Warning, Verbosity::Error), (true, "ERROR ".into()));
        assert_eq!(run(Verbosity::Warning, Verbosity::Warning), (true, "WARNING ".into()));
        assert_eq!(run(Verbosity::Warning, Verbosity::Debug), (false, "".into()));
    }

    #[test]
    fn test_error_threshold_drops_warning_without_prefix() {
        assert_eq!(run(Verbosity::Error, Verbosity::Warning), (false, "".into()));
        assert_eq!(run(Verbosity::Error, Verbosity::Error), (true, "ERROR ".into()));
    }

    #[test]
    fn test_debug_threshold_emits_all() {
        assert_eq!(run(Verbosity::Debug, Verbosity::Debug), (true, "DEBUG ".into()));
        assert_eq!(run(Verbosity::Debug, Verbosity::Warning), (true, "WARNING ".into()));
    }

    #[test]
    fn test_mute_threshold_drops_everything() {
        for level in [Verbosity::Mute, Verbosity::Error, Verbosity::Warning, Verbosity::Debug] {
            assert_eq!(run(Verbosity::Mute, level), (false, "".into()));
        }
    }

    #[test]
    fn test_mute_tag_passes_without_prefix() {
        for threshold in [Verbosity::Error, Verbosity::Warning, Verbosity::Debug] {
            assert_eq!(run(threshold, Verbosity::Mute), (true, "".into()));
        }
    }

    #[test]
    fn test_set_verbosity_overwrites() {
        let mut filter = VerbosityFilter::default();
        filter.set_verbosity(Verbosity::Debug);
        assert!(filter.allows(Verbosity::Debug));
        filter.set_verbosity(Verbosity::Mute);
        assert!(!filter.allows(Verbosity::Error));
    }

    #[test]
    fn test_from_str_and_log_level() {
        assert_eq!(Verbosity::from_str("WARNING"), Some(Verbosity::Warning));
        assert_eq!(Verbosity::from_str("warn"), Some(Verbosity::Warning));
        assert_eq!(Verbosity::from_str("loud"), None);
        assert_eq!(Verbosity::from(log::Level::Info), Verbosity::Debug);
        assert_eq!(Verbosity::from(log::Level::Error), Verbosity::Error);
    }
}
