//! Presence polling loop
//!
//! The core never polls on its own; this loop is the host-side stand-in for
//! the firmware main loop. Each tick runs `self_check` on every device and
//! reports the transitions through the printer.

use crate::config::NativeConfig;
use crate::logger::StdoutLogger;
use sbs_io::{ManagedDevice, Printer, Verbosity};
use std::thread;
use std::time::Duration;

/// ANSI color codes
mod colors {
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Presence change observed during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Index of the device in registration order
    pub index: usize,
    pub name: String,
    /// Presence after the change
    pub present: bool,
}

/// Host main loop: polls registered devices and reports presence changes
pub struct PollLoop {
    devices: Vec<Box<dyn ManagedDevice>>,
    printer: Printer,
    logger: Option<&'static StdoutLogger>,
    interval: Duration,
    color: bool,
}

impl PollLoop {
    /// Loop reporting through `printer`, paced and coloured per `config`
    pub fn new(printer: Printer, config: &NativeConfig) -> Self {
        Self {
            devices: Vec::new(),
            printer,
            logger: None,
            interval: Duration::from_millis(config.poll_interval_ms),
            color: config.color,
        }
    }

    /// Keep the installed log bridge on the printer's threshold
    pub fn attach_logger(&mut self, logger: &'static StdoutLogger) {
        logger.set_verbosity(self.printer.verbosity());
        self.logger = Some(logger);
    }

    /// Threshold for the printer and, when attached, the log bridge
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.printer.set_verbosity(verbosity);
        if let Some(logger) = self.logger {
            logger.set_verbosity(verbosity);
        }
    }

    /// Register a device; it is polled from the next tick on
    pub fn add_device(&mut self, device: Box<dyn ManagedDevice>) {
        self.devices.push(device);
    }

    /// Registered devices, in polling order
    pub fn devices(&self) -> &[Box<dyn ManagedDevice>] {
        &self.devices
    }

    pub fn printer(&self) -> &Printer {
        &self.printer
    }

    /// Direct printer access; threshold changes made here skip the log bridge
    pub fn printer_mut(&mut self) -> &mut Printer {
        &mut self.printer
    }

    /// Poll every device once
    pub fn tick(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();

        for (index, device) in self.devices.iter_mut().enumerate() {
            let before = device.presence();
            device.self_check();
            let present = device.presence();
            if present != before {
                transitions.push(Transition {
                    index,
                    name: device.name().into_owned(),
                    present,
                });
            }
        }

        for transition in &transitions {
            self.report(transition);
        }

        transitions
    }

    /// Run `ticks` polls, sleeping the configured interval between them
    pub fn run(&mut self, ticks: usize) -> Vec<Transition> {
        let mut all = Vec::new();
        for i in 0..ticks {
            if i > 0 {
                thread::sleep(self.interval);
            }
            all.extend(self.tick());
        }
        all
    }

    fn report(&self, transition: &Transition) {
        let (state, color) = if transition.present {
            ("connected", colors::GREEN)
        } else {
            ("disconnected", colors::RED)
        };
        let line = if self.color {
            format!("{color}{} {state}{}\n", transition.name, colors::RESET)
        } else {
            format!("{} {state}\n", transition.name)
        };

        if transition.present {
            self.printer.logger(line);
        } else {
            self.printer.warning(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbs_io::{BaseDevice, BufferOutput, UnknownDevice};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn quiet_config() -> NativeConfig {
        NativeConfig {
            verbosity: Verbosity::Warning,
            poll_interval_ms: 0,
            color: false,
        }
    }

    #[test]
    fn test_tick_reports_forced_connect() {
        let buffer = Rc::new(RefCell::new(BufferOutput::new()));
        let config = quiet_config();
        let mut poll = PollLoop::new(Printer::with_verbosity(buffer.clone(), config.verbosity), &config);

        let mut dev = BaseDevice::new(UnknownDevice);
        dev.set_forced_presence(true);
        poll.add_device(Box::new(dev));
        poll.add_device(Box::new(BaseDevice::new(UnknownDevice)));

        let transitions = poll.tick();
        assert_eq!(
            transitions,
            vec![Transition {
                index: 0,
                name: "Unknown Device".into(),
                present: true,
            }]
        );
        assert_eq!(buffer.borrow().contents(), "Unknown Device connected\n");

        assert!(poll.tick().is_empty());
        assert!(poll.devices()[0].presence());
        assert!(!poll.devices()[1].presence());
    }

    #[test]
    fn test_colored_report() {
        let buffer = Rc::new(RefCell::new(BufferOutput::new()));
        let config = NativeConfig {
            color: true,
            ..quiet_config()
        };
        let mut poll = PollLoop::new(Printer::with_verbosity(buffer.clone(), config.verbosity), &config);
        let mut dev = BaseDevice::new(UnknownDevice);
        dev.set_forced_presence(true);
        poll.add_device(Box::new(dev));

        poll.run(2);
        assert_eq!(
            buffer.borrow().contents(),
            "\x1b[32mUnknown Device connected\x1b[0m\n"
        );
    }
}
