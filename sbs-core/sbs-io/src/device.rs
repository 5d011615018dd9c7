//! Device presence lifecycle
//!
//! A concrete device implements [`Device`], overriding only the hooks it
//! needs. [`BaseDevice`] wraps it, owns the presence state, and supplies the
//! stock behavior: the forced-presence fallback when the device has no probe
//! of its own, and connect-runs-init chaining.
//!
//! Presence only changes inside [`BaseDevice::self_check`], which the
//! application calls from its polling loop.

use alloc::borrow::Cow;
use core::fmt;

/// Transport a device is attached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Unknown,
    I2C,
    SPI,
    /// UART
    Serial,
    /// Board carrying more than one device
    Shield,
}

impl Protocol {
    /// Lowercase name, as used in serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Unknown => "unknown",
            Protocol::I2C => "i2c",
            Protocol::SPI => "spi",
            Protocol::Serial => "serial",
            Protocol::Shield => "shield",
        }
    }
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::Unknown
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hooks a concrete device may override
pub trait Device {
    /// Device-specific setup, run on every (re)connection
    fn init(&mut self) {}

    /// Probe the transport for the device
    ///
    /// `None` means the device has no probe of its own; the wrapper then
    /// reports the forced-presence flag instead.
    fn probe(&self) -> Option<bool> {
        None
    }

    /// Called once when the device becomes present
    fn on_connect(&mut self) {
        self.init();
    }

    /// Called once when the device stops being present
    fn on_disconnect(&mut self) {}

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown Device")
    }

    fn protocol(&self) -> Protocol {
        Protocol::Unknown
    }
}

/// Device with every hook left at its default
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownDevice;

impl Device for UnknownDevice {}

/// Presence state machine around a [`Device`]
#[derive(Debug, Default)]
pub struct BaseDevice<D> {
    device: D,
    forced_presence: bool,
    present: bool,
}

impl<D: Device> BaseDevice<D> {
    /// Wrap `device`; it starts not present
    pub fn new(device: D) -> Self {
        Self {
            device,
            forced_presence: false,
            present: false,
        }
    }

    /// Current presence, as of the last `self_check`
    pub fn presence(&self) -> bool {
        self.present
    }

    /// Probe result, falling back to the forced-presence flag
    pub fn check_presence(&self) -> bool {
        self.device.probe().unwrap_or(self.forced_presence)
    }

    /// Poll the device once and fire the matching transition hook
    pub fn self_check(&mut self) {
        let detected = self.check_presence();
        match (self.present, detected) {
            (false, true) => {
                log::debug!("{} connected", self.device.name());
                self.device.on_connect();
                self.present = true;
            }
            (true, false) => {
                log::debug!("{} disconnected", self.device.name());
                self.device.on_disconnect();
                self.present = false;
            }
            _ => {}
        }
    }

    /// Presence reported when the device has no probe
    pub fn forced_presence(&self) -> bool {
        self.forced_presence
    }

    /// Diagnostic override used when the device has no real probe
    pub fn set_forced_presence(&mut self, forced: bool) {
        self.forced_presence = forced;
    }

    /// Name reported by the wrapped device
    pub fn name(&self) -> Cow<'_, str> {
        self.device.name()
    }

    /// Transport reported by the wrapped device
    pub fn protocol(&self) -> Protocol {
        self.device.protocol()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutable access to the wrapped device; presence stays untouched
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }
}

/// Object-safe view of a [`BaseDevice`], for polling mixed device types
pub trait ManagedDevice {
    fn self_check(&mut self);
    fn presence(&self) -> bool;
    fn name(&self) -> Cow<'_, str>;
    fn protocol(&self) -> Protocol;
}

impl<D: Device> ManagedDevice for BaseDevice<D> {
    fn self_check(&mut self) {
        BaseDevice::self_check(self);
    }

    fn presence(&self) -> bool {
        BaseDevice::presence(self)
    }

    fn name(&self) -> Cow<'_, str> {
        BaseDevice::name(self)
    }

    fn protocol(&self) -> Protocol {
        BaseDevice::protocol(self)
    }
}
