//! Device identity.

use std::fmt;

/// Physical bus a device is reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceType {
    /// RS-232 or USB-serial.
    Serial,
    /// SPI bus.
    Spi,
    /// I2C bus.
    I2c,
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceType::Serial => write!(f, "serial"),
            InterfaceType::Spi => write!(f, "spi"),
            InterfaceType::I2c => write!(f, "i2c"),
        }
    }
}

/// Any piece of hardware a driver talks to.
///
/// The identity is fixed per driver implementation.
pub trait Device {
    /// Model name, e.g. `"DSP-4XX"`.
    fn model(&self) -> &str;

    /// Vendor name.
    fn vendor(&self) -> &str;

    /// Bus the device is attached through.
    fn interface_type(&self) -> InterfaceType;
}
