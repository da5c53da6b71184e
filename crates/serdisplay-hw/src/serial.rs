//! Serial port settings.

use crate::{Error, Result};
use std::str::FromStr;
use std::time::Duration;

/// Port used when none is configured.
pub const DEFAULT_PORT: &str = "0";

/// I/O deadline used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Standard serial baud rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaudRate {
    B110,
    B150,
    B300,
    B1200,
    B2400,
    B4800,
    #[default]
    B9600,
    B19200,
    B38400,
    B57600,
    B115200,
    B230400,
    B460800,
    B921600,
}

impl BaudRate {
    /// Every supported rate, slowest first.
    pub const ALL: [BaudRate; 14] = [
        BaudRate::B110,
        BaudRate::B150,
        BaudRate::B300,
        BaudRate::B1200,
        BaudRate::B2400,
        BaudRate::B4800,
        BaudRate::B9600,
        BaudRate::B19200,
        BaudRate::B38400,
        BaudRate::B57600,
        BaudRate::B115200,
        BaudRate::B230400,
        BaudRate::B460800,
        BaudRate::B921600,
    ];

    /// Bits per second.
    pub fn as_u32(&self) -> u32 {
        match self {
            BaudRate::B110 => 110,
            BaudRate::B150 => 150,
            BaudRate::B300 => 300,
            BaudRate::B1200 => 1200,
            BaudRate::B2400 => 2400,
            BaudRate::B4800 => 4800,
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115200,
            BaudRate::B230400 => 230400,
            BaudRate::B460800 => 460800,
            BaudRate::B921600 => 921600,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        BaudRate::ALL
            .into_iter()
            .find(|rate| rate.as_u32() == value)
            .ok_or(Error::InvalidBaud(value))
    }
}

impl FromStr for BaudRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::UnparsableBaud(s.to_string()))?;
        BaudRate::try_from(value)
    }
}

impl std::fmt::Display for BaudRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Read-only view of the settings needed to open a serial device.
pub trait SerialSettings {
    /// Port name or path.
    fn port(&self) -> &str;

    /// Line speed.
    fn baud(&self) -> BaudRate;

    /// I/O deadline the transport should honor.
    fn timeout(&self) -> Duration;
}

/// Serial port configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    port: String,
    baud: Option<BaudRate>,
    timeout: Duration,
}

impl SerialConfig {
    /// Creates a configuration.
    ///
    /// A baud of `0` leaves the rate unset (9600). Any other value must be a
    /// standard rate.
    pub fn new(port: &str, baud: u32) -> Result<Self> {
        let baud = match baud {
            0 => None,
            value => Some(BaudRate::try_from(value)?),
        };
        Ok(Self {
            port: port.to_string(),
            baud,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Creates a configuration from an already validated rate.
    pub fn with_baud(port: &str, baud: BaudRate) -> Self {
        Self {
            port: port.to_string(),
            baud: Some(baud),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the I/O deadline.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: String::new(),
            baud: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SerialSettings for SerialConfig {
    fn port(&self) -> &str {
        if self.port.is_empty() {
            DEFAULT_PORT
        } else {
            &self.port
        }
    }

    fn baud(&self) -> BaudRate {
        self.baud.unwrap_or_default()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
