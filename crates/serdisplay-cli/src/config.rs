//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serdisplay_hw::serial::DEFAULT_PORT;
use serdisplay_hw::{BaudRate, SerialConfig};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Serial port configuration
    #[serde(default)]
    pub serial: SerialSection,
}

/// Serial port section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialSection {
    /// Port name or device path (e.g., "/dev/ttyUSB0", "COM3"), "0" by default
    #[serde(default = "default_port")]
    pub port: String,

    /// Baud rate, one of the standard rates
    #[serde(default = "default_baud")]
    pub baud: u32,

    /// I/O timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

impl Default for SerialSection {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud: default_baud(),
            timeout_ms: default_timeout(),
        }
    }
}

// Default value functions
fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

fn default_baud() -> u32 {
    BaudRate::default().as_u32()
}

fn default_timeout() -> u64 {
    3000
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }

    /// Builds the serial settings for the driver.
    pub fn serial_config(&self) -> Result<SerialConfig> {
        let mut serial = SerialConfig::new(&self.serial.port, self.serial.baud)
            .context("Invalid serial configuration")?;
        serial.set_timeout(Duration::from_millis(self.serial.timeout_ms));
        Ok(serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serdisplay_hw::SerialSettings;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.serial.port, "0");
        assert_eq!(config.serial_config().unwrap().port(), "0");
        assert_eq!(config.serial.baud, 9600);
        assert_eq!(config.serial.timeout_ms, 3000);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
            [serial]
            port = "COM4"
            baud = 19200
            "#,
        )
        .unwrap();
        let serial = config.serial_config().unwrap();
        assert_eq!(serial.port(), "COM4");
        assert_eq!(serial.baud(), BaudRate::B19200);
        assert_eq!(serial.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_rejects_nonstandard_baud() {
        let config: Config = toml::from_str("[serial]\nbaud = 10000\n").unwrap();
        assert!(config.serial_config().is_err());
    }
}
