//! Error types for the serial display library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving a display.
#[derive(Error, Debug)]
pub enum Error {
    /// Serial port could not be opened.
    #[error("Failed to open serial port {port}: {source}")]
    TransportOpen {
        port: String,
        #[source]
        source: tokio_serial::Error,
    },

    /// Writing a frame to the transport failed.
    #[error("Transport write failed: {0}")]
    TransportWrite(#[from] std::io::Error),

    /// Line index outside the display geometry.
    #[error("Invalid line: {0}")]
    InvalidLine(usize),

    /// Offset outside the line length.
    #[error("Invalid offset {offset} for line {line}")]
    InvalidOffset { line: usize, offset: usize },

    /// Baud rate is not one of the standard rates.
    #[error("Invalid baud rate: {0}")]
    InvalidBaud(u32),

    /// Baud rate is not a number.
    #[error("Invalid baud rate: {0}")]
    UnparsableBaud(String),

    /// Display geometry does not hold its invariant.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Unknown protocol dialect name.
    #[error("Invalid display mode: {0}")]
    InvalidMode(String),
}
