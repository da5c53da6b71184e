//! DSP-4xx driver over a serial transport.

use crate::device::{Device, InterfaceType};
use crate::display::{Display, Geometry, TextDisplay};
use crate::serial::SerialSettings;
use crate::{Error, Result};
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio_serial::{DataBits, Parity, SerialPort, StopBits};
use tracing::{debug, info, warn};

use super::protocol::{
    build_clear_packet, build_cursor_packet, build_mode_packet, encode_position, encode_text,
    Mode,
};

/// Model reported by the driver.
pub const DSP4XX_MODEL: &str = "DSP-4XX";

/// Vendor reported by the driver.
pub const DSP4XX_VENDOR: &str = "Generic";

/// Pause after each frame while the firmware processes it.
const FRAME_SETTLE: Duration = Duration::from_millis(80);

/// Pause after the mode select frame sent on open.
const MODE_SETTLE: Duration = Duration::from_millis(1200);

/// Settle delays applied after frame writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay after clear, cursor and text frames.
    pub frame_settle: Duration,
    /// Delay after the mode select frame.
    pub mode_settle: Duration,
}

impl Timing {
    /// No delays at all, for transports that are not real hardware.
    pub const fn immediate() -> Self {
        Self {
            frame_settle: Duration::ZERO,
            mode_settle: Duration::ZERO,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            frame_settle: FRAME_SETTLE,
            mode_settle: MODE_SETTLE,
        }
    }
}

/// DSP-4xx display controller.
///
/// Owns the transport. Every frame is written and settled while holding the
/// transport lock, so frames from concurrent callers never interleave.
pub struct Dsp4xx<T = Box<dyn SerialPort>> {
    port: Mutex<T>,
    geometry: Geometry,
    timing: Timing,
}

impl Dsp4xx<Box<dyn SerialPort>> {
    /// Opens the serial port and puts the display into its native dialect.
    pub fn open<S: SerialSettings + ?Sized>(settings: &S) -> Result<Self> {
        let port = tokio_serial::new(settings.port(), settings.baud().as_u32())
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(settings.timeout())
            .open()
            .map_err(|e| {
                debug!("Failed to open {}: {}", settings.port(), e);
                Error::TransportOpen {
                    port: settings.port().to_string(),
                    source: e,
                }
            })?;

        info!(
            "Serial port {} opened at {} baud",
            settings.port(),
            settings.baud()
        );

        Self::with_transport(port, Timing::default())
    }
}

impl<T: Write + Send> Dsp4xx<T> {
    /// Wraps an already open transport.
    ///
    /// Sends the mode select frame before returning, exactly like [`Dsp4xx::open`].
    pub fn with_transport(transport: T, timing: Timing) -> Result<Self> {
        let display = Self {
            port: Mutex::new(transport),
            geometry: Geometry::dsp4xx(),
            timing,
        };
        display.select_mode(Mode::DspT)?;
        Ok(display)
    }

    /// Returns the line layout.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the settle delays.
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Releases the transport.
    pub fn into_inner(self) -> T {
        self.port.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn select_mode(&self, mode: Mode) -> Result<()> {
        let packet = build_mode_packet(mode);
        self.send_frame(&packet, self.timing.mode_settle)?;
        info!("Display mode set to {}", mode);
        Ok(())
    }

    fn clear_range(&self, start: usize, end: usize) -> Result<()> {
        let max = self.geometry.max_position();
        let packet = build_clear_packet(encode_position(start, max), encode_position(end, max));
        self.send_frame(&packet, self.timing.frame_settle)
    }

    fn set_cursor(&self, position: usize) -> Result<()> {
        let packet = build_cursor_packet(encode_position(position, self.geometry.max_position()));
        self.send_frame(&packet, self.timing.frame_settle)
    }

    /// Writes one frame and waits out its settle delay under the lock.
    ///
    /// A failed write skips the delay. The lock is released on every path.
    fn send_frame(&self, data: &[u8], settle: Duration) -> Result<()> {
        let result = {
            let mut port = self.port.lock().unwrap_or_else(PoisonError::into_inner);
            debug!("Sending frame: {:02X?} (settle {:?})", data, settle);

            let result = port.write_all(data).and_then(|()| port.flush());
            if result.is_ok() {
                std::thread::sleep(settle);
            }
            result
        };

        std::thread::yield_now();

        result.map_err(|e| {
            warn!("Frame write failed: {}", e);
            Error::TransportWrite(e)
        })
    }
}

impl<T: Write + Send> Device for Dsp4xx<T> {
    fn model(&self) -> &str {
        DSP4XX_MODEL
    }

    fn vendor(&self) -> &str {
        DSP4XX_VENDOR
    }

    fn interface_type(&self) -> InterfaceType {
        InterfaceType::Serial
    }
}

impl<T: Write + Send> Display for Dsp4xx<T> {}

impl<T: Write + Send> TextDisplay for Dsp4xx<T> {
    fn line_count(&self) -> usize {
        self.geometry.line_count()
    }

    fn line_size(&self, line: usize) -> usize {
        self.geometry.line_length(line).unwrap_or(0)
    }

    fn clear(&self) -> Result<()> {
        self.clear_range(1, self.geometry.total_positions())?;
        debug!("Display cleared");
        Ok(())
    }

    fn clear_line(&self, line: usize) -> Result<()> {
        let (start, len) = self
            .geometry
            .line_start(line)
            .zip(self.geometry.line_length(line))
            .ok_or(Error::InvalidLine(line))?;

        self.clear_range(start, start + len - 1)?;
        debug!("Line {} cleared", line);
        Ok(())
    }

    fn write(&self, text: &str, line: usize, offset: usize, clear_first: bool) -> Result<()> {
        let (start, len) = self
            .geometry
            .line_start(line)
            .zip(self.geometry.line_length(line))
            .ok_or(Error::InvalidLine(line))?;

        // Validate everything before the first frame goes out
        if offset >= len {
            return Err(Error::InvalidOffset { line, offset });
        }

        if clear_first {
            self.clear_line(line)?;
        }

        self.set_cursor(start + offset)?;

        let data = encode_text(text, len - offset);
        self.send_frame(&data, self.timing.frame_settle)?;

        debug!(
            "Wrote {} bytes at line {} offset {}",
            data.len(),
            line,
            offset
        );
        Ok(())
    }
}
