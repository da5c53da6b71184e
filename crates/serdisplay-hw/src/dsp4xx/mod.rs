//! DSP-4xx customer display.
//!
//! Two-line, twenty-column VFD/LCD pole displays driven over a serial port
//! with a small binary command set.

mod device;
mod protocol;

pub use device::{Dsp4xx, Timing, DSP4XX_MODEL, DSP4XX_VENDOR};
pub use protocol::{Command, Mode};
