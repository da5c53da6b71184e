//! Serial Display Hardware Library
//!
//! Capability traits for displays (text and pixel) and a driver for DSP-4xx
//! style customer displays attached over a serial port.

pub mod device;
pub mod display;
pub mod dsp4xx;
pub mod error;
pub mod serial;

pub use device::{Device, InterfaceType};
pub use display::{Display, Geometry, PixelDisplay, TextDisplay};
pub use dsp4xx::{Dsp4xx, Mode, Timing};
pub use error::{Error, Result};
pub use serial::{BaudRate, SerialConfig, SerialSettings};
