//! Display capability traits.
//!
//! Calling code is written against these traits so that drivers for
//! different devices can be swapped behind it.

use crate::device::Device;
use crate::{Error, Result};

/// Marker for devices that present something to look at.
pub trait Display: Device {}

/// Line-oriented character display.
pub trait TextDisplay: Display {
    /// Number of text lines.
    fn line_count(&self) -> usize;

    /// Characters per line, or 0 when `line` does not exist.
    fn line_size(&self, line: usize) -> usize;

    /// Clears every line.
    fn clear(&self) -> Result<()>;

    /// Clears a single line.
    fn clear_line(&self, line: usize) -> Result<()>;

    /// Writes `text` at `offset` on `line`, optionally clearing the line first.
    ///
    /// Text that does not fit between `offset` and the end of the line is
    /// cut off.
    fn write(&self, text: &str, line: usize, offset: usize, clear_first: bool) -> Result<()>;
}

/// Raster display. Drawing operations live with the concrete drivers.
pub trait PixelDisplay: Display {
    /// Width in pixels.
    fn width(&self) -> u64;

    /// Height in pixels.
    fn height(&self) -> u64;
}

/// Fixed line layout of a text display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    line_lengths: Vec<usize>,
}

impl Geometry {
    /// Creates a geometry with one entry per line.
    pub fn new(line_lengths: Vec<usize>) -> Result<Self> {
        if line_lengths.is_empty() {
            return Err(Error::InvalidGeometry(
                "at least one line is required".to_string(),
            ));
        }
        if let Some(line) = line_lengths.iter().position(|&len| len == 0) {
            return Err(Error::InvalidGeometry(format!("line {} has zero length", line)));
        }
        Ok(Self { line_lengths })
    }

    /// Two lines of twenty characters.
    pub fn dsp4xx() -> Self {
        Self {
            line_lengths: vec![20, 20],
        }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.line_lengths.len()
    }

    /// Length of `line`, if it exists.
    pub fn line_length(&self, line: usize) -> Option<usize> {
        self.line_lengths.get(line).copied()
    }

    /// Number of addressable character cells across all lines.
    pub fn total_positions(&self) -> usize {
        self.line_lengths.iter().sum()
    }

    /// Absolute 1-based position of the first cell of `line`.
    ///
    /// Computed as `line * line_length(line) + 1`, which assumes every line
    /// before it has the same length.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_length(line).map(|len| line * len + 1)
    }

    /// Highest position the device firmware can encode.
    pub fn max_position(&self) -> usize {
        let last = self.line_lengths.last().copied().unwrap_or(0);
        last * self.line_count()
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::dsp4xx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::InterfaceType;

    struct Oled;

    impl Device for Oled {
        fn model(&self) -> &str {
            "SSD1306"
        }

        fn vendor(&self) -> &str {
            "Solomon Systech"
        }

        fn interface_type(&self) -> InterfaceType {
            InterfaceType::Spi
        }
    }

    impl Display for Oled {}

    impl PixelDisplay for Oled {
        fn width(&self) -> u64 {
            128
        }

        fn height(&self) -> u64 {
            64
        }
    }

    fn describe(display: &dyn PixelDisplay) -> String {
        format!(
            "{} {} {}x{} over {}",
            display.vendor(),
            display.model(),
            display.width(),
            display.height(),
            display.interface_type()
        )
    }

    #[test]
    fn test_pixel_display_through_trait() {
        assert_eq!(describe(&Oled), "Solomon Systech SSD1306 128x64 over spi");
    }

    #[test]
    fn test_dsp4xx_geometry() {
        let geometry = Geometry::dsp4xx();
        assert_eq!(geometry.line_count(), 2);
        assert_eq!(geometry.line_length(0), Some(20));
        assert_eq!(geometry.line_length(1), Some(20));
        assert_eq!(geometry.line_length(2), None);
        assert_eq!(geometry.total_positions(), 40);
        assert_eq!(geometry.max_position(), 40);
    }

    #[test]
    fn test_line_start() {
        let geometry = Geometry::dsp4xx();
        assert_eq!(geometry.line_start(0), Some(1));
        assert_eq!(geometry.line_start(1), Some(21));
        assert_eq!(geometry.line_start(2), None);
    }

    #[test]
    fn test_invalid_geometry() {
        assert!(matches!(
            Geometry::new(vec![]),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            Geometry::new(vec![16, 0]),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(Geometry::new(vec![16, 16, 16, 16]).is_ok());
    }
}
