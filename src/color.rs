//! Color representation for terminal cells
//!
//! Supports:
//! - Default foreground/background
//! - 256-color palette (0-255, covering the 16 ANSI colors)
//! - 24-bit true color (RGB)
//!
//! The downgrade methods convert any color to the deepest palette a
//! terminal supports, quantizing true color through the 256-color
//! palette and reducing further to 16 colors where needed.

use serde::{Deserialize, Serialize};

use crate::palette::{index_to_16, index_to_rgb};
use crate::quantize::rgb_to_256;
use crate::rgb::Rgb;

/// Color representation supporting all terminal color modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    /// Default terminal color (foreground or background)
    #[default]
    Default,
    /// Indexed color (0-255)
    /// 0-7: standard colors
    /// 8-15: bright colors
    /// 16-231: 6x6x6 color cube
    /// 232-255: grey ramp
    Indexed(u8),
    /// 24-bit RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Standard ANSI color indices
    pub const BLACK: u8 = 0;
    pub const RED: u8 = 1;
    pub const GREEN: u8 = 2;
    pub const YELLOW: u8 = 3;
    pub const BLUE: u8 = 4;
    pub const MAGENTA: u8 = 5;
    pub const CYAN: u8 = 6;
    pub const WHITE: u8 = 7;

    /// Bright ANSI color indices
    pub const BRIGHT_BLACK: u8 = 8;
    pub const BRIGHT_RED: u8 = 9;
    pub const BRIGHT_GREEN: u8 = 10;
    pub const BRIGHT_YELLOW: u8 = 11;
    pub const BRIGHT_BLUE: u8 = 12;
    pub const BRIGHT_MAGENTA: u8 = 13;
    pub const BRIGHT_CYAN: u8 = 14;
    pub const BRIGHT_WHITE: u8 = 15;

    /// Create a new indexed color
    pub fn indexed(index: u8) -> Self {
        Color::Indexed(index)
    }

    /// Create a new RGB color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Resolve to an RGB value, if the color has one
    ///
    /// `Default` has no fixed RGB value; what it displays as is decided
    /// by the host's theme, so callers must resolve it themselves.
    pub fn to_rgb(self) -> Option<Rgb> {
        match self {
            Color::Default => None,
            Color::Indexed(index) => Some(index_to_rgb(index)),
            Color::Rgb { r, g, b } => Some(Rgb::new(r, g, b)),
        }
    }

    /// Downgrade to a 256-color palette index
    ///
    /// True color is quantized to the nearest palette entry; indexed
    /// colors pass through unchanged.
    pub fn to_256(self) -> Option<u8> {
        match self {
            Color::Default => {
                log::debug!("default color has no palette index; caller must resolve it");
                None
            }
            Color::Indexed(index) => Some(index),
            Color::Rgb { r, g, b } => Some(rgb_to_256(r, g, b)),
        }
    }

    /// Downgrade to a legacy 16-color palette index
    pub fn to_16(self) -> Option<u8> {
        self.to_256().map(index_to_16)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::Default);
        assert_eq!(Color::Default.to_rgb(), None);
        assert_eq!(Color::Default.to_256(), None);
        assert_eq!(Color::Default.to_16(), None);
    }

    #[test]
    fn test_indexed_passthrough() {
        let color = Color::indexed(Color::BRIGHT_RED);
        assert_eq!(color.to_256(), Some(9));
        assert_eq!(color.to_16(), Some(9));
        assert_eq!(color.to_rgb(), Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_rgb_downgrade() {
        let color = Color::rgb(0, 0, 255);
        assert_eq!(color.to_256(), Some(21));
        assert_eq!(color.to_16(), Some(Color::BRIGHT_BLUE));
    }

    #[test]
    fn test_grey_downgrade() {
        let color = Color::rgb(128, 128, 128);
        assert_eq!(color.to_256(), Some(244));
        assert_eq!(color.to_16(), Some(Color::WHITE));
    }

    #[test]
    fn test_from_rgb() {
        let color: Color = Rgb::new(10, 20, 30).into();
        assert_eq!(color, Color::Rgb { r: 10, g: 20, b: 30 });
    }

    #[test]
    fn test_serde_roundtrip() {
        let colors = [
            Color::Default,
            Color::Indexed(196),
            Color::Rgb { r: 1, g: 2, b: 3 },
        ];
        for color in colors {
            let json = serde_json::to_string(&color).unwrap();
            let back: Color = serde_json::from_str(&json).unwrap();
            assert_eq!(back, color);
        }
    }
}
