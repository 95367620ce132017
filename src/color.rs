//! Pixel color for monochrome OLED panels
//!
//! Each pixel is one bit in display RAM: a set bit lights the OLED dot
//! (unless the controller is in inverse mode, see
//! [`Display::set_inverted`](crate::display::Display::set_inverted)).
//!
//! | Color | RAM bit | Fill byte |
//! |-------|---------|-----------|
//! | Off   | 0       | 0x00      |
//! | On    | 1       | 0xFF      |
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::Color;
//!
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! assert_eq!(Color::from(true), Color::On);
//!
//! // Anything but 1 clears the pixel
//! assert_eq!(Color::from(2u8), Color::Off);
//! ```

/// Colors supported by SSD1306 (monochrome)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Dark pixel (bit cleared)
    #[default]
    Off,
    /// Lit pixel (bit set)
    On,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self::from(value == 1)
    }
}

impl Color {
    /// Whether this color sets the RAM bit
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The opposite color
    ///
    /// Used for text backgrounds.
    pub fn inverted(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Byte value that paints all 8 pixels of a page column in this color
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }
}
