//! RGB565 color type for the LED matrix
//!
//! The matrix framebuffer stores two bytes per pixel. Red, green and blue take
//! respectively 5, 6 and 5 bits of the 16-bit value:
//!
//! | Bits  | Component |
//! |-------|-----------|
//! | 15-11 | Red       |
//! | 10-5  | Green     |
//! | 4-0   | Blue      |
//!
//! Component values wider than their field are truncated, never rejected.
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::Color;
//!
//! let red = Color::RED;
//! assert_eq!(red.raw(), 0xF800);
//! assert_eq!(red.red(), 31);
//! assert_eq!(red.green(), 0);
//!
//! let custom = Color::new(3, 3, 3);
//! assert_eq!(custom.raw(), 0b0001_1000_0110_0011);
//! ```

const RED_MASK: u16 = 0b1111_1000_0000_0000;
const GREEN_MASK: u16 = 0b0000_0111_1110_0000;
const BLUE_MASK: u16 = 0b0000_0000_0001_1111;

const RED_SHIFT: u16 = 11;
const GREEN_SHIFT: u16 = 5;

/// Packed 16-bit RGB565 pixel color
///
/// Equality compares the raw 16-bit value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color(u16);

impl Color {
    /// Red: `0xF800`
    pub const RED: Self = Self(0b1111_1000_0000_0000);
    /// Green: `0x07E0`
    pub const GREEN: Self = Self(0b0000_0111_1110_0000);
    /// Blue: `0x001F`
    pub const BLUE: Self = Self(0b0000_0000_0001_1111);
    /// White: `0xFFFF`
    pub const WHITE: Self = Self(0b1111_1111_1111_1111);
    /// Black: `0x0000`
    pub const BLACK: Self = Self(0b0000_0000_0000_0000);
    /// Brown (R 0.6, G 0.4, B 0.2)
    pub const BROWN: Self = Self(0b1001_1011_0010_0110);
    /// Cyan (R 0.0, G 1.0, B 1.0)
    pub const CYAN: Self = Self(0b0000_0111_1111_1111);
    /// Magenta (R 1.0, G 0.0, B 1.0)
    pub const MAGENTA: Self = Self(0b1111_1000_0001_1111);
    /// Yellow (R 1.0, G 1.0, B 0.0)
    pub const YELLOW: Self = Self(0b1111_1111_1110_0000);
    /// Purple (R 0.5, G 0.0, B 0.5)
    pub const PURPLE: Self = Self(0b1000_0000_0001_0000);
    /// Orange (R 1.0, G 0.5, B 0.0)
    pub const ORANGE: Self = Self(0b1111_1100_0000_0000);
    /// Gray (R 0.5, G 0.5, B 0.5)
    pub const GRAY: Self = Self(0b1000_0100_0001_0000);
    /// Light gray (2/3 of every component)
    pub const LIGHT_GRAY: Self = Self(0b1010_1101_0101_0101);
    /// Dark gray (1/3 of every component)
    pub const DARK_GRAY: Self = Self(0b0101_0010_1010_1010);

    /// Build a color from its components
    ///
    /// Red and blue keep their low 5 bits, green keeps its low 6 bits.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(
            ((red as u16) << RED_SHIFT)
                | (((green as u16) << GREEN_SHIFT) & GREEN_MASK)
                | ((blue as u16) & BLUE_MASK),
        )
    }

    /// Wrap a raw RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red component, 0 to 31
    pub const fn red(self) -> u8 {
        (self.0 >> RED_SHIFT) as u8
    }

    /// Green component, 0 to 63
    pub const fn green(self) -> u8 {
        ((self.0 & GREEN_MASK) >> GREEN_SHIFT) as u8
    }

    /// Blue component, 0 to 31
    pub const fn blue(self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    /// Replace the red component, truncating to 5 bits
    pub fn set_red(&mut self, red: u8) {
        self.0 = (self.0 & !RED_MASK) | ((red as u16) << RED_SHIFT);
    }

    /// Replace the green component, truncating to 6 bits
    pub fn set_green(&mut self, green: u8) {
        self.0 = (self.0 & !GREEN_MASK) | (((green as u16) << GREEN_SHIFT) & GREEN_MASK);
    }

    /// Replace the blue component, truncating to 5 bits
    pub fn set_blue(&mut self, blue: u8) {
        self.0 = (self.0 & !BLUE_MASK) | ((blue as u16) & BLUE_MASK);
    }

    /// Copy of this color with a different red component
    pub fn with_red(mut self, red: u8) -> Self {
        self.set_red(red);
        self
    }

    /// Copy of this color with a different green component
    pub fn with_green(mut self, green: u8) -> Self {
        self.set_green(green);
        self
    }

    /// Copy of this color with a different blue component
    pub fn with_blue(mut self, blue: u8) -> Self {
        self.set_blue(blue);
        self
    }

    /// Little-endian bytes as stored in the device framebuffer
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Color from little-endian framebuffer bytes
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::raw::{RawData, RawU16};
        Self(RawU16::from(color).into_inner())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawU16;
        Self::from(RawU16::new(color.0))
    }
}
