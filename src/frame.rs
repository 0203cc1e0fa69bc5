//! Native 8x8 pixel buffer
//!
//! A [`Frame`] owns the 64 pixels of the matrix in native row-major order
//! (`index = y * 8 + x`). Orientation-aware access goes through
//! [`apply_orientation`](crate::rotation::apply_orientation); the absolute
//! accessors always use the native layout.
//!
//! Frames serialize to the 128-byte layout of the device framebuffer, two
//! little-endian bytes per pixel.
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::{Color, Frame, Orientation};
//!
//! let mut frame = Frame::new();
//! frame.set(5, 6, Color::RED, Orientation::Right);
//! assert_eq!(frame.get_absolute(1, 5), Color::RED);
//!
//! let bytes = frame.to_bytes();
//! assert_eq!(Frame::from_bytes(&bytes), Ok(frame));
//! ```

use core::fmt;

use crate::color::Color;
use crate::config::{FRAME_BYTES, MATRIX_SIZE, Orientation, PIXEL_COUNT};
use crate::rotation::apply_orientation;

/// One column or row of the matrix
pub type Line = [Color; MATRIX_SIZE];

/// The 8x8 pixel buffer in native layout
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Frame {
    pixels: [Color; PIXEL_COUNT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// An all-black frame
    pub const fn new() -> Self {
        Self::filled(Color::BLACK)
    }

    /// A frame with every pixel set to `color`
    pub const fn filled(color: Color) -> Self {
        Self {
            pixels: [color; PIXEL_COUNT],
        }
    }

    /// Deserialize from the 128-byte device layout
    ///
    /// # Errors
    ///
    /// Returns the provided length if `bytes` is not exactly
    /// [`FRAME_BYTES`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, usize> {
        if bytes.len() != FRAME_BYTES {
            return Err(bytes.len());
        }
        let mut frame = Self::new();
        for (pixel, chunk) in frame.pixels.iter_mut().zip(bytes.chunks_exact(2)) {
            *pixel = Color::from_le_bytes([chunk[0], chunk[1]]);
        }
        Ok(frame)
    }

    /// Serialize to the 128-byte device layout
    pub fn to_bytes(&self) -> [u8; FRAME_BYTES] {
        let mut bytes = [0u8; FRAME_BYTES];
        for (chunk, pixel) in bytes.chunks_exact_mut(2).zip(self.pixels.iter()) {
            chunk.copy_from_slice(&pixel.to_le_bytes());
        }
        bytes
    }

    /// Pixels in native order
    pub fn pixels(&self) -> &[Color; PIXEL_COUNT] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color; PIXEL_COUNT] {
        &mut self.pixels
    }

    /// Pixel at logical coordinates
    ///
    /// Both coordinates must be in `0..MATRIX_SIZE`. The checked variants
    /// live on [`Display`](crate::Display).
    pub fn get(&self, x: usize, y: usize, orientation: Orientation) -> Color {
        self.pixels[apply_orientation(x, y, orientation)]
    }

    /// Set the pixel at logical coordinates
    ///
    /// Same coordinate requirements as [`Frame::get`].
    pub fn set(&mut self, x: usize, y: usize, color: Color, orientation: Orientation) {
        self.pixels[apply_orientation(x, y, orientation)] = color;
    }

    /// Pixel at native coordinates
    pub fn get_absolute(&self, x: usize, y: usize) -> Color {
        self.get(x, y, Orientation::Up)
    }

    /// Set the pixel at native coordinates
    pub fn set_absolute(&mut self, x: usize, y: usize, color: Color) {
        self.set(x, y, color, Orientation::Up);
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Color) {
        self.pixels = [color; PIXEL_COUNT];
    }

    /// Logical column `x`, top to bottom
    pub fn column(&self, x: usize, orientation: Orientation) -> Line {
        core::array::from_fn(|y| self.get(x, y, orientation))
    }

    /// Shift the picture one logical column to the left
    ///
    /// Column 0 is discarded and `column` becomes the rightmost column.
    pub fn shift_left(&mut self, column: &Line, orientation: Orientation) {
        for x in 0..MATRIX_SIZE - 1 {
            for y in 0..MATRIX_SIZE {
                let color = self.get(x + 1, y, orientation);
                self.set(x, y, color, orientation);
            }
        }
        for (y, color) in column.iter().enumerate() {
            self.set(MATRIX_SIZE - 1, y, *color, orientation);
        }
    }
}

/// ASCII picture of the native layout, `X` for lit pixels
///
/// ```
/// use sense_hat_matrix::{Color, Frame};
///
/// let mut frame = Frame::new();
/// frame.set_absolute(0, 0, Color::WHITE);
/// let text = format!("{frame}");
/// assert!(text.starts_with(" 01234567\n0X       0\n"));
/// ```
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" 01234567\n")?;
        for y in 0..MATRIX_SIZE {
            write!(f, "{y}")?;
            for x in 0..MATRIX_SIZE {
                let lit = self.get_absolute(x, y) != Color::BLACK;
                f.write_str(if lit { "X" } else { " " })?;
            }
            writeln!(f, "{y}")?;
        }
        f.write_str(" 01234567")
    }
}
