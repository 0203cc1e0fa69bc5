//! Error types for the display engine
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! Unknown glyphs are not errors: they render as a blank background.
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::{Builder, BuilderError, Display, Error, NullSink};
//!
//! let result = Builder::new().scroll_speed(-1.0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidScrollSpeed(_))));
//!
//! let mut display = Display::new(NullSink, Default::default());
//! let result = display.set_data(&[0u8; 10]);
//! assert!(matches!(result, Err(Error::InvalidDataLength { expected: 128, provided: 10 })));
//! ```

use crate::config::MATRIX_SIZE;
use crate::sink::Sink;

/// Errors that can occur when operating the display
///
/// Generic over the sink type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<S: Sink> {
    /// Sink error
    ///
    /// Wraps the error returned by the [`Sink`] while pushing a frame.
    Sink(S::Error),
    /// Coordinate outside the matrix
    ///
    /// Both coordinates must be in `0..MATRIX_SIZE`.
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
    },
    /// Raw frame data has the wrong length
    InvalidDataLength {
        /// Expected length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
    /// Rotation angle is not a multiple of a quarter turn
    ///
    /// Only 0, π/2, π and 3π/2 (modulo 2π) are supported.
    UnsupportedAngle(f64),
}

impl<S: Sink> core::fmt::Display for Error<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sink(_) => write!(f, "Sink error"),
            Self::OutOfBounds { x, y } => write!(
                f,
                "Coordinate ({x}, {y}) outside the {MATRIX_SIZE}x{MATRIX_SIZE} matrix"
            ),
            Self::InvalidDataLength { expected, provided } => write!(
                f,
                "Invalid frame data length: expected {expected} bytes, provided {provided}"
            ),
            Self::UnsupportedAngle(angle) => {
                write!(f, "Unsupported rotation angle: {angle} rad")
            }
        }
    }
}

impl<S: Sink + core::fmt::Debug> core::error::Error for Error<S> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Scroll speed is negative, infinite or NaN
    InvalidScrollSpeed(f32),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidScrollSpeed(speed) => write!(
                f,
                "Invalid scroll speed {speed} s/char (must be finite and not negative)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
