//! 8x8 RGB LED Matrix Display Engine
//!
//! A display engine for the 8x8 RGB565 LED matrix found on Raspberry Pi
//! add-on boards such as the Sense HAT.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Orientation-aware pixel addressing with content-preserving reorientation
//! - In-place transpose, reflections and quarter-turn rotations
//! - 8x8 bitmap font covering ASCII, Latin-1, Greek, box drawing, block
//!   elements and Hiragana
//! - Horizontal text scrolling driven by any `embedded-hal` v1.0 delay
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Linux framebuffer device sink (with `std` feature)
//!
//! ## Usage
//!
//! ```rust
//! use embedded_hal::delay::DelayNs;
//! use sense_hat_matrix::{Builder, Callback, Color, Display, Orientation};
//!
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let config = match Builder::new()
//!     .orientation(Orientation::Up)
//!     .foreground(Color::YELLOW)
//!     .scroll_speed(0.4)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! // Any sink works; a real board uses `FramebufferDevice` (`std` feature)
//! let sink = Callback::new(|frame: &sense_hat_matrix::Frame| {
//!     let _bytes = frame.to_bytes();
//! });
//! let mut display = Display::new(sink, config);
//!
//! let _ = display.set_pixel(0, 0, Color::RED);
//! let _ = display.show_char('A');
//! let _ = display.set_orientation(Orientation::Left);
//! let _ = display.show_str("Hello", &mut delay);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// RGB565 color type and palette
pub mod color;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the engine
pub mod error;
/// 8x8 bitmap font
pub mod font;
/// Native pixel buffer
pub mod frame;
/// Coordinate mapping and rotation utilities
pub mod rotation;
/// Scrolling text state machine
pub mod scroll;
/// Frame sink abstraction
pub mod sink;
mod transform;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

/// Framebuffer device sink (requires `std` feature)
#[cfg(feature = "std")]
pub mod device;

pub use color::Color;
pub use config::{
    Builder, Config, DEFAULT_SCROLL_SPEED, FRAME_BYTES, MATRIX_SIZE, Orientation, PIXEL_COUNT,
};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use frame::{Frame, Line};
pub use rotation::Rotation;
pub use scroll::Scroll;
pub use sink::{Callback, NullSink, Sink};

#[cfg(feature = "std")]
pub use device::{FramebufferDevice, StdDelay};
