//! Core display operations
//!
//! [`Display`] owns the matrix [`Frame`] and the current [`Orientation`] and
//! pushes the frame to its [`Sink`] after every mutating operation.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::config::{Config, FRAME_BYTES, MATRIX_SIZE, Orientation, column_delay_us};
use crate::error::Error;
use crate::font::{Glyph, first_scalar};
use crate::frame::{Frame, Line};
use crate::rotation::Rotation;
use crate::scroll::Scroll;
use crate::sink::Sink;

type DisplayResult<S> = core::result::Result<(), Error<S>>;
type DisplayValue<S, T> = core::result::Result<T, Error<S>>;

/// LED matrix display engine
///
/// One instance owns one matrix. All operations run to completion on the
/// calling thread; share an instance across threads only behind external
/// mutual exclusion.
///
/// ## Example
///
/// ```
/// use sense_hat_matrix::{Builder, Color, Display, NullSink, Orientation};
///
/// let config = match Builder::new().orientation(Orientation::Right).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let mut display = Display::new(NullSink, config);
///
/// let _ = display.set_pixel(5, 6, Color::RED);
/// assert_eq!(display.pixel_absolute(1, 5).ok(), Some(Color::RED));
///
/// let _ = display.set_orientation(Orientation::Up);
/// assert_eq!(display.pixel(5, 6).ok(), Some(Color::RED));
/// ```
pub struct Display<S>
where
    S: Sink,
{
    /// Frame consumer
    sink: S,
    /// Display configuration
    config: Config,
    /// Pixel buffer in native layout
    frame: Frame,
    /// Active logical orientation
    orientation: Orientation,
}

impl<S> Display<S>
where
    S: Sink,
{
    /// Create a new Display with an all-black frame
    ///
    /// Nothing is pushed to the sink until the first mutating operation.
    pub fn new(sink: S, config: Config) -> Self {
        Self {
            sink,
            orientation: config.orientation,
            config,
            frame: Frame::new(),
        }
    }

    /// Release the sink
    pub fn release(self) -> S {
        self.sink
    }

    /// Access the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Access the sink mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Get the display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current frame in native layout
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[cfg(feature = "graphics")]
    pub(crate) fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// Active orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the orientation and re-render the frame
    ///
    /// The frame is rotated by the difference between the old and the new
    /// orientation, so the picture reads the same as before through the new
    /// logical frame.
    pub fn set_orientation(&mut self, orientation: Orientation) -> DisplayResult<S> {
        let rotation = Rotation::between(self.orientation, orientation);
        log::debug!(
            "orientation {:?} -> {:?} ({:?})",
            self.orientation,
            orientation,
            rotation
        );
        self.orientation = orientation;
        self.frame.rotate(rotation);
        self.flush()
    }

    fn check_bounds(x: usize, y: usize) -> DisplayResult<S> {
        if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
            return Err(Error::OutOfBounds { x, y });
        }
        Ok(())
    }

    /// Push the current frame to the sink
    ///
    /// Only needed after drawing through the embedded-graphics `DrawTarget`
    /// implementation; every other operation flushes on its own.
    pub fn flush(&mut self) -> DisplayResult<S> {
        self.sink.write_frame(&self.frame).map_err(Error::Sink)
    }

    /// Color at logical coordinates
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if a coordinate is not in `0..8`.
    pub fn pixel(&self, x: usize, y: usize) -> DisplayValue<S, Color> {
        Self::check_bounds(x, y)?;
        Ok(self.frame.get(x, y, self.orientation))
    }

    /// Set the color at logical coordinates
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if a coordinate is not in `0..8`.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> DisplayResult<S> {
        Self::check_bounds(x, y)?;
        self.frame.set(x, y, color, self.orientation);
        self.flush()
    }

    /// Color at native coordinates, ignoring the orientation
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if a coordinate is not in `0..8`.
    pub fn pixel_absolute(&self, x: usize, y: usize) -> DisplayValue<S, Color> {
        Self::check_bounds(x, y)?;
        Ok(self.frame.get_absolute(x, y))
    }

    /// Set the color at native coordinates, ignoring the orientation
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` if a coordinate is not in `0..8`.
    pub fn set_pixel_absolute(&mut self, x: usize, y: usize, color: Color) -> DisplayResult<S> {
        Self::check_bounds(x, y)?;
        self.frame.set_absolute(x, y, color);
        self.flush()
    }

    /// Set every pixel to `color`
    pub fn set_all(&mut self, color: Color) -> DisplayResult<S> {
        self.frame.fill(color);
        self.flush()
    }

    /// Turn every pixel off
    pub fn clear(&mut self) -> DisplayResult<S> {
        self.set_all(Color::BLACK)
    }

    /// Raw frame in the 128-byte native device layout
    pub fn data(&self) -> [u8; FRAME_BYTES] {
        self.frame.to_bytes()
    }

    /// Replace the frame from raw bytes in the native device layout
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDataLength` if `data` is not exactly 128 bytes.
    pub fn set_data(&mut self, data: &[u8]) -> DisplayResult<S> {
        self.frame = Frame::from_bytes(data).map_err(|provided| Error::InvalidDataLength {
            expected: FRAME_BYTES,
            provided,
        })?;
        self.flush()
    }

    /// Replace the frame
    pub fn set_frame(&mut self, frame: Frame) -> DisplayResult<S> {
        self.frame = frame;
        self.flush()
    }

    /// Swap native pixel (x, y) with (y, x)
    pub fn transpose(&mut self) -> DisplayResult<S> {
        self.frame.transpose();
        self.flush()
    }

    /// Mirror the native frame left to right
    pub fn reflect_vertically(&mut self) -> DisplayResult<S> {
        self.frame.reflect_vertically();
        self.flush()
    }

    /// Mirror the native frame top to bottom
    pub fn reflect_horizontally(&mut self) -> DisplayResult<S> {
        self.frame.reflect_horizontally();
        self.flush()
    }

    /// Rotate the picture by a multiple of a quarter turn
    pub fn rotate(&mut self, rotation: Rotation) -> DisplayResult<S> {
        log::debug!("rotate {:?}", rotation);
        self.frame.rotate(rotation);
        self.flush()
    }

    /// Rotate the picture by an angle in radians
    ///
    /// The angle is normalized modulo 2π; accumulated drift up to `1e-4` rad
    /// is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedAngle` unless the angle is a multiple of
    /// π/2. The frame is left untouched in that case.
    pub fn rotate_radians(&mut self, angle: f64) -> DisplayResult<S> {
        let rotation = Rotation::from_radians(angle).ok_or(Error::UnsupportedAngle(angle))?;
        self.rotate(rotation)
    }

    /// Frame showing `c` upright for the current orientation
    ///
    /// Characters without a glyph give a frame filled with `bg`.
    pub fn char_frame(&self, c: char, fg: Color, bg: Color) -> Frame {
        Glyph::for_char(c).render(fg, bg, self.orientation)
    }

    /// Raw bytes of [`Display::char_frame`] in the native device layout
    pub fn char_data(&self, c: char, fg: Color, bg: Color) -> [u8; FRAME_BYTES] {
        self.char_frame(c, fg, bg).to_bytes()
    }

    /// Show a character in the configured colors
    pub fn show_char(&mut self, c: char) -> DisplayResult<S> {
        self.show_char_with(c, self.config.foreground, self.config.background)
    }

    /// Show a character, replacing the whole frame
    pub fn show_char_with(&mut self, c: char, fg: Color, bg: Color) -> DisplayResult<S> {
        self.frame = self.char_frame(c, fg, bg);
        self.flush()
    }

    /// Show the first scalar of a user-perceived character
    ///
    /// Extra scalars such as combining accents are dropped with a warning.
    /// An empty string shows a blank background.
    pub fn show_cluster(&mut self, cluster: &str, fg: Color, bg: Color) -> DisplayResult<S> {
        match first_scalar(cluster) {
            Some(c) => self.show_char_with(c, fg, bg),
            None => self.set_all(bg),
        }
    }

    /// Shift the picture one logical column left, adding `column` on the right
    pub fn shift_left(&mut self, column: &Line) -> DisplayResult<S> {
        self.frame.shift_left(column, self.orientation);
        self.flush()
    }

    /// Scroll `text` across the matrix in the configured colors and speed
    ///
    /// Blocks until the last character has scrolled in.
    pub fn show_str<D: DelayNs>(&mut self, text: &str, delay: &mut D) -> DisplayResult<S> {
        let Config {
            foreground,
            background,
            scroll_speed,
            ..
        } = self.config;
        self.show_str_with(text, foreground, background, scroll_speed, delay)
    }

    /// Scroll `text` across the matrix
    ///
    /// Each user-perceived character (grapheme cluster) scrolls in over eight
    /// column steps and is drawn like [`Display::show_cluster`]. After every step
    /// the frame is flushed and the call sleeps `seconds_per_char / 8`. The
    /// step delay is computed once, so drift accumulates over long strings.
    /// When the call returns the frame shows the last character.
    ///
    /// # Errors
    ///
    /// Returns the first sink error; scrolling stops at that column.
    pub fn show_str_with<D: DelayNs>(
        &mut self,
        text: &str,
        fg: Color,
        bg: Color,
        seconds_per_char: f32,
        delay: &mut D,
    ) -> DisplayResult<S> {
        let step_us = column_delay_us(seconds_per_char);
        log::debug!("scroll {:?}, {} us per column", text, step_us);
        for (step, column) in Scroll::new(text, fg, bg).enumerate() {
            log::trace!("scroll step {}", step);
            self.shift_left(&column)?;
            delay.delay_us(step_us);
        }
        Ok(())
    }
}

impl<S> core::fmt::Debug for Display<S>
where
    S: Sink + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Display")
            .field("sink", &self.sink)
            .field("config", &self.config)
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}
