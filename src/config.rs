//! Display configuration types and builder

use crate::color::Color;
pub use crate::error::BuilderError;

/// Width and height of the LED matrix in pixels
pub const MATRIX_SIZE: usize = 8;

/// Number of pixels in the matrix
pub const PIXEL_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Size of the native framebuffer in bytes (two bytes per pixel)
pub const FRAME_BYTES: usize = PIXEL_COUNT * 2;

/// Default scroll speed in seconds per character
pub const DEFAULT_SCROLL_SPEED: f32 = 0.5;

/// Orientation of the logical coordinate frame relative to the native layout
///
/// `Right` means the board is turned so that logical "up" points to the
/// native right edge, and so on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Native orientation
    #[default]
    Up,
    /// Logical up is the native right edge
    Right,
    /// Upside down
    Down,
    /// Logical up is the native left edge
    Left,
}

impl Orientation {
    /// All orientations, in quarter-turn order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Number of quarter turns from `Up`
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Initial orientation
    pub orientation: Orientation,
    /// Default glyph color for text
    pub foreground: Color,
    /// Default background color for text
    pub background: Color,
    /// Scroll speed in seconds per character
    pub scroll_speed: f32,
}

impl Config {
    /// Delay between two scroll steps in microseconds
    ///
    /// One character is eight column steps.
    pub fn column_delay_us(&self) -> u32 {
        column_delay_us(self.scroll_speed)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Up,
            foreground: Color::WHITE,
            background: Color::BLACK,
            scroll_speed: DEFAULT_SCROLL_SPEED,
        }
    }
}

/// Convert seconds per character into microseconds per column step
///
/// Values that are negative or not finite yield no delay.
pub(crate) fn column_delay_us(seconds_per_char: f32) -> u32 {
    if !seconds_per_char.is_finite() || seconds_per_char <= 0.0 {
        return 0;
    }
    let micros = seconds_per_char * 1_000_000.0 / MATRIX_SIZE as f32;
    if micros >= u32::MAX as f32 {
        u32::MAX
    } else {
        micros as u32
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use sense_hat_matrix::{Builder, Color, Orientation};
///
/// let config = match Builder::new()
///     .orientation(Orientation::Left)
///     .foreground(Color::YELLOW)
///     .scroll_speed(0.25)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.column_delay_us(), 31_250);
/// ```
#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    orientation: Orientation,
    foreground: Color,
    background: Color,
    scroll_speed: f32,
}

impl Default for Builder {
    fn default() -> Self {
        let config = Config::default();
        Self {
            orientation: config.orientation,
            foreground: config.foreground,
            background: config.background,
            scroll_speed: config.scroll_speed,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the default text color
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the default text background
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the scroll speed in seconds per character
    pub fn scroll_speed(mut self, seconds_per_char: f32) -> Self {
        self.scroll_speed = seconds_per_char;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidScrollSpeed` if the scroll speed is
    /// negative, infinite or NaN.
    pub fn build(self) -> Result<Config, BuilderError> {
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return Err(BuilderError::InvalidScrollSpeed(self.scroll_speed));
        }
        Ok(Config {
            orientation: self.orientation,
            foreground: self.foreground,
            background: self.background,
            scroll_speed: self.scroll_speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.orientation, Orientation::Up);
        assert_eq!(config.foreground, Color::WHITE);
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.column_delay_us(), 62_500);
    }

    #[test]
    fn test_builder_rejects_negative_speed() {
        let result = Builder::new().scroll_speed(-1.0).build();
        assert!(matches!(result, Err(BuilderError::InvalidScrollSpeed(_))));
    }

    #[test]
    fn test_builder_rejects_nan_speed() {
        let result = Builder::new().scroll_speed(f32::NAN).build();
        assert!(matches!(result, Err(BuilderError::InvalidScrollSpeed(_))));
        let result = Builder::new().scroll_speed(f32::INFINITY).build();
        assert!(matches!(result, Err(BuilderError::InvalidScrollSpeed(_))));
    }

    #[test]
    fn test_zero_speed_has_no_delay() {
        let config = Builder::new().scroll_speed(0.0).build().unwrap();
        assert_eq!(config.column_delay_us(), 0);
    }

    #[test]
    fn test_column_delay_saturates() {
        assert_eq!(column_delay_us(1.0e9), u32::MAX);
        assert_eq!(column_delay_us(f32::NAN), 0);
        assert_eq!(column_delay_us(0.008), 1_000);
    }

    #[test]
    fn test_orientation_quarter_turns() {
        for (i, orientation) in Orientation::ALL.iter().enumerate() {
            assert_eq!(orientation.quarter_turns() as usize, i);
        }
    }
}
