//! Graphics support via embedded-graphics
//!
//! [`Display`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem. Drawing goes through the active
//! orientation like [`Display::set_pixel`], but only touches the frame: call
//! [`Display::flush`] once the drawing is done.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle, Rectangle},
//! };
//! use sense_hat_matrix::{Color, Display, NullSink};
//!
//! let mut display = Display::new(NullSink, Default::default());
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::BLUE, 1))
//!     .draw(&mut display);
//!
//! let _ = Line::new(Point::new(0, 0), Point::new(7, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::RED, 1))
//!     .draw(&mut display);
//!
//! // Push the result to the sink
//! let _ = display.flush();
//! assert_eq!(display.pixel(3, 3).ok(), Some(Color::RED));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::config::MATRIX_SIZE;
use crate::display::Display;
use crate::sink::Sink;

impl<S> DrawTarget for Display<S>
where
    S: Sink,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let orientation = self.orientation();
        let frame = self.frame_mut();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as usize;
            let y = y as usize;

            if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
                continue;
            }

            frame.set(x, y, color, orientation);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.frame_mut().fill(color);
        Ok(())
    }
}

impl<S> OriginDimensions for Display<S>
where
    S: Sink,
{
    fn size(&self) -> Size {
        Size::new(MATRIX_SIZE as u32, MATRIX_SIZE as u32)
    }
}
