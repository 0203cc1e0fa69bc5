//! In-place geometric transforms of the native frame
//!
//! Three self-inverse primitives (transpose and the two reflections) are
//! composed into the four supported [`Rotation`]s. All of them work on the
//! native layout and ignore the display orientation: they move pixel data,
//! not the addressing frame.

use crate::config::MATRIX_SIZE;
use crate::frame::Frame;
use crate::rotation::Rotation;

const N: usize = MATRIX_SIZE;

impl Frame {
    /// Swap pixel (x, y) with (y, x)
    pub fn transpose(&mut self) {
        let pixels = self.pixels_mut();
        for y in 0..N {
            for x in 0..y {
                pixels.swap(y * N + x, x * N + y);
            }
        }
    }

    /// Mirror around the vertical axis: swap (x, y) with (N-1-x, y)
    pub fn reflect_vertically(&mut self) {
        let pixels = self.pixels_mut();
        for y in 0..N {
            for x in 0..N / 2 {
                pixels.swap(y * N + x, y * N + (N - 1 - x));
            }
        }
    }

    /// Mirror around the horizontal axis: swap (x, y) with (x, N-1-y)
    pub fn reflect_horizontally(&mut self) {
        let pixels = self.pixels_mut();
        for y in 0..N / 2 {
            for x in 0..N {
                pixels.swap(y * N + x, (N - 1 - y) * N + x);
            }
        }
    }

    /// Rotate the picture by a multiple of a quarter turn
    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Rotate0 => {}
            Rotation::Rotate90 => {
                self.transpose();
                self.reflect_horizontally();
            }
            Rotation::Rotate180 => {
                self.reflect_horizontally();
                self.reflect_vertically();
            }
            Rotation::Rotate270 => {
                self.transpose();
                self.reflect_vertically();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::config::Orientation;

    /// Every pixel distinct so any misplaced swap shows up
    fn gradient() -> Frame {
        let mut frame = Frame::new();
        for y in 0..N {
            for x in 0..N {
                frame.set_absolute(x, y, Color::from_raw((y * N + x) as u16 + 1));
            }
        }
        frame
    }

    #[test]
    fn test_transpose() {
        let mut frame = gradient();
        frame.transpose();
        assert_eq!(frame.get_absolute(1, 0), gradient().get_absolute(0, 1));
        assert_eq!(frame.get_absolute(3, 3), gradient().get_absolute(3, 3));
        frame.transpose();
        assert_eq!(frame, gradient());
    }

    #[test]
    fn test_reflect_vertically() {
        let mut frame = gradient();
        frame.reflect_vertically();
        assert_eq!(frame.get_absolute(0, 2), gradient().get_absolute(7, 2));
        frame.reflect_vertically();
        assert_eq!(frame, gradient());
    }

    #[test]
    fn test_reflect_horizontally() {
        let mut frame = gradient();
        frame.reflect_horizontally();
        assert_eq!(frame.get_absolute(2, 0), gradient().get_absolute(2, 7));
        frame.reflect_horizontally();
        assert_eq!(frame, gradient());
    }

    #[test]
    fn test_rotate90_turns_counter_clockwise() {
        let mut frame = Frame::new();
        frame.set_absolute(7, 0, Color::RED);
        frame.rotate(Rotation::Rotate90);
        assert_eq!(frame.get_absolute(0, 0), Color::RED);
        frame.rotate(Rotation::Rotate90);
        assert_eq!(frame.get_absolute(0, 7), Color::RED);
    }

    #[test]
    fn test_rotate_then_inverse_restores() {
        for quarters in 0..4 {
            let rotation = Rotation::from_quarter_turns(quarters);
            let mut frame = gradient();
            frame.rotate(rotation);
            frame.rotate(rotation.inverse());
            assert_eq!(frame, gradient(), "{rotation:?}");
        }
    }

    #[test]
    fn test_four_quarter_turns_restore() {
        let mut frame = gradient();
        for _ in 0..4 {
            frame.rotate(Rotation::Rotate90);
        }
        assert_eq!(frame, gradient());
    }

    #[test]
    fn test_rotation_between_orientations_preserves_logical_content() {
        for from in Orientation::ALL {
            for to in Orientation::ALL {
                let mut frame = Frame::new();
                frame.set(5, 6, Color::RED, from);
                frame.set(0, 1, Color::GREEN, from);
                frame.rotate(Rotation::between(from, to));
                assert_eq!(frame.get(5, 6, to), Color::RED, "{from:?} -> {to:?}");
                assert_eq!(frame.get(0, 1, to), Color::GREEN, "{from:?} -> {to:?}");
            }
        }
    }
}
