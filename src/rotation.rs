//! Coordinate mapping and rotation utilities
//!
//! This module maps logical (x, y) coordinates to indices in the native
//! framebuffer for every [`Orientation`], and describes the four supported
//! buffer rotations.
//!
//! The native buffer is row-major: `index = y * 8 + x`.
//!
//! ## Orientation Mapping
//!
//! | Orientation | Native index            |
//! |-------------|-------------------------|
//! | Up          | `y*N + x`               |
//! | Right       | `x*N + (N-y-1)`         |
//! | Down        | `(N-y-1)*N + (N-x-1)`   |
//! | Left        | `(N-x-1)*N + y`         |
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::{rotation::apply_orientation, Orientation};
//!
//! // Logical (5, 6) on a board turned right lands on native (1, 5)
//! assert_eq!(apply_orientation(5, 6, Orientation::Right), 5 * 8 + 1);
//! ```

use core::f64::consts::{PI, TAU};

use crate::config::{MATRIX_SIZE, Orientation};

/// Tolerance in radians when matching an angle to a quarter turn
pub const ANGLE_EPSILON: f64 = 1e-4;

/// Map logical coordinates to a native buffer index
///
/// Coordinates must be in `0..MATRIX_SIZE`; callers validate them.
pub const fn apply_orientation(x: usize, y: usize, orientation: Orientation) -> usize {
    const N: usize = MATRIX_SIZE;
    match orientation {
        Orientation::Up => y * N + x,
        Orientation::Right => x * N + (N - y - 1),
        Orientation::Down => (N - y - 1) * N + (N - x - 1),
        Orientation::Left => (N - x - 1) * N + y,
    }
}

/// In-place buffer rotation
///
/// Positive angles turn the picture counter-clockwise: with `Rotate90` the
/// native top-right pixel moves to the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Quarter turn (π/2)
    Rotate90,
    /// Half turn (π)
    Rotate180,
    /// Three quarter turns (3π/2)
    Rotate270,
}

impl Rotation {
    /// Rotation by a number of quarter turns, taken modulo 4
    pub const fn from_quarter_turns(quarters: u8) -> Self {
        match quarters % 4 {
            0 => Self::Rotate0,
            1 => Self::Rotate90,
            2 => Self::Rotate180,
            _ => Self::Rotate270,
        }
    }

    /// Number of quarter turns, 0 to 3
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 1,
            Self::Rotate180 => 2,
            Self::Rotate270 => 3,
        }
    }

    /// Rotation undoing this one
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    /// Rotation that re-renders content drawn in `from` so it reads the
    /// same through `to`
    pub const fn between(from: Orientation, to: Orientation) -> Self {
        Self::from_quarter_turns(from.quarter_turns() + 4 - to.quarter_turns())
    }

    /// Match an angle in radians to a quarter turn
    ///
    /// The angle is normalized modulo 2π and compared with a tolerance of
    /// [`ANGLE_EPSILON`], so accumulated floating point drift is absorbed.
    /// Returns `None` for anything else.
    ///
    /// ```
    /// use core::f64::consts::PI;
    /// use sense_hat_matrix::Rotation;
    ///
    /// assert_eq!(Rotation::from_radians(PI / 2.0), Some(Rotation::Rotate90));
    /// assert_eq!(Rotation::from_radians(-PI / 2.0), Some(Rotation::Rotate270));
    /// assert_eq!(Rotation::from_radians(0.3), None);
    /// ```
    pub fn from_radians(angle: f64) -> Option<Self> {
        if !angle.is_finite() {
            return None;
        }
        let mut normalized = angle % TAU;
        if normalized < 0.0 {
            normalized += TAU;
        }

        let near = |target: f64| {
            let diff = normalized - target;
            diff < ANGLE_EPSILON && diff > -ANGLE_EPSILON
        };

        if near(0.0) || near(TAU) {
            Some(Self::Rotate0)
        } else if near(PI / 2.0) {
            Some(Self::Rotate90)
        } else if near(PI) {
            Some(Self::Rotate180)
        } else if near(3.0 * PI / 2.0) {
            Some(Self::Rotate270)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_is_row_major() {
        assert_eq!(apply_orientation(0, 0, Orientation::Up), 0);
        assert_eq!(apply_orientation(7, 0, Orientation::Up), 7);
        assert_eq!(apply_orientation(0, 1, Orientation::Up), 8);
        assert_eq!(apply_orientation(5, 6, Orientation::Up), 53);
    }

    #[test]
    fn test_turned_orientations() {
        // logical (5, 6) lands on native (1, 5), (2, 1) and (6, 2)
        assert_eq!(apply_orientation(5, 6, Orientation::Right), 5 * 8 + 1);
        assert_eq!(apply_orientation(5, 6, Orientation::Down), 8 + 2);
        assert_eq!(apply_orientation(5, 6, Orientation::Left), 2 * 8 + 6);
    }

    #[test]
    fn test_every_orientation_is_a_bijection() {
        for orientation in Orientation::ALL {
            let mut seen = [false; MATRIX_SIZE * MATRIX_SIZE];
            for y in 0..MATRIX_SIZE {
                for x in 0..MATRIX_SIZE {
                    let index = apply_orientation(x, y, orientation);
                    assert!(!seen[index], "{orientation:?} maps twice to {index}");
                    seen[index] = true;
                }
            }
        }
    }

    #[test]
    fn test_from_radians_quarters() {
        assert_eq!(Rotation::from_radians(0.0), Some(Rotation::Rotate0));
        assert_eq!(Rotation::from_radians(TAU), Some(Rotation::Rotate0));
        assert_eq!(Rotation::from_radians(PI), Some(Rotation::Rotate180));
        assert_eq!(Rotation::from_radians(-PI), Some(Rotation::Rotate180));
        assert_eq!(Rotation::from_radians(3.0 * PI / 2.0), Some(Rotation::Rotate270));
        assert_eq!(Rotation::from_radians(5.0 * PI / 2.0), Some(Rotation::Rotate90));
    }

    #[test]
    fn test_from_radians_absorbs_drift() {
        let mut angle = 0.0;
        for i in 0..400u32 {
            assert_eq!(
                Rotation::from_radians(angle),
                Some(Rotation::from_quarter_turns((i % 4) as u8))
            );
            angle += PI / 2.0;
        }
        assert_eq!(Rotation::from_radians(PI / 2.0 + 5e-5), Some(Rotation::Rotate90));
        assert_eq!(Rotation::from_radians(TAU - 5e-5), Some(Rotation::Rotate0));
    }

    #[test]
    fn test_from_radians_rejects_other_angles() {
        assert_eq!(Rotation::from_radians(PI / 4.0), None);
        assert_eq!(Rotation::from_radians(PI / 2.0 + 1e-3), None);
        assert_eq!(Rotation::from_radians(f64::NAN), None);
        assert_eq!(Rotation::from_radians(f64::INFINITY), None);
    }

    #[test]
    fn test_inverse_and_between() {
        assert_eq!(Rotation::Rotate90.inverse(), Rotation::Rotate270);
        assert_eq!(Rotation::Rotate0.inverse(), Rotation::Rotate0);
        assert_eq!(Rotation::Rotate180.inverse(), Rotation::Rotate180);
        assert_eq!(
            Rotation::between(Orientation::Up, Orientation::Right),
            Rotation::Rotate270
        );
        assert_eq!(
            Rotation::between(Orientation::Up, Orientation::Left),
            Rotation::Rotate90
        );
        assert_eq!(
            Rotation::between(Orientation::Right, Orientation::Right),
            Rotation::Rotate0
        );
    }
}
