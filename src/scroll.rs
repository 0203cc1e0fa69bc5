//! Scrolling text state machine
//!
//! [`Scroll`] walks a string one user-perceived character (extended grapheme
//! cluster) at a time and yields the eight glyph columns of each character
//! from left to right. A cluster is drawn with the glyph of its first scalar,
//! so a decomposed `e\u{301}` still scrolls in as one `e`. Feeding each column to
//! [`Display::shift_left`](crate::Display::shift_left) produces a right to left
//! scroll of the whole string.
//!
//! [`Display::show_str`](crate::Display::show_str) drives the iterator with a
//! fixed delay per column. Callers that need to stop early drive it
//! themselves and simply stop at any column boundary.
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::{Color, Display, NullSink, Scroll};
//!
//! let mut display = Display::new(NullSink, Default::default());
//! let mut cancelled = false;
//! for column in Scroll::new("Hi", Color::WHITE, Color::BLACK) {
//!     if cancelled {
//!         break;
//!     }
//!     let _ = display.shift_left(&column);
//!     cancelled = true;
//! }
//! ```

use core::iter::FusedIterator;

use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use crate::color::Color;
use crate::config::MATRIX_SIZE;
use crate::font::{Glyph, first_scalar};
use crate::frame::Line;

/// Iterator over the columns of a scrolling string
#[derive(Clone, Debug)]
pub struct Scroll<'a> {
    clusters: Graphemes<'a>,
    glyph: Glyph,
    column: usize,
    foreground: Color,
    background: Color,
}

impl<'a> Scroll<'a> {
    /// Start scrolling `text` drawn in `foreground` on `background`
    pub fn new(text: &'a str, foreground: Color, background: Color) -> Self {
        Self {
            clusters: text.graphemes(true),
            glyph: Glyph::BLANK,
            column: MATRIX_SIZE,
            foreground,
            background,
        }
    }
}

impl Iterator for Scroll<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        if self.column == MATRIX_SIZE {
            let cluster = self.clusters.next()?;
            self.glyph = first_scalar(cluster).map_or(Glyph::BLANK, Glyph::for_char);
            self.column = 0;
        }
        let line = self
            .glyph
            .column(self.column, self.foreground, self.background);
        self.column += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = MATRIX_SIZE - self.column;
        let (low, high) = self.clusters.size_hint();
        (
            pending + low * MATRIX_SIZE,
            high.and_then(|h| h.checked_mul(MATRIX_SIZE))
                .and_then(|h| h.checked_add(pending)),
        )
    }
}

impl FusedIterator for Scroll<'_> {}
