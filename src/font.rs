//! 8x8 bitmap font lookup and rasterization
//!
//! Glyphs come from the public-domain font8x8 set. Each glyph is eight bytes,
//! one per row from top to bottom, and bit 0 of a row is its leftmost pixel.
//!
//! A codepoint is looked up in the first table whose range contains it:
//!
//! | Table           | Range             |
//! |-----------------|-------------------|
//! | Basic           | U+0000 - U+007F   |
//! | Extended Latin  | U+00A0 - U+00FF   |
//! | Greek           | U+0390 - U+03C9   |
//! | Box drawing     | U+2500 - U+257F   |
//! | Block elements  | U+2580 - U+259F   |
//! | Hiragana        | U+3040 - U+309F   |
//! | Galactic (SGA)  | U+E541 - U+E55A   |
//!
//! Anything else renders as a blank glyph.
//!
//! ## Example
//!
//! ```
//! use sense_hat_matrix::font::{FontTable, Glyph};
//!
//! assert_eq!(FontTable::for_char('▘'), Some(FontTable::Block));
//! let glyph = Glyph::for_char('▘');
//! assert!(glyph.is_set(0, 0));
//! assert!(!glyph.is_set(4, 0));
//! assert_eq!(Glyph::for_char('Ё'), Glyph::BLANK);
//! ```

use core::ops::RangeInclusive;

use font8x8::{
    BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS, SGA_FONTS,
    UnicodeFonts,
};

use crate::color::Color;
use crate::config::{MATRIX_SIZE, Orientation};
use crate::frame::{Frame, Line};

/// The font tables glyphs are looked up in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontTable {
    /// ASCII, U+0000 to U+007F
    Basic,
    /// Latin-1 supplement, U+00A0 to U+00FF
    Latin,
    /// Greek, U+0390 to U+03C9
    Greek,
    /// Box drawing, U+2500 to U+257F
    Box,
    /// Block elements, U+2580 to U+259F
    Block,
    /// Hiragana, U+3040 to U+309F
    Hiragana,
    /// Standard Galactic Alphabet in the private use area, U+E541 to U+E55A
    Sga,
}

impl FontTable {
    /// All tables in lookup order
    pub const ALL: [Self; 7] = [
        Self::Basic,
        Self::Latin,
        Self::Greek,
        Self::Box,
        Self::Block,
        Self::Hiragana,
        Self::Sga,
    ];

    /// Codepoints covered by this table
    pub const fn range(self) -> RangeInclusive<u32> {
        match self {
            Self::Basic => 0x0000..=0x007F,
            Self::Latin => 0x00A0..=0x00FF,
            Self::Greek => 0x0390..=0x03C9,
            Self::Box => 0x2500..=0x257F,
            Self::Block => 0x2580..=0x259F,
            Self::Hiragana => 0x3040..=0x309F,
            Self::Sga => 0xE541..=0xE55A,
        }
    }

    /// Table whose range contains `c`
    pub fn for_char(c: char) -> Option<Self> {
        let code = c as u32;
        Self::ALL.into_iter().find(|table| table.range().contains(&code))
    }

    fn lookup(self, c: char) -> Option<[u8; 8]> {
        match self {
            Self::Basic => BASIC_FONTS.get(c),
            Self::Latin => LATIN_FONTS.get(c),
            Self::Greek => GREEK_FONTS.get(c),
            Self::Box => BOX_FONTS.get(c),
            Self::Block => BLOCK_FONTS.get(c),
            Self::Hiragana => HIRAGANA_FONTS.get(c),
            Self::Sga => SGA_FONTS.get(c),
        }
    }
}

/// Monochrome 8x8 bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph([u8; MATRIX_SIZE]);

impl Glyph {
    /// Glyph with no pixel set
    pub const BLANK: Self = Self([0; MATRIX_SIZE]);

    /// Wrap raw rows, bit 0 leftmost
    pub const fn from_rows(rows: [u8; MATRIX_SIZE]) -> Self {
        Self(rows)
    }

    /// Look up the glyph for a character, blank if no table has it
    pub fn for_char(c: char) -> Self {
        FontTable::for_char(c)
            .and_then(|table| table.lookup(c))
            .map_or(Self::BLANK, Self)
    }

    /// Raw rows, bit 0 leftmost
    pub const fn rows(&self) -> &[u8; MATRIX_SIZE] {
        &self.0
    }

    /// Whether pixel (x, y) is part of the glyph
    pub const fn is_set(&self, x: usize, y: usize) -> bool {
        (self.0[y] >> x) & 1 == 1
    }

    /// Column `x` colored with `fg` for set and `bg` for unset pixels
    pub fn column(&self, x: usize, fg: Color, bg: Color) -> Line {
        core::array::from_fn(|y| if self.is_set(x, y) { fg } else { bg })
    }

    /// Opaque frame of this glyph placed upright for `orientation`
    pub fn render(&self, fg: Color, bg: Color, orientation: Orientation) -> Frame {
        let mut frame = Frame::filled(bg);
        for y in 0..MATRIX_SIZE {
            for x in 0..MATRIX_SIZE {
                if self.is_set(x, y) {
                    frame.set(x, y, fg, orientation);
                }
            }
        }
        frame
    }
}

/// First scalar of a user-perceived character
///
/// Only one scalar can be drawn; if `cluster` holds more (for example a
/// letter followed by a combining accent) the rest is dropped with a warning.
pub fn first_scalar(cluster: &str) -> Option<char> {
    let mut chars = cluster.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        log::warn!(
            "{:?} has more than one scalar, only U+{:04X} is rendered",
            cluster,
            first as u32
        );
    }
    Some(first)
}
