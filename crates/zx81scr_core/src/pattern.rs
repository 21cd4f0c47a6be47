/*
    zx81scr

    Copyright 2022-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------

    zx81scr_core::pattern.rs

    Implements GlyphPattern, the 8x8 monochrome bit pattern of a character cell.
*/

use std::{fmt::Display, str::FromStr};

/// An 8x8 monochrome bit pattern. Row 0 is stored in the most significant byte and the leftmost
/// pixel of each row in the most significant bit of its byte, so the value reads the same as the
/// 64 character '0'/'1' string form, row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlyphPattern(pub u64);

impl GlyphPattern {
    pub const BLANK: GlyphPattern = GlyphPattern(0);

    pub const fn from_rows(rows: [u8; 8]) -> Self {
        GlyphPattern(u64::from_be_bytes(rows))
    }

    pub const fn rows(&self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn row(&self, y: usize) -> u8 {
        (self.0 >> ((7 - y) * 8)) as u8
    }

    /// Return the pixel at (`x`, `y`) within the cell. `true` is ink.
    #[inline]
    pub const fn pixel(&self, x: usize, y: usize) -> bool {
        self.0 & (1 << (63 - (y * 8 + x))) != 0
    }

    pub const fn inverse(&self) -> Self {
        GlyphPattern(!self.0)
    }
}

impl From<u64> for GlyphPattern {
    fn from(value: u64) -> Self {
        GlyphPattern(value)
    }
}

impl From<[u8; 8]> for GlyphPattern {
    fn from(rows: [u8; 8]) -> Self {
        GlyphPattern::from_rows(rows)
    }
}

impl Display for GlyphPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:064b}", self.0)
    }
}

impl FromStr for GlyphPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 || !s.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(format!("Invalid glyph pattern string: '{}'. Expected 64 '0'/'1' characters", s));
        }
        u64::from_str_radix(s, 2).map(GlyphPattern).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER_A: [u8; 8] = [0x00, 0x3C, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x00];

    #[test]
    fn rows_are_msb_first() {
        let p = GlyphPattern::from_rows(LETTER_A);
        assert_eq!(p.rows(), LETTER_A);
        assert_eq!(p.row(1), 0x3C);
        assert!(!p.pixel(0, 1));
        assert!(!p.pixel(1, 1));
        assert!(p.pixel(2, 1));
        assert!(p.pixel(1, 2));
        assert!(!p.pixel(0, 0));
    }

    #[test]
    fn string_form_is_row_major() {
        let p = GlyphPattern::from_rows(LETTER_A);
        let s = p.to_string();
        assert_eq!(s.len(), 64);
        assert_eq!(&s[0..8], "00000000");
        assert_eq!(&s[8..16], "00111100");
        assert_eq!(s.parse::<GlyphPattern>(), Ok(p));
    }

    #[test]
    fn bad_strings_are_rejected() {
        assert!("0101".parse::<GlyphPattern>().is_err());
        assert!("2".repeat(64).parse::<GlyphPattern>().is_err());
    }

    #[test]
    fn inverse_complements_every_pixel() {
        let p = GlyphPattern::from_rows(LETTER_A);
        assert_eq!(p.0.count_ones() + p.inverse().0.count_ones(), 64);
        assert_eq!(GlyphPattern::BLANK.inverse(), GlyphPattern(u64::MAX));
    }
}
