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

    zx81scr_core::glyph_table::mod.rs

    Implements the GlyphTable, a fixed mapping between 8x8 bit patterns and
    character codes for one machine model.

*/

mod charset;

use zx81scr_common::{MachineModel, ScrHashMap};

use crate::{consts::*, pattern::GlyphPattern};
pub use charset::{ZX80_TO_ZX81, ZX81_FONT, ZX81_GLYPHS};

/// Number of glyphs in a ROM character set. Codes `0..GLYPH_COUNT` are normal video, codes
/// `INVERSE_BIT..INVERSE_BIT + GLYPH_COUNT` are the same glyphs in inverse video.
pub const GLYPH_COUNT: usize = 64;

/// The character code of the blank (space) glyph.
pub const BLANK_CODE: u8 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRecord {
    pub code: u8,
    /// Printable representation of the glyph.
    pub glyph: char,
    /// The glyph wrapped in an ANSI color pair for terminal display. Inverse video codes are
    /// drawn light-on-dark.
    pub terminal_glyph: String,
}

impl GlyphRecord {
    pub fn new(code: u8, glyph: char) -> Self {
        Self {
            code,
            glyph,
            terminal_glyph: terminal_glyph(code, glyph),
        }
    }

    pub fn is_inverse(&self) -> bool {
        self.code & INVERSE_BIT != 0
    }
}

/// Wrap `glyph` in the SGR color pair selected by the inverse video bit of `code`.
pub fn terminal_glyph(code: u8, glyph: char) -> String {
    let sgr = if code & INVERSE_BIT != 0 { SGR_INVERSE } else { SGR_NORMAL };
    format!("{sgr}{glyph}")
}

/// A read-only bidirectional lookup between glyph patterns and character codes.
///
/// A table is built once per model and shared by reference; it has no mutation API. Both
/// directions are hash lookups. The reverse index is built at construction time: when several
/// patterns share a code, the pattern that appears first in the charset definition is the one
/// returned by [GlyphTable::lookup_by_code].
#[derive(Clone, Debug)]
pub struct GlyphTable {
    model: MachineModel,
    by_pattern: ScrHashMap<GlyphPattern, GlyphRecord>,
    by_code: ScrHashMap<u8, GlyphPattern>,
}

impl GlyphTable {
    /// Build the table for the given machine model from its embedded character set.
    pub fn new(model: MachineModel) -> Self {
        let entries: Vec<(GlyphPattern, u8, char)> = match model {
            MachineModel::Zx81 => (0..GLYPH_COUNT)
                .map(|code| (GlyphPattern::from_rows(ZX81_FONT[code]), code as u8, ZX81_GLYPHS[code]))
                .collect(),
            MachineModel::Zx80 => ZX80_TO_ZX81
                .iter()
                .enumerate()
                .map(|(code, &idx)| {
                    (
                        GlyphPattern::from_rows(ZX81_FONT[idx as usize]),
                        code as u8,
                        ZX81_GLYPHS[idx as usize],
                    )
                })
                .collect(),
        };

        // Normal video glyphs first, then their inverse video counterparts.
        let inverse = entries
            .iter()
            .map(|&(pattern, code, glyph)| (pattern.inverse(), code | INVERSE_BIT, glyph))
            .collect::<Vec<_>>();

        Self::from_entries(model, entries.into_iter().chain(inverse))
    }

    /// Build a table from an explicit list of entries. Later entries never replace an earlier
    /// pattern, and the first pattern seen for a code becomes that code's reverse lookup.
    pub fn from_entries<I>(model: MachineModel, entries: I) -> Self
    where
        I: IntoIterator<Item = (GlyphPattern, u8, char)>,
    {
        let mut by_pattern = ScrHashMap::default();
        let mut by_code = ScrHashMap::default();

        for (pattern, code, glyph) in entries {
            if by_pattern.contains_key(&pattern) {
                log::warn!("GlyphTable({}): duplicate pattern {} ignored for code {}", model, pattern, code);
                continue;
            }
            by_pattern.insert(pattern, GlyphRecord::new(code, glyph));
            by_code.entry(code).or_insert(pattern);
        }

        log::debug!(
            "GlyphTable({}): {} patterns, {} codes",
            model,
            by_pattern.len(),
            by_code.len()
        );

        Self {
            model,
            by_pattern,
            by_code,
        }
    }

    pub fn model(&self) -> MachineModel {
        self.model
    }

    pub fn len(&self) -> usize {
        self.by_pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pattern.is_empty()
    }

    pub fn lookup_by_pattern(&self, pattern: GlyphPattern) -> Option<&GlyphRecord> {
        self.by_pattern.get(&pattern)
    }

    pub fn lookup_by_code(&self, code: u8) -> Option<GlyphPattern> {
        self.by_code.get(&code).copied()
    }

    /// All character codes present in the table, in ascending order.
    pub fn codes(&self) -> Vec<u8> {
        let mut codes: Vec<u8> = self.by_code.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}
