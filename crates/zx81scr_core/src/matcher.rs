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

    zx81scr_core::matcher.rs

    Recognize the character in each cell of the 32x24 grid by exact pattern
    lookup against a GlyphTable.
*/

use crate::{
    binarize::MonoBitmap,
    calibrate::CalibrationOffset,
    consts::*,
    glyph_table::{GlyphRecord, GlyphTable},
    pattern::GlyphPattern,
};

/// The outcome of matching a single cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMatch {
    pub pattern: GlyphPattern,
    pub record: Option<GlyphRecord>,
}

impl CellMatch {
    /// The character code for this cell, or [UNMATCHED_CODE] if the pattern was not recognized.
    pub fn code(&self) -> u8 {
        self.record.as_ref().map_or(UNMATCHED_CODE, |r| r.code)
    }

    pub fn is_matched(&self) -> bool {
        self.record.is_some()
    }
}

/// Build the pattern of the 8x8 cell whose top left pixel is at (`origin_x`, `origin_y`) and look
/// it up in `table`.
pub fn match_cell(bitmap: &MonoBitmap, table: &GlyphTable, origin_x: i64, origin_y: i64) -> CellMatch {
    let mut rows = [0u8; 8];
    for (dy, row) in rows.iter_mut().enumerate() {
        *row = bitmap.row_byte(origin_x, origin_y + dy as i64);
    }
    let pattern = GlyphPattern::from_rows(rows);

    CellMatch {
        pattern,
        record: table.lookup_by_pattern(pattern).cloned(),
    }
}

/// Matches for all 768 cells of the screen window, row-major.
#[derive(Clone, Debug)]
pub struct CellGrid {
    cells: Vec<CellMatch>,
}

impl CellGrid {
    /// Match every cell of the screen window located at `offset` within `bitmap`.
    pub fn from_bitmap(bitmap: &MonoBitmap, table: &GlyphTable, offset: CalibrationOffset) -> Self {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for row in 0..CELL_ROWS as i64 {
            for column in 0..CELL_COLUMNS as i64 {
                let x = offset.x as i64 + column * CELL_W as i64;
                let y = offset.y as i64 + row * CELL_H as i64;
                cells.push(match_cell(bitmap, table, x, y));
            }
        }

        let grid = Self { cells };
        if grid.unmatched_count() > 0 {
            log::debug!(
                "CellGrid: {} of {} cells did not match a {} glyph",
                grid.unmatched_count(),
                CELL_COUNT,
                table.model()
            );
        }
        grid
    }

    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> &CellMatch {
        &self.cells[row * CELL_COLUMNS + column]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CellMatch> {
        self.cells.iter()
    }

    /// Iterate over the grid one row of 32 cells at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[CellMatch]> {
        self.cells.chunks(CELL_COLUMNS)
    }

    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(CellMatch::code).collect()
    }

    pub fn unmatched_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_matched()).count()
    }
}
