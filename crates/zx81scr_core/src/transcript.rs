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

    zx81scr_core::transcript.rs

    Build the ANSI colored text transcript of a matched cell grid.
*/

use crate::{consts::*, glyph_table::terminal_glyph, matcher::CellGrid};

/// Render the grid as 24 newline-terminated lines of 32 glyphs, each glyph preceded by its SGR
/// color pair, followed by a reset sequence. Unmatched cells print as `?` in normal video.
pub fn build_transcript(grid: &CellGrid) -> String {
    // Each glyph carries two 10-11 byte escape sequences.
    let mut text = String::with_capacity(CELL_COUNT * 24 + CELL_ROWS + SGR_RESET.len());

    for row in grid.rows() {
        for cell in row {
            match &cell.record {
                Some(record) => text.push_str(&record.terminal_glyph),
                None => text.push_str(&terminal_glyph(0, UNMATCHED_GLYPH)),
            }
        }
        text.push('\n');
    }
    text.push_str(SGR_RESET);
    text
}

/// Strip the SGR escapes from a transcript, leaving plain text lines.
pub fn plain_text(transcript: &str) -> String {
    let mut out = String::with_capacity(transcript.len() / 8);
    let mut chars = transcript.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip to the final byte of the CSI sequence.
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
