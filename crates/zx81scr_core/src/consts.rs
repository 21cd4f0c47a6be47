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

    zx81scr_core::consts.rs

    Screen geometry and fixed colors shared by the codec stages.
*/

pub const CELL_W: u32 = 8;
pub const CELL_H: u32 = 8;
pub const CELL_COLUMNS: usize = 32;
pub const CELL_ROWS: usize = 24;
pub const CELL_COUNT: usize = CELL_COLUMNS * CELL_ROWS;

pub const SCREEN_W: u32 = CELL_COLUMNS as u32 * CELL_W; // 256
pub const SCREEN_H: u32 = CELL_ROWS as u32 * CELL_H; // 192

/// One byte per cell, row-major.
pub const CHARACTER_STREAM_SIZE: usize = CELL_COUNT;

/// Code written for cells whose pattern is not in the glyph table.
pub const UNMATCHED_CODE: u8 = 0x3F;
pub const UNMATCHED_GLYPH: char = '?';

/// Bit 7 of a character code selects inverse video.
pub const INVERSE_BIT: u8 = 0b1000_0000;

/// Channel values above this threshold count as light.
pub const LUMA_THRESHOLD: u8 = 127;

pub const PAPER_RGBA: [u8; 4] = [0xCD, 0xCD, 0xCD, 0xFF];
pub const INK_RGBA: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const MARKER_RGBA: [u8; 4] = [0xFF, 0x00, 0x00, 0xFF];

pub const MARKER_OPACITY: f32 = 0.5;
pub const OVERLAY_OPACITY: f32 = 0.9;

// ANSI SGR color pairs (256-color palette) used in transcripts.
pub const SGR_NORMAL: &str = "\x1b[38;5;0m\x1b[48;5;7m";
pub const SGR_INVERSE: &str = "\x1b[38;5;7m\x1b[48;5;0m";
pub const SGR_RESET: &str = "\x1b[0m";
