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

    zx81scr_core::display_file.rs

    Address arithmetic and container for the 6912 byte display file image.

    The display file holds a 6144 byte pixel plane followed by a 768 byte
    attribute plane. Pixel rows are not stored linearly: the 192 rows are
    split into three 64 row thirds, and within a third all first pixel rows
    of the 8 character rows come first, then all second pixel rows, and so
    on. Each stored row is 32 bytes, one per character column.

*/

use crate::{consts::*, error::ScrError};

pub const PIXEL_PLANE_SIZE: usize = 6144;
pub const ATTRIBUTE_PLANE_SIZE: usize = 768;
pub const DISPLAY_FILE_SIZE: usize = PIXEL_PLANE_SIZE + ATTRIBUTE_PLANE_SIZE;

/// Bytes per stored pixel row.
pub const ROW_STRIDE: usize = CELL_COLUMNS;

/// Black ink on white paper, no bright, no flash.
pub const MONOCHROME_ATTRIBUTE: u8 = 56;

/// Return the offset into the pixel plane of pixel row `subrow` (0..8) of character row `row`
/// (0..24). The caller guarantees both ranges.
#[inline]
pub const fn cell_address(row: usize, subrow: usize) -> usize {
    let hi = (row & 0b0001_1000) + subrow;
    let lo = (row << 5) & 0b1110_0000;
    hi * 256 + lo
}

/// Return the offset into the pixel plane of absolute pixel row `y` (0..192).
#[inline]
pub const fn line_address(y: usize) -> usize {
    cell_address(y / CELL_H as usize, y % CELL_H as usize)
}

/// An owned display file image, always exactly [DISPLAY_FILE_SIZE] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct DisplayFile {
    bytes: Box<[u8; DISPLAY_FILE_SIZE]>,
}

impl Default for DisplayFile {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DisplayFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayFile").field("len", &self.bytes.len()).finish()
    }
}

impl DisplayFile {
    /// A blank display file: empty pixel plane, monochrome attributes.
    pub fn new() -> Self {
        let mut bytes = Box::new([0u8; DISPLAY_FILE_SIZE]);
        bytes[PIXEL_PLANE_SIZE..].fill(MONOCHROME_ATTRIBUTE);
        Self { bytes }
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, ScrError> {
        let bytes: Box<[u8; DISPLAY_FILE_SIZE]> = data
            .to_vec()
            .into_boxed_slice()
            .try_into()
            .map_err(|_| ScrError::InvalidDisplayFileSize(data.len()))?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    pub fn pixel_plane(&self) -> &[u8] {
        &self.bytes[..PIXEL_PLANE_SIZE]
    }

    pub fn attribute_plane(&self) -> &[u8] {
        &self.bytes[PIXEL_PLANE_SIZE..]
    }

    /// Read the 8 pixel bits of absolute row `y` in character column `column`.
    #[inline]
    pub fn row_byte(&self, y: usize, column: usize) -> u8 {
        self.bytes[line_address(y) + column]
    }

    #[inline]
    pub fn set_row_byte(&mut self, y: usize, column: usize, byte: u8) {
        self.bytes[line_address(y) + column] = byte;
    }
}
