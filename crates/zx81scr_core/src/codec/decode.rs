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

    zx81scr_core::codec::decode.rs

    Character stream and display file back to raster, then through the
    encoder again so every artifact is regenerated from the same pipeline.
*/

use super::{encode, ConversionResult};
use crate::{
    calibrate::CalibrationOffset,
    consts::*,
    display_file::DisplayFile,
    error::ScrError,
    glyph_table::GlyphTable,
    pattern::GlyphPattern,
    render::{blank_screen, paint_pattern, paint_row_byte},
    RasterImage,
};

/// Paint a screen-sized raster from the pixel plane of a display file. Attributes are ignored.
pub fn raster_from_display_file(df: &DisplayFile) -> RasterImage {
    let mut image = blank_screen();
    for y in 0..SCREEN_H as usize {
        for column in 0..CELL_COLUMNS {
            paint_row_byte(&mut image, column as u32 * CELL_W, y as u32, df.row_byte(y, column));
        }
    }
    image
}

/// Paint a screen-sized raster from 768 row-major character codes. Codes missing from the table
/// are painted as blank paper cells; their number is returned alongside the raster.
pub fn raster_from_character_stream(codes: &[u8], table: &GlyphTable) -> Result<(RasterImage, usize), ScrError> {
    if codes.len() != CHARACTER_STREAM_SIZE {
        return Err(ScrError::InvalidCharacterStreamSize(codes.len()));
    }

    let mut image = blank_screen();
    let mut missing = 0;

    for (i, &code) in codes.iter().enumerate() {
        let pattern = table.lookup_by_code(code).unwrap_or_else(|| {
            log::trace!("raster_from_character_stream(): code {:02X} not in {} table", code, table.model());
            missing += 1;
            GlyphPattern::BLANK
        });
        let x = (i % CELL_COLUMNS) as u32 * CELL_W;
        let y = (i / CELL_COLUMNS) as u32 * CELL_H;
        paint_pattern(&mut image, x, y, pattern);
    }

    Ok((image, missing))
}

/// Decode a 6912 byte display file and regenerate all artifacts from it.
pub fn decode_display_file(bytes: &[u8], table: &GlyphTable) -> Result<ConversionResult, ScrError> {
    let df = DisplayFile::from_bytes(bytes)?;
    let image = raster_from_display_file(&df);
    Ok(encode(&image, CalibrationOffset::new(0, 0), table))
}

/// Decode a 768 byte character stream and regenerate all artifacts from it. Codes that have no
/// pattern in the table count as unmatched cells in the result.
pub fn decode_character_stream(bytes: &[u8], table: &GlyphTable) -> Result<ConversionResult, ScrError> {
    let (image, missing) = raster_from_character_stream(bytes, table)?;
    if missing > 0 {
        log::debug!("decode_character_stream(): {} codes had no {} glyph", missing, table.model());
    }

    let mut result = encode(&image, CalibrationOffset::new(0, 0), table);
    result.unmatched_cells += missing;
    Ok(result)
}
