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

    zx81scr_core::codec::encode.rs

    Raster to character stream, display file and transcript.
*/

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use zx81scr_common::VideoDimensions;

use super::ConversionResult;
use crate::{
    binarize::MonoBitmap,
    calibrate::{calibrate, effective_dimensions, CalibrationOffset},
    consts::*,
    display_file::DisplayFile,
    glyph_table::GlyphTable,
    matcher::CellGrid,
    render::{cleaned_image, overlay_image},
    transcript::build_transcript,
    RasterImage,
};

/// Write the row bytes of every matched cell into a display file at their interleaved addresses.
fn build_display_file(grid: &CellGrid) -> DisplayFile {
    let mut df = DisplayFile::new();
    for row in 0..CELL_ROWS {
        for column in 0..CELL_COLUMNS {
            let pattern = grid.cell(row, column).pattern;
            for subrow in 0..CELL_H as usize {
                df.set_row_byte(row * CELL_H as usize + subrow, column, pattern.row(subrow));
            }
        }
    }
    df
}

/// Convert a raster to all output forms.
///
/// If `offset` is negative on an axis, the screen window is located automatically on that axis.
/// Rasters larger than the calibration threshold are first scaled to their canonical size with
/// nearest-neighbor sampling, and all outputs are derived from the scaled raster.
pub fn encode(image: &RasterImage, offset: CalibrationOffset, table: &GlyphTable) -> ConversionResult {
    let dims = VideoDimensions::new(image.width(), image.height());
    let eff = effective_dimensions(dims);

    let working: Cow<RasterImage> = if eff != dims {
        log::debug!("encode(): scaling raster {} to {}", dims, eff);
        Cow::Owned(imageops::resize(image, eff.w, eff.h, FilterType::Nearest))
    }
    else {
        Cow::Borrowed(image)
    };

    let used_offset = calibrate(dims, offset);

    let bitmap = MonoBitmap::from_raster(&working);
    let grid = CellGrid::from_bitmap(&bitmap, table, used_offset);

    let result = ConversionResult {
        cleaned_image: cleaned_image(&bitmap),
        overlay_image: overlay_image(&working, used_offset),
        transcript: build_transcript(&grid),
        character_stream: grid.codes(),
        display_file: build_display_file(&grid),
        used_offset,
        unmatched_cells: grid.unmatched_count(),
    };

    log::debug!(
        "encode(): {} model, offset {}, {} unmatched cells",
        table.model(),
        used_offset,
        result.unmatched_cells
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display_file::{MONOCHROME_ATTRIBUTE, PIXEL_PLANE_SIZE},
        glyph_table::{BLANK_CODE, ZX81_FONT},
        pattern::GlyphPattern,
        render::{blank_screen, paint_pattern},
        transcript::plain_text,
    };
    use image::Rgba;
    use zx81scr_common::MachineModel;

    #[test]
    fn blank_screen_encodes_to_blank_code() {
        let table = GlyphTable::new(MachineModel::Zx81);
        let r = encode(&blank_screen(), CalibrationOffset::AUTO, &table);

        assert_eq!(r.used_offset, CalibrationOffset::new(0, 0));
        assert_eq!(r.character_stream.len(), CHARACTER_STREAM_SIZE);
        assert!(r.character_stream.iter().all(|&c| c == BLANK_CODE));
        assert!(r.display_file.pixel_plane().iter().all(|&b| b == 0));
        assert_eq!(r.display_file.pixel_plane().len(), PIXEL_PLANE_SIZE);
        assert!(r.display_file.attribute_plane().iter().all(|&b| b == MONOCHROME_ATTRIBUTE));
        assert!(!r.is_partial());
    }

    #[test]
    fn text_is_recognized_and_interleaved() {
        let table = GlyphTable::new(MachineModel::Zx81);
        let mut image = RasterImage::from_pixel(320, 240, Rgba(PAPER_RGBA));
        // "HI" on character row 9, columns 4 and 5, inside a 32x24 border.
        paint_pattern(&mut image, 32 + 4 * 8, 24 + 9 * 8, GlyphPattern::from_rows(ZX81_FONT[45]));
        paint_pattern(&mut image, 32 + 5 * 8, 24 + 9 * 8, GlyphPattern::from_rows(ZX81_FONT[46]));

        let r = encode(&image, CalibrationOffset::AUTO, &table);
        assert_eq!(r.used_offset, CalibrationOffset::new(32, 24));
        assert_eq!(r.character_stream[9 * 32 + 4], 45);
        assert_eq!(r.character_stream[9 * 32 + 5], 46);

        // Pixel row 1 of character row 9: third 1, row-in-third 1, subrow 1.
        let addr = 0x0800 + 0x0100 + 0x20;
        assert_eq!(r.display_file.as_bytes()[addr + 4], ZX81_FONT[45][1]);
        assert_eq!(r.display_file.as_bytes()[addr + 5], ZX81_FONT[46][1]);

        let plain = plain_text(&r.transcript);
        assert_eq!(&plain.lines().nth(9).unwrap()[4..6], "HI");
    }

    #[test]
    fn one_bad_cell_is_partial() {
        let table = GlyphTable::new(MachineModel::Zx81);
        let mut image = blank_screen();
        image.put_pixel(100, 100, Rgba(INK_RGBA));

        let r = encode(&image, CalibrationOffset::AUTO, &table);
        assert!(r.is_partial());
        assert_eq!(r.unmatched_cells, 1);
        assert_eq!(r.character_stream[12 * 32 + 12], UNMATCHED_CODE);
        assert_eq!(r.character_stream.iter().filter(|&&c| c == UNMATCHED_CODE).count(), 1);
        assert_eq!(r.display_file.as_bytes().len(), 6912);
        assert_eq!(r.cleaned_image.dimensions(), (256, 192));
        assert_eq!(r.overlay_image.dimensions(), (256, 192));
        assert!(plain_text(&r.transcript).contains('?'));
        // The stray pixel still lands in the display file.
        assert_eq!(r.display_file.row_byte(100, 12), 0b0000_1000);
    }

    #[test]
    fn large_capture_is_scaled_before_matching() {
        let table = GlyphTable::new(MachineModel::Zx81);
        let mut small = RasterImage::from_pixel(320, 240, Rgba(PAPER_RGBA));
        paint_pattern(&mut small, 32, 24, GlyphPattern::from_rows(ZX81_FONT[52]));
        let large = RasterImage::from_fn(640, 480, |x, y| *small.get_pixel(x / 2, y / 2));

        let r = encode(&large, CalibrationOffset::AUTO, &table);
        assert_eq!(r.used_offset, CalibrationOffset::new(32, 24));
        assert_eq!(r.character_stream[0], 52);
        assert_eq!(r.unmatched_cells, 0);
        assert_eq!(r.cleaned_image.dimensions(), (320, 240));
    }

    #[test]
    fn explicit_offset_is_used() {
        let table = GlyphTable::new(MachineModel::Zx80);
        let image = RasterImage::from_pixel(300, 200, Rgba(PAPER_RGBA));
        let r = encode(&image, CalibrationOffset::new(10, 2), &table);
        assert_eq!(r.used_offset, CalibrationOffset::new(10, 2));
        assert!(!r.is_partial());
    }
}
