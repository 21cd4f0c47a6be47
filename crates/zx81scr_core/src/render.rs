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

    zx81scr_core::render.rs

    Drawing routines for the converter's raster artifacts: the cleaned
    two-color image, the calibration overlay, and painting glyph patterns
    back into a raster for the decode paths.
*/

use std::io::Cursor;

use image::{ImageFormat, Rgba};

use crate::{binarize::MonoBitmap, calibrate::CalibrationOffset, consts::*, error::ScrError, pattern::GlyphPattern, RasterImage};

#[inline]
fn bit_color(ink: bool) -> Rgba<u8> {
    if ink {
        Rgba(INK_RGBA)
    }
    else {
        Rgba(PAPER_RGBA)
    }
}

/// A blank screen-sized raster filled with paper.
pub fn blank_screen() -> RasterImage {
    RasterImage::from_pixel(SCREEN_W, SCREEN_H, Rgba(PAPER_RGBA))
}

/// Render the binarized bitmap with the fixed ink and paper colors, at the bitmap's size.
pub fn cleaned_image(bitmap: &MonoBitmap) -> RasterImage {
    let dims = bitmap.dimensions();
    RasterImage::from_fn(dims.w, dims.h, |x, y| bit_color(bitmap.get(x as i64, y as i64)))
}

/// Multiply-blend `src` over `dst` at the given source opacity. Alpha is left untouched.
#[inline]
fn blend_multiply(dst: &mut Rgba<u8>, src: &Rgba<u8>, opacity: f32) {
    for c in 0..3 {
        let d = dst.0[c] as f32;
        let multiplied = d * src.0[c] as f32 / 255.0;
        dst.0[c] = (d * (1.0 - opacity) + multiplied * opacity).round() as u8;
    }
}

/// Composite a translucent marker rectangle the size of the screen window over a copy of
/// `image` at `offset`, so the calibration can be checked by eye. The portion of the marker
/// outside the raster is clipped.
pub fn overlay_image(image: &RasterImage, offset: CalibrationOffset) -> RasterImage {
    let mut overlay = image.clone();
    let marker = Rgba(MARKER_RGBA);

    for pixel in overlay.pixels_mut() {
        pixel.0[3] = (pixel.0[3] as f32 * OVERLAY_OPACITY).round() as u8;
    }

    let x0 = offset.x.max(0) as u32;
    let y0 = offset.y.max(0) as u32;
    let x1 = (offset.x as i64 + SCREEN_W as i64).clamp(0, image.width() as i64) as u32;
    let y1 = (offset.y as i64 + SCREEN_H as i64).clamp(0, image.height() as i64) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            blend_multiply(overlay.get_pixel_mut(x, y), &marker, MARKER_OPACITY);
        }
    }
    overlay
}

/// Paint an 8x8 pattern into `image` with its top left corner at (`x`, `y`).
pub fn paint_pattern(image: &mut RasterImage, x: u32, y: u32, pattern: GlyphPattern) {
    for dy in 0..CELL_H {
        for dx in 0..CELL_W {
            image.put_pixel(x + dx, y + dy, bit_color(pattern.pixel(dx as usize, dy as usize)));
        }
    }
}

/// Paint one row byte (8 pixels, MSB leftmost) into `image` starting at (`x`, `y`).
pub fn paint_row_byte(image: &mut RasterImage, x: u32, y: u32, byte: u8) {
    for dx in 0..8 {
        image.put_pixel(x + dx, y, bit_color(byte & (0x80 >> dx) != 0));
    }
}

/// Encode a raster as PNG into an in-memory buffer.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, ScrError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(ScrError::ImageEncode)?;
    Ok(buf.into_inner())
}

/// Decode a PNG, BMP or GIF from memory into an RGBA raster.
pub fn decode_raster(bytes: &[u8]) -> Result<RasterImage, ScrError> {
    let image = image::load_from_memory(bytes).map_err(ScrError::UndecodableRaster)?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaned_image_uses_two_colors() {
        let src = RasterImage::from_fn(10, 4, |x, _| Rgba([x as u8 * 25, 200, 200, 255]));
        let cleaned = cleaned_image(&MonoBitmap::from_raster(&src));
        assert_eq!(cleaned.dimensions(), (10, 4));
        for (x, _, p) in cleaned.enumerate_pixels() {
            let expected = if x as u8 * 25 > LUMA_THRESHOLD { PAPER_RGBA } else { INK_RGBA };
            assert_eq!(p.0, expected);
        }
    }

    #[test]
    fn overlay_tints_only_the_window() {
        let src = RasterImage::from_pixel(320, 240, Rgba([200, 200, 200, 255]));
        let overlay = overlay_image(&src, CalibrationOffset::new(32, 24));
        assert_eq!(overlay.dimensions(), (320, 240));

        let outside = overlay.get_pixel(0, 0).0;
        assert_eq!(outside, [200, 200, 200, 230]);

        let inside = overlay.get_pixel(100, 100).0;
        assert_eq!(inside, [200, 100, 100, 230]);

        // Last pixel of the window and first pixel past it.
        assert_eq!(overlay.get_pixel(287, 215).0[1], 100);
        assert_eq!(overlay.get_pixel(288, 215).0[1], 200);
    }

    #[test]
    fn overlay_clips_out_of_range_window() {
        let src = RasterImage::from_pixel(100, 50, Rgba([255, 255, 255, 255]));
        let overlay = overlay_image(&src, CalibrationOffset::new(-78, -71));
        assert_eq!(overlay.dimensions(), (100, 50));
        assert_eq!(overlay.get_pixel(0, 0).0[1], 128);
    }

    #[test]
    fn paint_and_png_round_trip() {
        let mut image = blank_screen();
        let pattern = GlyphPattern::from_rows([0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF]);
        paint_pattern(&mut image, 8, 16, pattern);
        paint_row_byte(&mut image, 248, 191, 0x01);

        let png = encode_png(&image).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = decode_raster(&png).unwrap();
        assert_eq!(decoded, image);
        assert_eq!(decoded.get_pixel(8, 16).0, INK_RGBA);
        assert_eq!(decoded.get_pixel(9, 17).0, PAPER_RGBA);
        assert_eq!(decoded.get_pixel(255, 191).0, INK_RGBA);
    }

    #[test]
    fn garbage_is_undecodable() {
        match decode_raster(b"definitely not an image") {
            Err(ScrError::UndecodableRaster(_)) => {}
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }
    }
}
