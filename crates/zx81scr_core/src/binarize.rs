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

    zx81scr_core::binarize.rs

    Reduce a color raster to ink/paper bits with a fixed luminance threshold.
*/

use image::Rgba;
use zx81scr_common::VideoDimensions;

use crate::{consts::*, RasterImage};

/// Return true (ink) unless all three color channels are above the threshold. Alpha is ignored.
#[inline]
pub fn is_ink(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    !(r > LUMA_THRESHOLD && g > LUMA_THRESHOLD && b > LUMA_THRESHOLD)
}

/// Sample the pixel at (`x`, `y`). Coordinates outside the raster read as paper.
#[inline]
pub fn sample(image: &RasterImage, x: i64, y: i64) -> bool {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return false;
    }
    is_ink(image.get_pixel(x as u32, y as u32))
}

/// A monochrome bitmap, one bool per pixel, row-major. Built once per conversion so the cleaned
/// image and the cell patterns are derived from the same per-pixel decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonoBitmap {
    dims: VideoDimensions,
    bits: Vec<bool>,
}

impl MonoBitmap {
    pub fn from_raster(image: &RasterImage) -> Self {
        let dims = VideoDimensions::new(image.width(), image.height());
        let bits = image.pixels().map(is_ink).collect();
        Self { dims, bits }
    }

    pub fn dimensions(&self) -> VideoDimensions {
        self.dims
    }

    /// Return the bit at (`x`, `y`). Coordinates outside the bitmap read as paper.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.dims.w as i64 || y >= self.dims.h as i64 {
            return false;
        }
        self.bits[y as usize * self.dims.w as usize + x as usize]
    }

    /// Pack 8 horizontally adjacent bits starting at (`x`, `y`) into a byte, leftmost pixel in
    /// the most significant bit.
    #[inline]
    pub fn row_byte(&self, x: i64, y: i64) -> u8 {
        (0..8).fold(0u8, |acc, dx| (acc << 1) | self.get(x + dx, y) as u8)
    }
}
