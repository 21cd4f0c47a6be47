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

    zx81scr_core::calibrate.rs

    Derive the offset of the 256x192 screen window inside a screenshot.

    Known producers and their output sizes:
      EightyOne: 256x192 (no border), 264x200, 320x240, 400x300, 413x312
      SZ81:      320x240, and scaled 640x480 / 960x720
      ZXSP:      320x240
      ZX81 (iOS): 320x256, and 640x512 when exported from Photos
*/

use std::fmt::Display;

use zx81scr_common::VideoDimensions;

use crate::consts::*;

/// Rasters larger than this in both dimensions are scaled down before calibrating.
pub const SCALE_THRESHOLD: VideoDimensions = VideoDimensions::new(320, 256);

const CANONICAL_WIDTH_BORDERLESS: u32 = 256;
const CANONICAL_WIDTH_BORDERED: u32 = 320;

/// Aspect ratio (h/w) and height of the iOS emulator's output, which crops one line too high.
const OFF_BY_ONE_ASPECT: f64 = 0.8;
const OFF_BY_ONE_HEIGHT: u32 = 256;

/// Pixel offset of the top left corner of the screen window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CalibrationOffset {
    pub x: i32,
    pub y: i32,
}

impl CalibrationOffset {
    /// Requests auto-calibration on both axes.
    pub const AUTO: CalibrationOffset = CalibrationOffset { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn is_auto(&self) -> bool {
        self.x < 0 || self.y < 0
    }
}

impl Display for CalibrationOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Round half up, matching the behavior screenshots were calibrated against.
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Return the dimensions the raster is scaled to before calibration. Rasters that exceed
/// [SCALE_THRESHOLD] in both dimensions are scaled to a canonical width, preserving aspect ratio:
/// 256 if the width is a multiple of 256 (a scaled borderless capture), otherwise 320.
pub fn effective_dimensions(dims: VideoDimensions) -> VideoDimensions {
    if !dims.exceeds(SCALE_THRESHOLD) {
        return dims;
    }

    let canonical_w = if dims.w % CANONICAL_WIDTH_BORDERLESS == 0 {
        CANONICAL_WIDTH_BORDERLESS
    }
    else {
        CANONICAL_WIDTH_BORDERED
    };
    let canonical_h = round_half_up(dims.h as f64 * canonical_w as f64 / dims.w as f64).max(1) as u32;

    VideoDimensions::new(canonical_w, canonical_h)
}

/// Compute the offset of the screen window for a raster of the given size. `requested` values
/// that are non-negative override the computed value on their axis.
pub fn calibrate(dims: VideoDimensions, requested: CalibrationOffset) -> CalibrationOffset {
    let eff = effective_dimensions(dims);

    let x = round_half_up((eff.w as f64 - SCREEN_W as f64) / 2.0);
    let mut y = round_half_up((eff.h as f64 - SCREEN_H as f64) / 2.0);

    if eff.aspect_ratio() == OFF_BY_ONE_ASPECT && eff.h == OFF_BY_ONE_HEIGHT {
        y += 1;
    }

    log::debug!("calibrate(): raster {} (effective {}) computed offset ({},{})", dims, eff, x, y);
    if x < 0 || y < 0 {
        log::debug!(
            "calibrate(): raster {} is smaller than the screen window, offset ({},{}) is negative",
            eff,
            x,
            y
        );
    }

    let used = CalibrationOffset {
        x: if requested.x >= 0 { requested.x } else { x },
        y: if requested.y >= 0 { requested.y } else { y },
    };

    if used != (CalibrationOffset { x, y }) {
        log::debug!("calibrate(): using requested offset {}", used);
    }
    used
}
