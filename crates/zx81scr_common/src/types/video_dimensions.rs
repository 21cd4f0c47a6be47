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

   zx81scr_common::types::video_dimensions.rs

   A simple width/height pair used to describe rasters and screen windows.
*/

use std::fmt::Display;

use serde::Deserialize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct VideoDimensions {
    pub w: u32,
    pub h: u32,
}

impl VideoDimensions {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Height divided by width. A 320x256 raster has an aspect ratio of 0.8.
    pub fn aspect_ratio(&self) -> f64 {
        if self.w == 0 {
            return 0.0;
        }
        self.h as f64 / self.w as f64
    }

    /// Return true if this rectangle is larger than `other` in both dimensions.
    pub fn exceeds(&self, other: VideoDimensions) -> bool {
        self.w > other.w && self.h > other.h
    }
}

impl Display for VideoDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_known_producers() {
        assert_eq!(VideoDimensions::new(320, 256).aspect_ratio(), 0.8);
        assert_eq!(VideoDimensions::new(640, 480).aspect_ratio(), 0.75);
        assert_eq!(VideoDimensions::new(0, 192).aspect_ratio(), 0.0);
    }

    #[test]
    fn exceeds_requires_both_axes() {
        let limit = VideoDimensions::new(320, 256);
        assert!(VideoDimensions::new(640, 512).exceeds(limit));
        assert!(!VideoDimensions::new(640, 256).exceeds(limit));
        assert!(!VideoDimensions::new(320, 480).exceeds(limit));
    }
}
