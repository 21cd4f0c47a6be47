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

    zx81scr_core::error.rs

    Error type for the converter core.
*/

use crate::{consts::*, display_file::DISPLAY_FILE_SIZE};

/// Fatal conditions reported by the converter. Unmatched glyph patterns and unmatched character
/// codes are not errors; they are absorbed into a [crate::ConversionResult] and counted there.
#[derive(thiserror::Error, Debug)]
pub enum ScrError {
    #[error("Character stream must be exactly {n} bytes, got {0}", n = CHARACTER_STREAM_SIZE)]
    InvalidCharacterStreamSize(usize),
    #[error("Display file must be exactly {n} bytes, got {0}", n = DISPLAY_FILE_SIZE)]
    InvalidDisplayFileSize(usize),
    #[error("Source raster could not be decoded: {0}")]
    UndecodableRaster(#[source] image::ImageError),
    #[error("Failed to encode output raster: {0}")]
    ImageEncode(#[source] image::ImageError),
    #[error("Unsupported source file extension: '{0}'")]
    UnsupportedExtension(String),
}
