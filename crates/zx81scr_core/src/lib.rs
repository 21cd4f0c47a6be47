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

    zx81scr_core::lib.rs

    Screen converter core. Converts screenshots of ZX81 / ZX80 displays to
    character streams and 6912 byte display file images, and back.

    The core only works on in-memory rasters and byte buffers. It performs no
    I/O and holds no global state; a GlyphTable is built once per model and
    shared by reference between any number of concurrent conversions.
*/

pub mod binarize;
pub mod calibrate;
pub mod codec;
pub mod consts;
pub mod display_file;
pub mod error;
pub mod glyph_table;
pub mod matcher;
pub mod pattern;
pub mod render;
pub mod transcript;

/// The raster type consumed and produced by the converter.
pub type RasterImage = image::RgbaImage;

pub use crate::{
    calibrate::CalibrationOffset,
    codec::{convert, decode_character_stream, decode_display_file, encode, ConversionResult, SourceKind},
    display_file::DisplayFile,
    error::ScrError,
    glyph_table::{GlyphRecord, GlyphTable},
    pattern::GlyphPattern,
};
pub use zx81scr_common::MachineModel;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn glyph_table_is_shareable() {
        assert_send_sync::<GlyphTable>();
        assert_send_sync::<ConversionResult>();
    }

    #[test]
    fn concurrent_conversions_share_one_table() {
        let table = GlyphTable::new(MachineModel::Zx81);
        let stream: Vec<u8> = (0..consts::CHARACTER_STREAM_SIZE).map(|i| (i % 64) as u8).collect();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| decode_character_stream(&stream, &table).unwrap().character_stream))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), stream);
            }
        });
    }
}
