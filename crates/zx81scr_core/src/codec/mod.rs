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

    zx81scr_core::codec::mod.rs

    Conversion entry points. The encoder turns a raster into a character
    stream, a display file and a transcript; the decoders turn either binary
    form back into a raster and re-run the encoder on it.
*/

mod decode;
mod encode;

use std::str::FromStr;

pub use decode::{decode_character_stream, decode_display_file, raster_from_character_stream, raster_from_display_file};
pub use encode::encode;

use crate::{
    calibrate::CalibrationOffset,
    display_file::DisplayFile,
    error::ScrError,
    glyph_table::GlyphTable,
    render::decode_raster,
    RasterImage,
};

/// Everything produced by one forward conversion.
#[derive(Clone, Debug)]
pub struct ConversionResult {
    /// The working raster binarized to ink and paper.
    pub cleaned_image: RasterImage,
    /// The working raster with the screen window marked.
    pub overlay_image: RasterImage,
    /// ANSI colored text, 24 lines of 32 glyphs.
    pub transcript: String,
    /// 768 character codes, row-major.
    pub character_stream: Vec<u8>,
    pub display_file: DisplayFile,
    /// The offset actually applied, computed or requested. A raster smaller than the screen
    /// window yields a negative computed offset on that axis. Such a value reads as the
    /// auto-calibration request when passed back to [encode], which computes the same offset again.
    pub used_offset: CalibrationOffset,
    /// Number of cells whose pattern was not found in the glyph table.
    pub unmatched_cells: usize,
}

impl ConversionResult {
    /// True if at least one cell could not be matched to a glyph.
    pub fn is_partial(&self) -> bool {
        self.unmatched_cells > 0
    }
}

/// Which conversion entry point a source should be routed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Raster,
    CharacterStream,
    DisplayFile,
}

impl SourceKind {
    pub fn from_extension(ext: &str) -> Result<Self, ScrError> {
        ext.parse()
    }
}

impl FromStr for SourceKind {
    type Err = ScrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "png" | "bmp" | "gif" => Ok(SourceKind::Raster),
            "s81" => Ok(SourceKind::CharacterStream),
            "scr" => Ok(SourceKind::DisplayFile),
            _ => Err(ScrError::UnsupportedExtension(s.to_string())),
        }
    }
}

/// Convert an in-memory source of the given kind. `offset` only applies to raster sources;
/// decoded binary sources are always re-encoded from the origin.
pub fn convert(
    bytes: &[u8],
    kind: SourceKind,
    offset: CalibrationOffset,
    table: &GlyphTable,
) -> Result<ConversionResult, ScrError> {
    match kind {
        SourceKind::Raster => {
            let image = decode_raster(bytes)?;
            log::debug!("convert(): decoded raster {}x{}", image.width(), image.height());
            Ok(encode(&image, offset, table))
        }
        SourceKind::CharacterStream => decode_character_stream(bytes, table),
        SourceKind::DisplayFile => decode_display_file(bytes, table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{consts::*, display_file::*, render::encode_png};
    use image::Rgba;
    use zx81scr_common::MachineModel;

    #[test]
    fn source_kind_from_extension() {
        assert_eq!(SourceKind::from_extension("PNG").unwrap(), SourceKind::Raster);
        assert_eq!(SourceKind::from_extension("bmp").unwrap(), SourceKind::Raster);
        assert_eq!(SourceKind::from_extension(".s81").unwrap(), SourceKind::CharacterStream);
        assert_eq!(SourceKind::from_extension("scr").unwrap(), SourceKind::DisplayFile);
        assert!(matches!(
            SourceKind::from_extension("jpg"),
            Err(ScrError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn convert_dispatches_on_kind() {
        let table = GlyphTable::new(MachineModel::Zx81);

        let png = encode_png(&RasterImage::from_pixel(320, 240, Rgba(PAPER_RGBA))).unwrap();
        let r = convert(&png, SourceKind::Raster, CalibrationOffset::AUTO, &table).unwrap();
        assert_eq!(r.used_offset, CalibrationOffset::new(32, 24));
        assert_eq!(r.cleaned_image.dimensions(), (320, 240));

        let r = convert(&[0u8; CHARACTER_STREAM_SIZE], SourceKind::CharacterStream, CalibrationOffset::AUTO, &table).unwrap();
        assert_eq!(r.used_offset, CalibrationOffset::new(0, 0));

        let r = convert(DisplayFile::new().as_bytes(), SourceKind::DisplayFile, CalibrationOffset::new(3, 3), &table)
            .unwrap();
        assert_eq!(r.used_offset, CalibrationOffset::new(0, 0));
    }

    #[test]
    fn convert_reports_fatal_errors() {
        let table = GlyphTable::new(MachineModel::Zx81);
        assert!(matches!(
            convert(b"garbage", SourceKind::Raster, CalibrationOffset::AUTO, &table),
            Err(ScrError::UndecodableRaster(_))
        ));
        assert!(matches!(
            convert(&[0u8; 767], SourceKind::CharacterStream, CalibrationOffset::AUTO, &table),
            Err(ScrError::InvalidCharacterStreamSize(767))
        ));
        assert!(matches!(
            convert(&[0u8; DISPLAY_FILE_SIZE + 1], SourceKind::DisplayFile, CalibrationOffset::AUTO, &table),
            Err(ScrError::InvalidDisplayFileSize(6913))
        ));
    }
}
