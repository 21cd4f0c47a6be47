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

    zx81scr_headless::summary.rs

    JSON summary of a single conversion, printed with --json.
*/

use std::path::Path;

use serde_derive::Serialize;
use zx81scr_core::ConversionResult;

#[derive(Debug, Serialize)]
pub struct ImageEntry {
    pub filename: String,
    pub width:    u32,
    pub height:   u32,
}

#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct TextEntry {
    pub filename: String,
    pub data:     String,
}

/// Per-file result. Entries are absent for artifacts that were not written.
#[derive(Debug, Serialize)]
pub struct ConversionSummary {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<ImageEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovr: Option<ImageEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s81: Option<FileEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scr: Option<FileEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txt: Option<TextEntry>,
    pub used_offsetx: i32,
    pub used_offsety: i32,
    pub partial: bool,
    pub unmatched: usize,
}

impl ConversionSummary {
    pub fn new(source: &Path, result: &ConversionResult) -> Self {
        Self {
            source: file_name_string(source),
            png: None,
            ovr: None,
            s81: None,
            scr: None,
            txt: None,
            used_offsetx: result.used_offset.x,
            used_offsety: result.used_offset.y,
            partial: result.is_partial(),
            unmatched: result.unmatched_cells,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zx81scr_core::{encode, render::blank_screen, CalibrationOffset, GlyphTable, MachineModel};

    fn blank_result() -> ConversionResult {
        let table = GlyphTable::new(MachineModel::Zx81);
        encode(&blank_screen(), CalibrationOffset::AUTO, &table)
    }

    #[test]
    fn summary_omits_unwritten_artifacts() {
        let result = blank_result();
        let mut summary = ConversionSummary::new(Path::new("/tmp/in/shot.png"), &result);
        summary.s81 = Some(FileEntry {
            filename: "shot.s81".to_string(),
        });

        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["source"], "shot.png");
        assert_eq!(json["s81"]["filename"], "shot.s81");
        assert_eq!(json["used_offsetx"], 0);
        assert_eq!(json["used_offsety"], 0);
        assert_eq!(json["partial"], false);
        assert_eq!(json["unmatched"], 0);
        assert!(json.get("png").is_none());
        assert!(json.get("txt").is_none());
    }
}
