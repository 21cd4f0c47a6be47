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

    zx81scr_headless::convert_file.rs

    Convert a single input file and write its artifacts to the output
    directory.
*/

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};

use zx81scr_common::{artifact_path, find_unique_stem, path::split_extension};
use zx81scr_config::{ConfigFileParams, Output};
use zx81scr_core::{convert, render::encode_png, transcript::plain_text, CalibrationOffset, GlyphTable, SourceKind};

use crate::summary::{file_name_string, ConversionSummary, FileEntry, ImageEntry, TextEntry};

pub const OVERLAY_SUFFIX: &str = "_ovr";

/// Resolves output paths for the artifact set of one input file. All artifacts share one stem,
/// so without overwrite a single numbered stem is chosen for the whole set.
pub struct OutputNamer<'a> {
    dir:  &'a Path,
    stem: String,
}

impl<'a> OutputNamer<'a> {
    pub fn new(dir: &'a Path, base: &str, overwrite: bool, artifacts: &[(&str, &str)]) -> Self {
        let stem = if overwrite {
            base.to_string()
        }
        else {
            find_unique_stem(dir, base, artifacts)
        };
        Self { dir, stem }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Path for `<stem><suffix>.<ext>`.
    pub fn path(&self, suffix: &str, ext: &str) -> PathBuf {
        artifact_path(self.dir, &self.stem, suffix, ext)
    }
}

/// The `(suffix, ext)` pairs of the artifacts enabled in `output`.
fn planned_artifacts(output: &Output) -> Vec<(&'static str, &'static str)> {
    [
        (output.write_png, ("", "png")),
        (output.write_overlay, (OVERLAY_SUFFIX, "png")),
        (output.write_s81, ("", "s81")),
        (output.write_scr, ("", "scr")),
        (output.write_txt, ("", "txt")),
    ]
    .into_iter()
    .filter_map(|(enabled, artifact)| enabled.then_some(artifact))
    .collect()
}

fn write_artifact(path: &Path, data: &[u8]) -> anyhow::Result<String> {
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(file_name_string(path))
}

/// Check an input against the configured extension and size limits and return its source kind.
pub fn check_input(path: &Path, config: &ConfigFileParams) -> anyhow::Result<SourceKind> {
    let name = file_name_string(path);
    let (_, ext) = split_extension(&name);
    let Some(ext) = ext
    else {
        bail!("{} has no file extension", name);
    };
    if !config.input.allows_extension(&ext) {
        bail!("Extension '{}' is not allowed", ext);
    }
    let kind = SourceKind::from_extension(&ext)?;

    let size = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    if size > config.input.max_file_size {
        bail!(
            "{} is {} bytes, exceeding the maximum of {} bytes",
            name,
            size,
            config.input.max_file_size
        );
    }
    Ok(kind)
}

pub fn convert_file(path: &Path, config: &ConfigFileParams, table: &GlyphTable) -> anyhow::Result<ConversionSummary> {
    let kind = check_input(path, config)?;
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let offset = CalibrationOffset::new(config.converter.offset_x, config.converter.offset_y);
    let result = convert(&bytes, kind, offset, table).with_context(|| format!("Failed to convert {}", path.display()))?;

    let name = file_name_string(path);
    let (stem, _) = split_extension(&name);
    let out = &config.output;
    let namer = OutputNamer::new(&out.dir, stem, out.overwrite, &planned_artifacts(out));
    log::debug!("Writing artifacts for {} with stem {}", name, namer.stem());
    let mut summary = ConversionSummary::new(path, &result);

    if out.write_png {
        let filename = write_artifact(&namer.path("", "png"), &encode_png(&result.cleaned_image)?)?;
        summary.png = Some(ImageEntry {
            filename,
            width: result.cleaned_image.width(),
            height: result.cleaned_image.height(),
        });
    }
    if out.write_overlay {
        let filename = write_artifact(
            &namer.path(OVERLAY_SUFFIX, "png"),
            &encode_png(&result.overlay_image)?,
        )?;
        summary.ovr = Some(ImageEntry {
            filename,
            width: result.overlay_image.width(),
            height: result.overlay_image.height(),
        });
    }
    if out.write_s81 {
        let filename = write_artifact(&namer.path("", "s81"), &result.character_stream)?;
        summary.s81 = Some(FileEntry { filename });
    }
    if out.write_scr {
        let filename = write_artifact(&namer.path("", "scr"), result.display_file.as_bytes())?;
        summary.scr = Some(FileEntry { filename });
    }
    if out.write_txt {
        let filename = write_artifact(&namer.path("", "txt"), result.transcript.as_bytes())?;
        summary.txt = Some(TextEntry {
            filename,
            data: result.transcript.clone(),
        });
    }

    if result.is_partial() {
        log::warn!(
            "{}: {} cell(s) did not match any glyph:\n{}",
            name,
            result.unmatched_cells,
            plain_text(&result.transcript)
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zx81scr_core::{display_file::DISPLAY_FILE_SIZE, MachineModel};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zx81scr_headless_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn config_for(dir: &Path) -> ConfigFileParams {
        let mut config = ConfigFileParams::default();
        config.output.dir = dir.join("out");
        fs::create_dir_all(&config.output.dir).unwrap();
        config
    }

    #[test]
    fn namer_appends_suffix() {
        let dir = scratch_dir("namer");
        let artifacts = planned_artifacts(&Output::default());
        let namer = OutputNamer::new(&dir, "shot", true, &artifacts);
        assert_eq!(namer.path(OVERLAY_SUFFIX, "png"), dir.join("shot_ovr.png"));
        assert_eq!(namer.path("", "s81"), dir.join("shot.s81"));
    }

    #[test]
    fn namer_avoids_existing_files_without_overwrite() {
        let dir = scratch_dir("no_overwrite");
        fs::write(dir.join("shot.txt"), b"x").unwrap();
        let artifacts = planned_artifacts(&Output::default());
        let namer = OutputNamer::new(&dir, "shot", false, &artifacts);
        assert_eq!(namer.stem(), "shot_0001");
        assert!(!namer.path("", "txt").exists());
    }

    #[test]
    fn planned_artifacts_follow_output_flags() {
        let mut output = Output::default();
        assert_eq!(planned_artifacts(&output).len(), 5);
        output.write_overlay = false;
        output.write_scr = false;
        assert_eq!(planned_artifacts(&output), vec![("", "png"), ("", "s81"), ("", "txt")]);
    }

    #[test]
    fn repeated_conversion_without_overwrite_shares_one_index() {
        let dir = scratch_dir("shared_index");
        let mut config = config_for(&dir);
        config.output.overwrite = false;
        let table = GlyphTable::new(MachineModel::Zx81);

        let input = dir.join("shot.s81");
        fs::write(&input, vec![0u8; 768]).unwrap();
        // A stray earlier overlay is the only conflicting file.
        fs::write(config.output.dir.join("shot_ovr.png"), b"x").unwrap();

        let summary = convert_file(&input, &config, &table).unwrap();
        assert_eq!(summary.png.unwrap().filename, "shot_0001.png");
        assert_eq!(summary.ovr.unwrap().filename, "shot_0001_ovr.png");
        assert_eq!(summary.s81.unwrap().filename, "shot_0001.s81");
        assert_eq!(summary.scr.unwrap().filename, "shot_0001.scr");
        assert_eq!(summary.txt.unwrap().filename, "shot_0001.txt");
        assert!(!config.output.dir.join("shot.png").exists());

        let again = convert_file(&input, &config, &table).unwrap();
        assert_eq!(again.txt.unwrap().filename, "shot_0002.txt");
        assert_eq!(again.ovr.unwrap().filename, "shot_0002_ovr.png");
    }

    #[test]
    fn disallowed_extension_is_rejected() {
        let dir = scratch_dir("reject_ext");
        let mut config = config_for(&dir);
        let input = dir.join("dump.scr");
        fs::write(&input, vec![0u8; DISPLAY_FILE_SIZE]).unwrap();

        config.input.allowed_extensions = vec!["png".to_string()];
        assert!(check_input(&input, &config).is_err());
        config.input.allowed_extensions = vec!["SCR".to_string()];
        assert_eq!(check_input(&input, &config).unwrap(), SourceKind::DisplayFile);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let dir = scratch_dir("reject_size");
        let mut config = config_for(&dir);
        let input = dir.join("stream.s81");
        fs::write(&input, vec![0u8; 768]).unwrap();

        config.input.max_file_size = 100;
        assert!(check_input(&input, &config).is_err());
    }

    #[test]
    fn character_stream_writes_all_artifacts() {
        let dir = scratch_dir("all_artifacts");
        let config = config_for(&dir);
        let table = GlyphTable::new(MachineModel::Zx81);

        let mut stream = vec![0u8; 768];
        stream[0] = 0x2D; // H
        stream[1] = 0x2E; // I
        let input = dir.join("hello.s81");
        fs::write(&input, &stream).unwrap();

        let summary = convert_file(&input, &config, &table).unwrap();
        let out = &config.output.dir;

        assert_eq!(fs::read(out.join("hello.s81")).unwrap(), stream);
        assert_eq!(fs::read(out.join("hello.scr")).unwrap().len(), DISPLAY_FILE_SIZE);
        assert!(out.join("hello.png").exists());
        assert!(out.join("hello_ovr.png").exists());

        let png = summary.png.unwrap();
        assert_eq!((png.filename.as_str(), png.width, png.height), ("hello.png", 256, 192));
        assert_eq!(summary.ovr.unwrap().filename, "hello_ovr.png");
        assert_eq!((summary.used_offsetx, summary.used_offsety), (0, 0));
        assert!(!summary.partial);

        let txt = summary.txt.unwrap();
        assert_eq!(fs::read_to_string(out.join(&txt.filename)).unwrap(), txt.data);
        assert!(plain_text(&txt.data).starts_with("HI"));
    }

    #[test]
    fn disabled_artifacts_are_skipped() {
        let dir = scratch_dir("skip_artifacts");
        let mut config = config_for(&dir);
        config.output.write_png = false;
        config.output.write_overlay = false;
        config.output.write_txt = false;
        let table = GlyphTable::new(MachineModel::Zx81);

        let input = dir.join("blank.s81");
        fs::write(&input, vec![0u8; 768]).unwrap();

        let summary = convert_file(&input, &config, &table).unwrap();
        assert!(summary.png.is_none());
        assert!(summary.txt.is_none());
        assert!(summary.s81.is_some());
        assert!(!config.output.dir.join("blank.png").exists());
    }

    #[test]
    fn corrupt_input_fails() {
        let dir = scratch_dir("corrupt");
        let config = config_for(&dir);
        let table = GlyphTable::new(MachineModel::Zx81);

        let input = dir.join("short.scr");
        fs::write(&input, vec![0u8; 100]).unwrap();
        assert!(convert_file(&input, &config, &table).is_err());
    }
}
