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

   zx81scr_common::path::mod.rs

   Common path routines
*/

use std::path::{Path, PathBuf};

/// Find a stem in `dir` under which every artifact of a set can be written without replacing an
/// existing file. Each artifact is a `(suffix, ext)` pair and is written as `<stem><suffix>.<ext>`.
///
/// `base` is returned if no artifact exists under it. Otherwise a numbered stem of the form
/// `base_NNNN` is used, picking the smallest index at which the whole set is free. Indices are
/// probed by doubling and then bisected, so a directory holding many earlier conversions of the
/// same file is searched in logarithmic time.
pub fn find_unique_stem(dir: &Path, base: &str, artifacts: &[(&str, &str)]) -> String {
    let taken = |stem: &str| {
        artifacts
            .iter()
            .any(|(suffix, ext)| artifact_path(dir, stem, suffix, ext).exists())
    };
    let numbered = |index: usize| format!("{base}_{index:04}");

    if !taken(base) {
        return base.to_string();
    }

    let mut lower = 0;
    if !taken(&numbered(1)) {
        return numbered(1);
    }

    // Find an upper bound index where the set is free by doubling `upper`
    let mut upper = 2;
    while taken(&numbered(upper)) {
        lower = upper;
        upper *= 2;
    }
    lower = lower.max(1);

    while lower + 1 < upper {
        let mid = (lower + upper) / 2;
        if taken(&numbered(mid)) {
            lower = mid;
        }
        else {
            upper = mid;
        }
    }

    numbered(upper)
}

/// Path of the artifact `<stem><suffix>.<ext>` in `dir`.
pub fn artifact_path(dir: &Path, stem: &str, suffix: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}{suffix}.{ext}"))
}

/// Split a file name into its stem and lowercased extension. Multiple dots are kept in the stem,
/// so `my.screen.png` yields `("my.screen", "png")`.
pub fn split_extension(file_name: &str) -> (&str, Option<String>) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => (&file_name[..idx], Some(file_name[idx + 1..].to_lowercase())),
        _ => (file_name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extension_keeps_inner_dots() {
        assert_eq!(split_extension("my.screen.PNG"), ("my.screen", Some("png".to_string())));
        assert_eq!(split_extension("noext"), ("noext", None));
        assert_eq!(split_extension(".hidden"), (".hidden", None));
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("zx81scr_unique_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const SET: [(&str, &str); 3] = [("", "png"), ("_ovr", "png"), ("", "txt")];

    #[test]
    fn unique_stem_in_empty_dir_is_plain() {
        let dir = scratch_dir("plain");
        assert_eq!(find_unique_stem(&dir, "centipede", &SET), "centipede");
        assert_eq!(artifact_path(&dir, "centipede", "_ovr", "png"), dir.join("centipede_ovr.png"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unique_stem_skips_taken_indices() {
        let dir = scratch_dir("taken");
        std::fs::write(dir.join("maze.txt"), b"").unwrap();
        for i in 1..=5 {
            std::fs::write(dir.join(format!("maze_{i:04}.png")), b"").unwrap();
        }

        assert_eq!(find_unique_stem(&dir, "maze", &SET), "maze_0006");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn one_taken_artifact_moves_the_whole_set() {
        let dir = scratch_dir("whole_set");
        // Only the overlay exists; the plain png and txt names are free but must not be used.
        std::fs::write(dir.join("shot_ovr.png"), b"").unwrap();

        let stem = find_unique_stem(&dir, "shot", &SET);
        assert_eq!(stem, "shot_0001");
        for (suffix, ext) in SET {
            assert!(!artifact_path(&dir, &stem, suffix, ext).exists());
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
