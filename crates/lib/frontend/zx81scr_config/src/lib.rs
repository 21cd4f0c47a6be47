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
*/

//! The `zx81scr_config` crate provides functionality for parsing the converter's configuration
//! file, and overlaying command line arguments on top of the configuration file settings.
//! We always consider command line arguments to take priority over the configuration file.
//!
//! Features:
//! - `use_bpaf`: Enable BPAF support for command line argument parsing.

#[cfg(feature = "use_bpaf")]
mod bpaf_config;

use std::path::{Path, PathBuf};

#[cfg(feature = "use_bpaf")]
pub use bpaf_config::{cli_args, CmdLineArgs};

use cfg_if::cfg_if;
use serde_derive::Deserialize;
use zx81scr_common::MachineModel;

pub const DEFAULT_CONFIG_PATH: &str = "./zx81scr.toml";

const fn _default_true() -> bool {
    true
}
const fn _default_auto_offset() -> i32 {
    -1
}
const fn _default_max_file_size() -> u64 {
    1_000_000
}
fn _default_allowed_extensions() -> Vec<String> {
    ["bmp", "png", "gif", "s81", "scr"].iter().map(|s| s.to_string()).collect()
}
fn _default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

/// Stand-in for the command line when argument parsing is compiled out.
#[cfg(not(feature = "use_bpaf"))]
#[derive(Debug, Default)]
pub struct CmdLineArgs {
    pub config_file: Option<PathBuf>,
    pub model: Option<MachineModel>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
    pub output_dir: Option<PathBuf>,
    pub no_overwrite: bool,
    pub json: bool,
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct Converter {
    #[serde(default)]
    pub model: MachineModel,
    #[serde(default = "_default_auto_offset")]
    pub offset_x: i32,
    #[serde(default = "_default_auto_offset")]
    pub offset_y: i32,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            model: MachineModel::default(),
            offset_x: _default_auto_offset(),
            offset_y: _default_auto_offset(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Input {
    #[serde(default = "_default_max_file_size")]
    pub max_file_size: u64,
    #[serde(default = "_default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            max_file_size: _default_max_file_size(),
            allowed_extensions: _default_allowed_extensions(),
        }
    }
}

impl Input {
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Deserialize)]
pub struct Output {
    #[serde(default = "_default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "_default_true")]
    pub overwrite: bool,
    #[serde(default = "_default_true")]
    pub write_png: bool,
    #[serde(default = "_default_true")]
    pub write_overlay: bool,
    #[serde(default = "_default_true")]
    pub write_s81: bool,
    #[serde(default = "_default_true")]
    pub write_scr: bool,
    #[serde(default = "_default_true")]
    pub write_txt: bool,
    #[serde(default)]
    pub json_summary: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            dir: _default_output_dir(),
            overwrite: true,
            write_png: true,
            write_overlay: true,
            write_s81: true,
            write_scr: true,
            write_txt: true,
            json_summary: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFileParams {
    #[serde(default)]
    pub converter: Converter,
    #[serde(default)]
    pub input: Input,
    #[serde(default)]
    pub output: Output,
    /// Files to convert. Only ever set from the command line.
    #[serde(skip)]
    pub inputs: Vec<PathBuf>,
}

impl ConfigFileParams {
    pub fn overlay(&mut self, shell_args: CmdLineArgs) {
        if let Some(model) = shell_args.model {
            self.converter.model = model;
        }
        if let Some(offset_x) = shell_args.offset_x {
            self.converter.offset_x = offset_x;
        }
        if let Some(offset_y) = shell_args.offset_y {
            self.converter.offset_y = offset_y;
        }
        if let Some(output_dir) = shell_args.output_dir {
            self.output.dir = output_dir;
        }

        self.output.overwrite &= !shell_args.no_overwrite;
        self.output.json_summary |= shell_args.json;
        self.inputs = shell_args.inputs;
    }
}

pub fn read_config(toml_string: impl AsRef<str>, shell_args: CmdLineArgs) -> Result<ConfigFileParams, anyhow::Error> {
    let mut toml_args: ConfigFileParams = toml::from_str(toml_string.as_ref())?;

    // Command line arguments override config file arguments
    toml_args.overlay(shell_args);

    Ok(toml_args)
}

fn read_shell_args() -> CmdLineArgs {
    cfg_if! {
        if #[cfg(feature = "use_bpaf")] {
            log::debug!("Reading command line arguments...");
            cli_args().run()
        } else {
            log::debug!("Argument reading disabled...");
            CmdLineArgs::default()
        }
    }
}

/// Read the TOML configuration from a file path, parse and overlay command line arguments.
///
/// The path may be overridden with `--config_file`. If no override was given and the default
/// file does not exist, built-in defaults are used instead.
pub fn read_config_file<P>(default_path: P) -> Result<ConfigFileParams, anyhow::Error>
where
    P: AsRef<Path>,
{
    let shell_args = read_shell_args();

    // Allow configuration file path to be overridden by command line argument 'config_file'
    let toml_string = if let Some(configfile_path) = shell_args.config_file.as_ref() {
        std::fs::read_to_string(configfile_path)?
    }
    else {
        match std::fs::read_to_string(default_path.as_ref()) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "No configuration file at {}, using defaults",
                    default_path.as_ref().display()
                );
                String::new()
            }
            Err(e) => return Err(e.into()),
        }
    };

    read_config(toml_string, shell_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = read_config("", CmdLineArgs::default()).unwrap();
        assert_eq!(config.converter.model, MachineModel::Zx81);
        assert_eq!(config.converter.offset_x, -1);
        assert_eq!(config.converter.offset_y, -1);
        assert_eq!(config.input.max_file_size, 1_000_000);
        assert!(config.input.allows_extension("PNG"));
        assert!(!config.input.allows_extension("jpg"));
        assert_eq!(config.output.dir, PathBuf::from("./output"));
        assert!(config.output.overwrite);
        assert!(!config.output.json_summary);
    }

    #[test]
    fn config_file_values_are_read() {
        let toml = r#"
            [converter]
            model = "zx80"
            offset_x = 4
            offset_y = 8

            [input]
            allowed_extensions = ["scr"]

            [output]
            dir = "/tmp/screens"
            write_overlay = false
        "#;
        let config = read_config(toml, CmdLineArgs::default()).unwrap();
        assert_eq!(config.converter.model, MachineModel::Zx80);
        assert_eq!((config.converter.offset_x, config.converter.offset_y), (4, 8));
        assert!(config.input.allows_extension("scr"));
        assert!(!config.input.allows_extension("png"));
        assert_eq!(config.output.dir, PathBuf::from("/tmp/screens"));
        assert!(!config.output.write_overlay);
        assert!(config.output.write_png);
    }

    #[test]
    fn command_line_overrides_file() {
        let toml = r#"
            [converter]
            model = "zx80"
            offset_x = 4
        "#;
        let args = CmdLineArgs {
            model: Some(MachineModel::Zx81),
            offset_y: Some(12),
            no_overwrite: true,
            json: true,
            inputs: vec![PathBuf::from("a.png")],
            ..Default::default()
        };
        let config = read_config(toml, args).unwrap();
        assert_eq!(config.converter.model, MachineModel::Zx81);
        assert_eq!(config.converter.offset_x, 4);
        assert_eq!(config.converter.offset_y, 12);
        assert!(!config.output.overwrite);
        assert!(config.output.json_summary);
        assert_eq!(config.inputs, vec![PathBuf::from("a.png")]);
    }

    #[test]
    fn bad_model_is_a_parse_error() {
        assert!(read_config("[converter]\nmodel = \"c64\"\n", CmdLineArgs::default()).is_err());
    }
}
