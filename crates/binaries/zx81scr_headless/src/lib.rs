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

//! zx81scr headless front-end main library component.

#![forbid(unsafe_code)]

mod convert_file;
mod summary;

use std::fs;

use colored::Colorize;

use zx81scr_config::{ConfigFileParams, DEFAULT_CONFIG_PATH};
use zx81scr_core::GlyphTable;

pub use crate::{
    convert_file::{check_input, convert_file, OutputNamer},
    summary::ConversionSummary,
};

fn load_config() -> ConfigFileParams {
    // Resolve the configuration by parsing the configuration toml and merging it with command
    // line arguments.
    match zx81scr_config::read_config_file(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => match e.downcast_ref::<std::io::Error>() {
            Some(e) if e.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("Configuration file specified with --config_file was not found.");
                std::process::exit(1);
            }
            Some(e) => {
                eprintln!("Unknown IO error reading configuration file:\n{}", e);
                std::process::exit(1);
            }
            None => {
                eprintln!(
                    "Failed to parse configuration file. There may be a typo or otherwise invalid toml:\n{}",
                    e
                );
                std::process::exit(1);
            }
        },
    }
}

/// Convert every input file named on the command line. Returns the number of files that failed.
pub fn run_conversions(config: &ConfigFileParams) -> usize {
    let table = GlyphTable::new(config.converter.model);
    log::debug!(
        "Built {} glyph table with {} entries",
        table.model(),
        table.len()
    );

    let mut failures = 0;
    for path in &config.inputs {
        match convert_file(path, config, &table) {
            Ok(summary) => {
                let status = if summary.partial {
                    format!("partial ({} unmatched)", summary.unmatched).yellow()
                }
                else {
                    "ok".green()
                };
                println!(
                    "{} {} offset ({},{})",
                    status,
                    path.display(),
                    summary.used_offsetx,
                    summary.used_offsety
                );
                log::info!("Converted {}", path.display());

                if config.output.json_summary {
                    match summary.to_json() {
                        Ok(json) => println!("{}", json),
                        Err(e) => log::error!("Failed to serialize summary for {}: {}", path.display(), e),
                    }
                }
            }
            Err(e) => {
                failures += 1;
                println!("{} {}: {:#}", "failed".red(), path.display(), e);
                log::warn!("Skipping {}: {:?}", path.display(), e);
            }
        }
    }
    failures
}

pub fn run() {
    env_logger::init();

    let config = load_config();

    if config.inputs.is_empty() {
        eprintln!("No input files specified.");
        std::process::exit(1);
    }

    if let Err(e) = fs::create_dir_all(&config.output.dir) {
        eprintln!(
            "Failed to create output directory {}: {}",
            config.output.dir.display(),
            e
        );
        std::process::exit(1);
    }

    let failures = run_conversions(&config);
    if failures > 0 {
        eprintln!("{} of {} file(s) failed to convert", failures, config.inputs.len());
        std::process::exit(1);
    }
}
