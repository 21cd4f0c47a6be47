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

use std::path::PathBuf;

use zx81scr_common::MachineModel;

use bpaf::{Bpaf, Parser};

fn inputs_arg() -> impl Parser<Vec<PathBuf>> {
    bpaf::positional::<PathBuf>("FILE")
        .help("Screenshot (.png, .bmp, .gif), character stream (.s81) or display file (.scr) to convert")
        .many()
}

#[cfg_attr(feature = "use_bpaf", derive(Bpaf))]
#[cfg_attr(feature = "use_bpaf", bpaf(options, version, generate(cli_args)))]
#[derive(Debug, Default)]
pub struct CmdLineArgs {
    #[bpaf(long("config_file"), long("configfile"))]
    pub config_file: Option<PathBuf>,

    /// Machine model whose character set to match against: zx81 or zx80
    #[bpaf(long)]
    pub model: Option<MachineModel>,

    /// Horizontal offset of the screen window. Negative values must be attached, as in --ox=-1,
    /// and select auto-calibration
    #[bpaf(long("ox"), long("offset_x"))]
    pub offset_x: Option<i32>,

    /// Vertical offset of the screen window. Negative values must be attached, as in --oy=-1,
    /// and select auto-calibration
    #[bpaf(long("oy"), long("offset_y"))]
    pub offset_y: Option<i32>,

    #[bpaf(long("output_dir"), long("outdir"))]
    pub output_dir: Option<PathBuf>,

    /// Never overwrite existing output files
    #[bpaf(long("no_overwrite"), switch)]
    pub no_overwrite: bool,

    /// Print a JSON summary for each converted file
    #[bpaf(long, switch)]
    pub json: bool,

    #[bpaf(external(inputs_arg))]
    pub inputs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CmdLineArgs {
        cli_args().run_inner(bpaf::Args::from(args)).unwrap()
    }

    #[test]
    fn attached_negative_offset_is_accepted() {
        let args = parse(&["--ox=-1", "--oy=8", "shot.png"]);
        assert_eq!(args.offset_x, Some(-1));
        assert_eq!(args.offset_y, Some(8));
        assert_eq!(args.inputs, vec![PathBuf::from("shot.png")]);
    }

    #[test]
    fn model_and_switches_are_parsed() {
        let args = parse(&["--model", "zx80", "--no_overwrite", "--json", "a.s81", "b.scr"]);
        assert_eq!(args.model, Some(MachineModel::Zx80));
        assert!(args.no_overwrite);
        assert!(args.json);
        assert_eq!(args.inputs.len(), 2);
    }
}
