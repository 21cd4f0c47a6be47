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

   zx81scr_common::types::machine_model.rs

   The machine models whose character sets the converter understands.
*/

use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum MachineModel {
    #[default]
    Zx81,
    Zx80,
}

impl MachineModel {
    pub const ALL: [MachineModel; 2] = [MachineModel::Zx81, MachineModel::Zx80];
}

impl FromStr for MachineModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zx81" | "ts1000" => Ok(MachineModel::Zx81),
            "zx80" => Ok(MachineModel::Zx80),
            _ => Err(format!("Invalid machine model: {}. Expected 'zx81' or 'zx80'", s)),
        }
    }
}

impl TryFrom<String> for MachineModel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for MachineModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineModel::Zx81 => write!(f, "ZX81"),
            MachineModel::Zx80 => write!(f, "ZX80"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_parses_case_insensitively() {
        assert_eq!("ZX81".parse::<MachineModel>(), Ok(MachineModel::Zx81));
        assert_eq!("zx80".parse::<MachineModel>(), Ok(MachineModel::Zx80));
        assert!("spectrum".parse::<MachineModel>().is_err());
    }
}
