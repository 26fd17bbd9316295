//! # Presets Command
//!
//! Lists the GST slabs a form offers as one-tap rates.

use serde::Serialize;
use std::fmt;
use std::io::Write;

use calc_core::format::plain;

use super::Output;
use crate::config::CalcConfig;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetList(pub Vec<f64>);

impl fmt::Display for PresetList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rates: Vec<String> = self.0.iter().map(|r| format!("{}%", plain(*r))).collect();
        write!(f, "{}", rates.join("\n"))
    }
}

pub fn run<W: Write>(config: &CalcConfig, output: Output, out: &mut W) -> AppResult<()> {
    output.emit(out, &PresetList(config.gst.presets.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_default_presets() {
        let mut buf = Vec::new();
        run(&CalcConfig::default(), Output { json: false }, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3%\n5%\n12%\n18%\n28%\n");
    }

    #[test]
    fn test_json() {
        let mut buf = Vec::new();
        run(&CalcConfig::default(), Output { json: true }, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[3.0,5.0,12.0,18.0,28.0]\n");
    }
}
