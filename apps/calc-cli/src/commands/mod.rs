//! # Commands
//!
//! One module per subcommand. Each takes the loaded [`CalcConfig`] and an
//! [`Output`] and writes the rendered view.
//!
//! ```text
//! calc gst      ──► gst::run        ──► GstFormState        ──► Output
//! calc percent  ──► percentage::run ──► PercentageFormState ──► Output
//! calc presets  ──► presets::run    ──► CalcConfig          ──► Output
//! calc session  ──► session::run    ──► either form, line by line
//! ```

pub mod gst;
pub mod percentage;
pub mod presets;
pub mod session;

use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use crate::error::AppResult;

/// Renders views as plain text or one JSON document per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn emit<T, W>(&self, out: &mut W, value: &T) -> AppResult<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(value)?)?;
        } else {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}
