//! # Session Command
//!
//! A line-oriented stand-in for the live page: every stdin line is one
//! field edit or button press, and the updated view is printed after it.
//!
//! ## Line Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gst session                     │  percent session                     │
//! │  ───────────                     │  ───────────────                     │
//! │  amount <text>                   │  base <text>                         │
//! │  rate <text>                     │  percent <text>                      │
//! │  preset <rate>                   │                                      │
//! │  mode exclusive|inclusive        │                                      │
//! │  reset                           │  reset                               │
//! │  quit                            │  quit                                │
//! │                                                                         │
//! │  <text> may be empty ("amount" alone clears the field).                 │
//! │  Blank lines and lines starting with '#' are ignored.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use tracing::{debug, warn};

use calc_core::GstMode;

use super::Output;
use crate::cli::SessionKind;
use crate::config::CalcConfig;
use crate::error::{AppError, AppResult};
use crate::state::{GstFormState, PercentageFormState};

enum Step {
    Continue,
    Quit,
}

pub fn run<R: BufRead, W: Write>(
    kind: SessionKind,
    config: &CalcConfig,
    output: Output,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    let mut gst = GstFormState::new(
        config.currency(),
        config.gst.default_mode,
        config.gst.presets.clone(),
    );
    let mut percent = PercentageFormState::new();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        debug!(command, arg, "Session input");

        let step = match kind {
            SessionKind::Gst => gst_step(&mut gst, command, arg, output, out),
            SessionKind::Percent => percent_step(&mut percent, command, arg, output, out),
        };

        match step {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) => break,
            Err(err @ (AppError::InvalidInput(_) | AppError::Calc(_))) => {
                warn!(%err, "Rejected session input");
                writeln!(out, "error: {}", err)?;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn gst_step<W: Write>(
    form: &mut GstFormState,
    command: &str,
    arg: &str,
    output: Output,
    out: &mut W,
) -> AppResult<Step> {
    let view = match command {
        "amount" => form.set_amount(arg),
        "rate" => form.set_rate(arg),
        "preset" => {
            let rate = arg
                .parse::<f64>()
                .map_err(|_| AppError::InvalidInput(format!("'{}' is not a preset rate", arg)))?;
            form.apply_preset(rate)?
        }
        "mode" => {
            let mode: GstMode = arg.parse()?;
            form.set_mode(mode)
        }
        "reset" => form.reset(),
        "quit" | "exit" => return Ok(Step::Quit),
        other => return Err(unknown_command(other, "amount, rate, preset, mode, reset, quit")),
    };
    output.emit(out, view)?;
    Ok(Step::Continue)
}

fn percent_step<W: Write>(
    form: &mut PercentageFormState,
    command: &str,
    arg: &str,
    output: Output,
    out: &mut W,
) -> AppResult<Step> {
    let view = match command {
        "base" => form.set_base(arg),
        "percent" | "percentage" => form.set_percentage(arg),
        "reset" => form.reset(),
        "quit" | "exit" => return Ok(Step::Quit),
        other => return Err(unknown_command(other, "base, percent, reset, quit")),
    };
    output.emit(out, view)?;
    Ok(Step::Continue)
}

fn unknown_command(command: &str, valid: &str) -> AppError {
    AppError::InvalidInput(format!("unknown command '{}'. Valid: {}", command, valid))
}
