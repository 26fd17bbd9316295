//! # GST Command
//!
//! One-shot GST calculation: fill the form once, print the view.

use std::io::Write;
use tracing::info;

use calc_core::{GstMode, DEFAULT_PROMPT};

use super::Output;
use crate::config::CalcConfig;
use crate::error::{AppError, AppResult};
use crate::state::{GstFormState, GstView};

/// Which rate field the user filled.
#[derive(Debug, Clone, PartialEq)]
pub enum RateInput {
    Text(String),
    Preset(f64),
}

/// Runs the form and returns the final view.
///
/// ## Errors
/// [`AppError::InvalidInput`] when a field is rejected or left blank,
/// carrying the same messages the form shows.
pub fn calculate(
    config: &CalcConfig,
    amount: &str,
    rate: &RateInput,
    mode: Option<GstMode>,
) -> AppResult<GstView> {
    let mut form = GstFormState::new(
        config.currency(),
        mode.unwrap_or(config.gst.default_mode),
        config.gst.presets.clone(),
    );

    form.set_amount(amount);
    match rate {
        RateInput::Text(text) => {
            form.set_rate(text);
        }
        RateInput::Preset(preset) => {
            form.apply_preset(*preset)?;
        }
    }

    let view = form.view();
    let errors = view.errors();
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors.join("\n")));
    }
    if view.result.is_none() {
        return Err(AppError::InvalidInput(DEFAULT_PROMPT.to_string()));
    }

    Ok(view.clone())
}

pub fn run<W: Write>(
    config: &CalcConfig,
    output: Output,
    out: &mut W,
    amount: &str,
    rate: RateInput,
    mode: Option<GstMode>,
) -> AppResult<()> {
    let view = calculate(config, amount, &rate, mode)?;
    info!(mode = %view.mode, "GST command completed");
    output.emit(out, &view)
}
