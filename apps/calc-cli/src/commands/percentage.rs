//! # Percent Command

use std::io::Write;

use calc_core::DEFAULT_PROMPT;

use super::Output;
use crate::error::{AppError, AppResult};
use crate::state::{PercentageFormState, PercentageView};

pub fn calculate(base: &str, percentage: &str) -> AppResult<PercentageView> {
    let mut form = PercentageFormState::new();
    form.set_base(base);
    let view = form.set_percentage(percentage);

    let errors = view.errors();
    if !errors.is_empty() {
        return Err(AppError::InvalidInput(errors.join("\n")));
    }
    if view.result.is_none() {
        return Err(AppError::InvalidInput(DEFAULT_PROMPT.to_string()));
    }

    Ok(view.clone())
}

pub fn run<W: Write>(output: Output, out: &mut W, base: &str, percentage: &str) -> AppResult<()> {
    let view = calculate(base, percentage)?;
    output.emit(out, &view)
}
