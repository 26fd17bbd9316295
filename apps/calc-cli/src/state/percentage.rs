//! # Percentage Form State
//!
//! Same recalculation rule as the GST form, with no mode and no presets.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use calc_core::{validate, PercentageCalculator, PercentageResult, DEFAULT_PROMPT};

const BASE_LABEL: &str = "Base value";
const PERCENTAGE_LABEL: &str = "Percentage";

/// What the percentage form currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageView {
    pub text: String,
    pub base_error: Option<String>,
    pub percentage_error: Option<String>,
    pub result: Option<PercentageResult>,
}

impl PercentageView {
    fn empty() -> Self {
        PercentageView {
            text: DEFAULT_PROMPT.to_string(),
            base_error: None,
            percentage_error: None,
            result: None,
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        [&self.base_error, &self.percentage_error]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl fmt::Display for PercentageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        for error in self.errors() {
            write!(f, "\n! {}", error)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PercentageFormState {
    base: String,
    percentage: String,
    calculator: PercentageCalculator,
    view: PercentageView,
}

impl Default for PercentageFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl PercentageFormState {
    pub fn new() -> Self {
        PercentageFormState {
            base: String::new(),
            percentage: String::new(),
            calculator: PercentageCalculator::new(),
            view: PercentageView::empty(),
        }
    }

    pub fn view(&self) -> &PercentageView {
        &self.view
    }

    pub fn set_base(&mut self, text: &str) -> &PercentageView {
        self.base = text.to_string();
        self.recalculate();
        &self.view
    }

    pub fn set_percentage(&mut self, text: &str) -> &PercentageView {
        self.percentage = text.to_string();
        self.recalculate();
        &self.view
    }

    pub fn reset(&mut self) -> &PercentageView {
        self.base.clear();
        self.percentage.clear();
        self.view = PercentageView::empty();
        debug!("Percentage form reset");
        &self.view
    }

    fn recalculate(&mut self) {
        let base = validate(&self.base);
        let percentage = validate(&self.percentage);

        self.view.base_error = base
            .as_ref()
            .err()
            .and_then(|e| e.field_message(BASE_LABEL));
        self.view.percentage_error = percentage
            .as_ref()
            .err()
            .and_then(|e| e.field_message(PERCENTAGE_LABEL));

        match (base, percentage) {
            (Ok(base), Ok(percentage)) => {
                let result = self.calculator.calculate(base.value(), percentage.value());
                debug!(result = result.result, "Percentage calculated");
                self.view.text = result.display_text.clone();
                self.view.result = Some(result);
            }
            _ if self.base.trim().is_empty() && self.percentage.trim().is_empty() => {
                self.view = PercentageView::empty();
            }
            _ => debug!("Percentage inputs incomplete, keeping previous result"),
        }
    }
}
