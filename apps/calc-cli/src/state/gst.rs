//! # GST Form State
//!
//! The state behind the GST form: two raw text fields, the mode toggle,
//! the preset selection, and what is currently displayed.
//!
//! ## Form Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Action            Form Operation          Effect                  │
//! │  ───────────            ──────────────          ──────                  │
//! │                                                                         │
//! │  Type in Amount ──────► set_amount() ─────────► recalculate            │
//! │  Type in Rate ────────► set_rate() ───────────► clear preset, recalc   │
//! │  Tap 18% preset ──────► apply_preset(18) ─────► rate = "18", recalc    │
//! │  Tap Inclusive ───────► set_mode(Inclusive) ──► recalc                 │
//! │  Tap Reset ───────────► reset() ──────────────► default view           │
//! │                                                                         │
//! │  recalculate:                                                           │
//! │    both valid      → show result                                        │
//! │    both empty      → ₹0.00 / ₹0.00 / "Enter values to calculate"        │
//! │    otherwise       → keep previous result, show field errors            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use calc_core::format::plain;
use calc_core::{validate, Currency, GstCalculator, GstMode, GstResult, DEFAULT_PROMPT};

use crate::error::{AppError, AppResult};

const AMOUNT_LABEL: &str = "Amount";
const RATE_LABEL: &str = "GST rate";

/// What the GST form currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstView {
    pub mode: GstMode,
    pub gst_amount: String,
    pub total_amount: String,
    /// Price before GST: the amount itself in exclusive mode.
    pub base_amount: String,
    pub summary: String,
    pub amount_error: Option<String>,
    pub rate_error: Option<String>,
    pub active_preset: Option<f64>,
    /// Unrounded breakdown behind the display strings, if any.
    pub result: Option<GstResult>,
}

impl GstView {
    fn empty(currency: &Currency, mode: GstMode) -> Self {
        GstView {
            mode,
            gst_amount: currency.zero(),
            total_amount: currency.zero(),
            base_amount: currency.zero(),
            summary: DEFAULT_PROMPT.to_string(),
            amount_error: None,
            rate_error: None,
            active_preset: None,
            result: None,
        }
    }

    /// Field messages, in form order.
    pub fn errors(&self) -> Vec<&str> {
        [&self.amount_error, &self.rate_error]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

impl fmt::Display for GstView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mode:         {}", self.mode)?;
        writeln!(f, "GST amount:   {}", self.gst_amount)?;
        writeln!(f, "Total amount: {}", self.total_amount)?;
        writeln!(f, "Net price:    {}", self.base_amount)?;
        write!(f, "{}", self.summary)?;
        for error in self.errors() {
            write!(f, "\n! {}", error)?;
        }
        Ok(())
    }
}

/// Raw inputs plus the calculator that owns the mode toggle.
#[derive(Debug, Clone)]
pub struct GstFormState {
    amount: String,
    rate: String,
    presets: Vec<f64>,
    active_preset: Option<f64>,
    calculator: GstCalculator,
    view: GstView,
}

impl GstFormState {
    /// Creates an empty form.
    pub fn new(currency: Currency, mode: GstMode, presets: Vec<f64>) -> Self {
        let mut calculator = GstCalculator::with_currency(currency);
        calculator.set_mode(mode);
        let view = GstView::empty(calculator.currency(), mode);
        GstFormState {
            amount: String::new(),
            rate: String::new(),
            presets,
            active_preset: None,
            calculator,
            view,
        }
    }

    pub fn view(&self) -> &GstView {
        &self.view
    }

    pub fn mode(&self) -> GstMode {
        self.calculator.mode()
    }

    pub fn set_amount(&mut self, text: &str) -> &GstView {
        self.amount = text.to_string();
        self.recalculate();
        &self.view
    }

    /// Manual typing deselects any preset.
    pub fn set_rate(&mut self, text: &str) -> &GstView {
        self.rate = text.to_string();
        self.active_preset = None;
        self.recalculate();
        &self.view
    }

    /// Selects one of the configured preset rates.
    ///
    /// ## Errors
    /// [`AppError::InvalidInput`] if `rate` is not a configured preset.
    pub fn apply_preset(&mut self, rate: f64) -> AppResult<&GstView> {
        if !self.presets.contains(&rate) {
            let available: Vec<String> = self.presets.iter().map(|r| plain(*r)).collect();
            return Err(AppError::InvalidInput(format!(
                "{}% is not a GST preset. Available: {}",
                plain(rate),
                available.join(", ")
            )));
        }

        self.rate = plain(rate);
        self.active_preset = Some(rate);
        self.recalculate();
        Ok(&self.view)
    }

    pub fn set_mode(&mut self, mode: GstMode) -> &GstView {
        self.calculator.set_mode(mode);
        self.recalculate();
        &self.view
    }

    /// Clears both fields, errors and the preset. The mode is kept.
    pub fn reset(&mut self) -> &GstView {
        self.amount.clear();
        self.rate.clear();
        self.active_preset = None;
        self.view = GstView::empty(self.calculator.currency(), self.calculator.mode());
        debug!("GST form reset");
        &self.view
    }

    fn recalculate(&mut self) {
        let amount = validate(&self.amount);
        let rate = validate(&self.rate);

        self.view.mode = self.calculator.mode();
        self.view.active_preset = self.active_preset;
        self.view.amount_error = amount
            .as_ref()
            .err()
            .and_then(|e| e.field_message(AMOUNT_LABEL));
        self.view.rate_error = rate
            .as_ref()
            .err()
            .and_then(|e| e.field_message(RATE_LABEL));

        match (amount, rate) {
            (Ok(amount), Ok(rate)) => {
                match self.calculator.calculate(amount.value(), rate.value()) {
                    Ok(result) => {
                        debug!(
                            mode = %result.mode,
                            gst = result.gst_amount,
                            total = result.total_amount,
                            "GST calculated"
                        );
                        self.view.gst_amount = result.gst_amount_display();
                        self.view.total_amount = result.total_amount_display();
                        self.view.base_amount = result.base_amount_display();
                        self.view.summary = result.summary_text.clone();
                        self.view.result = Some(result);
                    }
                    Err(err) => warn!(%err, "GST calculation failed"),
                }
            }
            _ if self.amount.trim().is_empty() && self.rate.trim().is_empty() => {
                self.view = GstView::empty(self.calculator.currency(), self.calculator.mode());
                self.view.active_preset = self.active_preset;
            }
            _ => debug!("GST inputs incomplete, keeping previous result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::GST_PRESETS;

    fn form() -> GstFormState {
        GstFormState::new(Currency::default(), GstMode::Exclusive, GST_PRESETS.to_vec())
    }

    #[test]
    fn test_starts_with_default_view() {
        let form = form();
        let view = form.view();
        assert_eq!(view.gst_amount, "₹0.00");
        assert_eq!(view.total_amount, "₹0.00");
        assert_eq!(view.base_amount, "₹0.00");
        assert_eq!(view.summary, "Enter values to calculate");
        assert!(view.errors().is_empty());
    }

    #[test]
    fn test_live_typing_calculates_once_both_valid() {
        let mut form = form();
        let view = form.set_amount("100");
        assert_eq!(view.summary, DEFAULT_PROMPT);
        assert!(view.errors().is_empty());

        let view = form.set_rate("18");
        assert_eq!(view.gst_amount, "₹18.00");
        assert_eq!(view.total_amount, "₹118.00");
        assert_eq!(view.base_amount, "₹100.00");
        assert_eq!(view.summary, "On ₹100.00, GST @18% = ₹18.00, total = ₹118.00");
    }

    #[test]
    fn test_invalid_field_keeps_previous_result() {
        let mut form = form();
        form.set_amount("100");
        form.set_rate("18");

        let view = form.set_amount("-5");
        assert_eq!(view.total_amount, "₹118.00");
        assert_eq!(
            view.amount_error.as_deref(),
            Some("Amount must be a positive number")
        );

        let view = form.set_amount("");
        assert_eq!(view.total_amount, "₹118.00");
        assert!(view.amount_error.is_none());
    }

    #[test]
    fn test_clearing_both_fields_shows_default() {
        let mut form = form();
        form.set_amount("100");
        form.set_rate("18");
        form.set_amount("");
        let view = form.set_rate("");
        assert_eq!(view.summary, DEFAULT_PROMPT);
        assert_eq!(view.gst_amount, "₹0.00");
        assert!(view.result.is_none());
    }

    #[test]
    fn test_mode_switch_recalculates() {
        let mut form = form();
        form.set_amount("118");
        form.set_rate("18");
        let view = form.set_mode(GstMode::Inclusive);
        assert_eq!(view.gst_amount, "₹18.00");
        assert_eq!(view.total_amount, "₹118.00");
        assert_eq!(view.base_amount, "₹100.00");
        assert_eq!(
            view.summary,
            "Of ₹118.00, GST @18% = ₹18.00, you pay ₹118.00 (incl. GST)"
        );
        assert_eq!(view.mode, GstMode::Inclusive);
    }

    #[test]
    fn test_presets() {
        let mut form = form();
        form.set_amount("200");
        let view = form.apply_preset(12.0).unwrap();
        assert_eq!(view.active_preset, Some(12.0));
        assert_eq!(view.gst_amount, "₹24.00");

        let view = form.set_rate("5");
        assert_eq!(view.active_preset, None);

        assert!(matches!(
            form.apply_preset(7.0),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut form = form();
        form.set_mode(GstMode::Inclusive);
        form.set_amount("abc");
        form.apply_preset(18.0).unwrap();

        let view = form.reset();
        assert_eq!(view.summary, DEFAULT_PROMPT);
        assert!(view.errors().is_empty());
        assert_eq!(view.active_preset, None);
        assert_eq!(form.mode(), GstMode::Inclusive);
    }

    #[test]
    fn test_display_shows_net_price() {
        let mut form = form();
        form.set_mode(GstMode::Inclusive);
        form.set_amount("236");
        let text = form.set_rate("18").to_string();
        assert!(text.contains("Net price:    ₹200.00"));
        assert!(text.contains("GST amount:   ₹36.00"));
    }

    #[test]
    fn test_display_lists_errors() {
        let mut form = form();
        form.set_amount("abc");
        let text = form.set_rate("-1").to_string();
        assert!(text.contains("! Amount must be a positive number"));
        assert!(text.contains("! GST rate must be a positive number"));
    }
}
