//! # GST Calculator
//!
//! Goods and Services Tax in both directions: added on top of a net
//! price, or extracted from a price that already includes it.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EXCLUSIVE                                                              │
//! │    gst   = amount × rate / 100                                          │
//! │    total = amount + gst                                                 │
//! │    base  = amount                                                       │
//! │                                                                         │
//! │  INCLUSIVE                                                              │
//! │    base  = amount × 100 / (100 + rate)                                  │
//! │    gst   = amount − base                                                │
//! │    total = amount                                                       │
//! │                                                                         │
//! │  rate = −100 makes the inclusive divisor zero → DivisionByZero          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::gst::GstCalculator;
//! use calc_core::GstMode;
//!
//! let mut calc = GstCalculator::new();
//! let r = calc.calculate(100.0, 18.0).unwrap();
//! assert_eq!(r.gst_amount_display(), "₹18.00");
//! assert_eq!(r.total_amount_display(), "₹118.00");
//!
//! calc.set_mode(GstMode::Inclusive);
//! let r = calc.calculate(118.0, 18.0).unwrap();
//! assert_eq!(r.gst_amount_display(), "₹18.00");
//! ```

use crate::error::{CalcError, CalcResult};
use crate::format::{plain, Currency};
use crate::types::{GstMode, GstResult};
use crate::validation::validate_pair;

// =============================================================================
// Free Function
// =============================================================================

/// Computes GST for an explicit mode with the default currency.
///
/// Inputs are expected to be validated already; only the inclusive
/// divide-by-zero case is checked here.
pub fn calculate_gst(mode: GstMode, amount: f64, rate: f64) -> CalcResult<GstResult> {
    compute(mode, &Currency::default(), amount, rate)
}

fn compute(mode: GstMode, currency: &Currency, amount: f64, rate: f64) -> CalcResult<GstResult> {
    let (gst_amount, total_amount, base_amount) = match mode {
        GstMode::Exclusive => {
            let gst = amount * rate / 100.0;
            (gst, amount + gst, amount)
        }
        GstMode::Inclusive => {
            let divisor = 100.0 + rate;
            if divisor == 0.0 {
                return Err(CalcError::DivisionByZero { rate });
            }
            let base = (amount * 100.0) / divisor;
            (amount - base, amount, base)
        }
    };

    let summary_text = match mode {
        GstMode::Exclusive => format!(
            "On {}, GST @{}% = {}, total = {}",
            currency.amount(amount),
            plain(rate),
            currency.amount(gst_amount),
            currency.amount(total_amount)
        ),
        GstMode::Inclusive => format!(
            "Of {}, GST @{}% = {}, you pay {} (incl. GST)",
            currency.amount(amount),
            plain(rate),
            currency.amount(gst_amount),
            currency.amount(total_amount)
        ),
    };

    Ok(GstResult {
        mode,
        amount,
        rate,
        gst_amount,
        total_amount,
        base_amount,
        summary_text,
        currency: currency.clone(),
    })
}

// =============================================================================
// Calculator
// =============================================================================

/// GST calculator owning the current mode toggle.
///
/// ## State
/// The mode is the only state. It changes solely through
/// [`GstCalculator::set_mode`]; `calculate` never mutates it, so repeated
/// calls with identical inputs yield identical results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GstCalculator {
    mode: GstMode,
    currency: Currency,
}

impl GstCalculator {
    /// Creates a calculator in exclusive mode with the default currency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator that renders amounts with `currency`.
    pub fn with_currency(currency: Currency) -> Self {
        GstCalculator {
            mode: GstMode::default(),
            currency,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> GstMode {
        self.mode
    }

    /// Currency used in display strings.
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Replaces the mode. Idempotent; the caller re-runs `calculate`.
    pub fn set_mode(&mut self, mode: GstMode) {
        self.mode = mode;
    }

    /// Computes GST for already-validated inputs.
    ///
    /// ## Errors
    /// [`CalcError::DivisionByZero`] in inclusive mode when `rate == -100`.
    pub fn calculate(&self, amount: f64, rate: f64) -> CalcResult<GstResult> {
        compute(self.mode, &self.currency, amount, rate)
    }

    /// Validates both raw fields, then computes.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::gst::GstCalculator;
    /// use calc_core::{CalcError, ValidationError};
    ///
    /// let calc = GstCalculator::new();
    /// assert!(calc.calculate_raw("100", "18").is_ok());
    /// assert!(matches!(
    ///     calc.calculate_raw("100", ""),
    ///     Err(CalcError::Validation(ValidationError::Empty))
    /// ));
    /// ```
    pub fn calculate_raw(&self, amount: &str, rate: &str) -> CalcResult<GstResult> {
        let (amount, rate) = validate_pair(amount, rate)?;
        self.calculate(amount.value(), rate.value())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
