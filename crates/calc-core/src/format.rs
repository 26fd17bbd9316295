//! # Display Formatting
//!
//! Turns unrounded calculation results into the strings a UI shows.
//!
//! ## Rounding Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Computation  ──► f64, full precision, never rounded                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Display      ──► two fractional digits ("18.00", "₹118.00")            │
//! │                                                                         │
//! │  Rounding happens ONLY here, at the display edge. Results keep the     │
//! │  raw values so later calculations do not compound rounding error.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Text shown while no calculation can run.
pub const DEFAULT_PROMPT: &str = "Enter values to calculate";

/// Currency symbol used when none is configured (Indian rupee).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Currency
// =============================================================================

/// Currency symbol prefixed to monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its display symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Currency(symbol.into())
    }

    /// Returns the display symbol.
    pub fn symbol(&self) -> &str {
        &self.0
    }

    /// Formats an amount with this symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::format::Currency;
    ///
    /// assert_eq!(Currency::default().amount(118.0), "₹118.00");
    /// assert_eq!(Currency::new("$").amount(0.5), "$0.50");
    /// ```
    pub fn amount(&self, value: f64) -> String {
        money(&self.0, value)
    }

    /// The zero amount shown in the default view.
    pub fn zero(&self) -> String {
        self.amount(0.0)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Number Formatting
// =============================================================================

/// Formats with exactly two fractional digits.
///
/// Rounds half away from zero, so `0.125` shows as `0.13`, matching what
/// a browser's `toFixed(2)` prints for the same value.
pub fn two_decimals(value: f64) -> String {
    // A value is an exact x.xx5 tie only when it is an odd multiple of 1/8.
    // Scaling by 8 and 100 is exact for these, so `round` sees the real tie.
    let eighths = value * 8.0;
    let rounded = if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    };

    // -0.0 and tiny negatives from float noise must not print as "-0.00"
    if rounded == "-0.00" {
        "0.00".to_string()
    } else {
        rounded
    }
}

/// Formats `symbol` followed by a two-decimal amount.
pub fn money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, two_decimals(value))
}

/// Shortest form of a user-entered number: `18`, `12.5`, `0.25`.
///
/// Used where the UI echoes an input back (rates, base values)
/// rather than a computed amount.
pub fn plain(value: f64) -> String {
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        assert_eq!(two_decimals(18.0), "18.00");
        assert_eq!(two_decimals(0.0), "0.00");
        assert_eq!(two_decimals(2.0 / 3.0), "0.67");
        assert_eq!(two_decimals(1234.5), "1234.50");
    }

    #[test]
    fn test_two_decimals_rounds_ties_away_from_zero() {
        assert_eq!(two_decimals(0.125), "0.13");
        assert_eq!(two_decimals(2.625), "2.63");
        assert_eq!(two_decimals(0.375), "0.38");
        assert_eq!(two_decimals(-0.125), "-0.13");
        // Not exact ties in binary: rounded by their true value
        assert_eq!(two_decimals(1.005), "1.00");
        assert_eq!(two_decimals(0.145), "0.14");
        // Quarters are already exact at two digits
        assert_eq!(two_decimals(0.25), "0.25");
    }

    #[test]
    fn test_two_decimals_never_negative_zero() {
        assert_eq!(two_decimals(-0.0), "0.00");
        assert_eq!(two_decimals(-1e-12), "0.00");
        assert_eq!(two_decimals(-1.5), "-1.50");
    }

    #[test]
    fn test_plain() {
        assert_eq!(plain(18.0), "18");
        assert_eq!(plain(12.5), "12.5");
        assert_eq!(plain(0.1), "0.1");
        assert_eq!(plain(-0.0), "0");
    }

    #[test]
    fn test_currency() {
        let rupee = Currency::default();
        assert_eq!(rupee.symbol(), "₹");
        assert_eq!(rupee.zero(), "₹0.00");
        assert_eq!(Currency::new("€").amount(7.126), "€7.13");
        assert_eq!(rupee.to_string(), "₹");
    }
}
