//! # Domain Types
//!
//! Value types produced and consumed by the calculators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    GstMode      │   │   GstResult     │   │PercentageResult │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Exclusive      │   │  gst_amount     │   │  result         │       │
//! │  │  Inclusive      │   │  total_amount   │   │  display_text   │       │
//! │  └─────────────────┘   │  base_amount    │   └─────────────────┘       │
//! │                        │  summary_text   │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value here is transient: recomputed on each input change,
//! never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CalcError;
use crate::format::{two_decimals, Currency};

/// GST slabs offered as one-tap presets, in percent.
pub const GST_PRESETS: [f64; 5] = [3.0, 5.0, 12.0, 18.0, 28.0];

// =============================================================================
// GST Mode
// =============================================================================

/// Whether the entered amount excludes or already includes GST.
///
/// ## Mode Behavior
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  EXCLUSIVE (Default)              │  INCLUSIVE                          │
/// │  ─────────────────────            │  ─────────────                      │
/// │  amount is the net price          │  amount is what the customer pays   │
/// │  GST is added on top              │  GST is extracted from it           │
/// │                                   │                                     │
/// │  100 @18% → gst 18, total 118     │  118 @18% → gst 18, total 118       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GstMode {
    /// GST is added on top of the amount.
    #[default]
    Exclusive,

    /// GST is contained within the amount.
    Inclusive,
}

impl GstMode {
    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GstMode::Exclusive => GstMode::Inclusive,
            GstMode::Inclusive => GstMode::Exclusive,
        }
    }
}

impl fmt::Display for GstMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GstMode::Exclusive => write!(f, "exclusive"),
            GstMode::Inclusive => write!(f, "inclusive"),
        }
    }
}

impl std::str::FromStr for GstMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" | "excl" | "add" => Ok(GstMode::Exclusive),
            "inclusive" | "incl" | "remove" => Ok(GstMode::Inclusive),
            other => Err(CalcError::UnknownMode(other.to_string())),
        }
    }
}

// =============================================================================
// GST Result
// =============================================================================

/// Outcome of one GST calculation.
///
/// Numeric fields hold unrounded values; the `*_display` helpers and
/// `summary_text` are the rounded, user-facing strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GstResult {
    /// Mode the calculation ran in.
    pub mode: GstMode,

    /// Amount as entered.
    pub amount: f64,

    /// GST rate in percent, as entered.
    pub rate: f64,

    /// Tax portion.
    pub gst_amount: f64,

    /// What the customer pays.
    pub total_amount: f64,

    /// Net price before GST.
    pub base_amount: f64,

    /// One-line human summary of the calculation.
    pub summary_text: String,

    /// Symbol used in the display strings.
    pub currency: Currency,
}

impl GstResult {
    /// GST amount as shown to the user, e.g. `₹18.00`.
    pub fn gst_amount_display(&self) -> String {
        self.currency.amount(self.gst_amount)
    }

    /// Total amount as shown to the user, e.g. `₹118.00`.
    pub fn total_amount_display(&self) -> String {
        self.currency.amount(self.total_amount)
    }

    /// Net price as shown to the user.
    pub fn base_amount_display(&self) -> String {
        self.currency.amount(self.base_amount)
    }
}

// =============================================================================
// Percentage Result
// =============================================================================

/// Outcome of one percentage-of-value calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PercentageResult {
    /// Value the percentage is taken of.
    pub base_value: f64,

    /// Percentage, as entered.
    pub percentage: f64,

    /// `base_value * percentage / 100`, unrounded.
    pub result: f64,

    /// e.g. `15% of 200 = 30.00`
    pub display_text: String,
}

impl PercentageResult {
    /// Result rounded to two decimals for display.
    pub fn result_display(&self) -> String {
        two_decimals(self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_mode_parsing() {
        assert_eq!("exclusive".parse::<GstMode>().unwrap(), GstMode::Exclusive);
        assert_eq!("EXCL".parse::<GstMode>().unwrap(), GstMode::Exclusive);
        assert_eq!("inclusive".parse::<GstMode>().unwrap(), GstMode::Inclusive);
        assert_eq!(" remove ".parse::<GstMode>().unwrap(), GstMode::Inclusive);
        assert!(matches!(
            "sideways".parse::<GstMode>(),
            Err(CalcError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_gst_mode_default_and_toggle() {
        assert_eq!(GstMode::default(), GstMode::Exclusive);
        assert_eq!(GstMode::Exclusive.toggle(), GstMode::Inclusive);
        assert_eq!(GstMode::Inclusive.toggle().toggle(), GstMode::Inclusive);
        assert_eq!(GstMode::Inclusive.to_string(), "inclusive");
    }

    #[test]
    fn test_gst_mode_serialization() {
        let json = serde_json::to_string(&GstMode::Inclusive).unwrap();
        assert_eq!(json, "\"inclusive\"");
        let mode: GstMode = serde_json::from_str("\"exclusive\"").unwrap();
        assert_eq!(mode, GstMode::Exclusive);
    }

    #[test]
    fn test_gst_presets_are_sorted_slabs() {
        assert!(GST_PRESETS.windows(2).all(|w| w[0] < w[1]));
        assert!(GST_PRESETS.contains(&18.0));
    }
}
