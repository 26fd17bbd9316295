//! # calc-core: Pure Calculation Logic
//!
//! This crate is the computational core behind the GST and percentage
//! calculators. Everything here is a pure function or a small owned state
//! object; rendering, animation and config live in the presentation layer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Calc Suite Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation (calc-cli, or a web page)            │   │
//! │  │    raw field text ──► validate ──► calculate ──► render text    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │ validation │  │    gst    │  │ percentage │  │  format  │  │   │
//! │  │   │  validate  │  │ GstCalc   │  │ PctCalc    │  │ Currency │  │   │
//! │  │   └────────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Raw text → non-negative finite number
//! - [`gst`] - Exclusive / inclusive GST
//! - [`percentage`] - Percentage of a value
//! - [`types`] - Result types and the GST mode
//! - [`format`] - Two-decimal display formatting
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{validate, GstCalculator, PercentageCalculator};
//!
//! let amount = validate("100").unwrap();
//! let rate = validate("18").unwrap();
//!
//! let gst = GstCalculator::new().calculate(amount.value(), rate.value()).unwrap();
//! assert_eq!(gst.total_amount_display(), "₹118.00");
//!
//! let pct = PercentageCalculator::new().calculate(200.0, 15.0);
//! assert_eq!(pct.display_text, "15% of 200 = 30.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod gst;
pub mod percentage;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CalcError, CalcResult, ValidationError};
pub use format::{Currency, DEFAULT_PROMPT};
pub use gst::{calculate_gst, GstCalculator};
pub use percentage::PercentageCalculator;
pub use types::*;
pub use validation::{validate, ValidatedNumber};
