//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  ├── ValidationError  - Raw text field rejected                        │
//! │  └── CalcError        - Calculation could not produce a result         │
//! │                                                                         │
//! │  calc-cli errors (separate crate)                                      │
//! │  └── AppError         - Config, I/O and user-facing failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CalcError → AppError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverability
//! Every error here is recoverable locally. The caller suppresses the
//! calculation and, for everything except [`ValidationError::Empty`],
//! shows a field-level message.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for a single raw text field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Nothing was entered yet.
    ///
    /// Not a user-facing error: the UI shows its "enter values" state.
    #[error("value is required")]
    Empty,

    /// The text is not a finite number.
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    /// The number parsed but is below zero.
    #[error("{value} is negative")]
    Negative { value: f64 },
}

impl ValidationError {
    /// True for the silent "nothing entered" case.
    pub fn is_empty(&self) -> bool {
        matches!(self, ValidationError::Empty)
    }

    /// Message to show next to the field, if any.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::ValidationError;
    ///
    /// let err = ValidationError::Negative { value: -5.0 };
    /// assert_eq!(
    ///     err.field_message("Amount").as_deref(),
    ///     Some("Amount must be a positive number")
    /// );
    /// assert_eq!(ValidationError::Empty.field_message("Amount"), None);
    /// ```
    pub fn field_message(&self, label: &str) -> Option<String> {
        match self {
            ValidationError::Empty => None,
            ValidationError::NotANumber { .. } | ValidationError::Negative { .. } => {
                Some(format!("{} must be a positive number", label))
            }
        }
    }
}

// =============================================================================
// Calculation Error
// =============================================================================

/// Errors raised by the calculators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Inclusive GST with `rate = -100` would divide by zero.
    ///
    /// Unreachable through [`crate::validation::validate`], which rejects
    /// negative rates. Only a caller that skips validation can hit it.
    #[error("GST rate {rate}% makes the inclusive divisor zero")]
    DivisionByZero { rate: f64 },

    /// Mode text did not name a known GST mode.
    #[error("Unknown GST mode: '{0}'. Valid options: exclusive, inclusive")]
    UnknownMode(String),

    /// One of the input fields failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;
