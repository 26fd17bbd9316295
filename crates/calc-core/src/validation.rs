//! # Validation Module
//!
//! Turns a raw text field into a [`ValidatedNumber`].
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Keystroke in "Amount"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate(text) ← THIS MODULE                                          │
//! │       │                                                                 │
//! │       ├── blank?          → Empty       (silent, show "enter values")   │
//! │       ├── not finite num? → NotANumber  (field message)                 │
//! │       ├── below zero?     → Negative    (field message)                 │
//! │       │                                                                 │
//! │       └── OK → ValidatedNumber handed to the calculator                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::validation::validate;
//!
//! assert_eq!(validate("100").unwrap().value(), 100.0);
//! assert!(validate("").unwrap_err().is_empty());
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validated Number
// =============================================================================

/// A non-negative, finite number parsed from user text.
///
/// Only [`validate`] and [`TryFrom<f64>`] build one, so holding a
/// `ValidatedNumber` means `value >= 0 && value.is_finite()` already holds.
/// Deserializing goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, TS)]
#[ts(export)]
pub struct ValidatedNumber(f64);

impl ValidatedNumber {
    /// Returns the parsed value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<ValidatedNumber> for f64 {
    fn from(n: ValidatedNumber) -> Self {
        n.0
    }
}

impl TryFrom<f64> for ValidatedNumber {
    type Error = ValidationError;

    fn try_from(value: f64) -> ValidationResult<Self> {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber {
                input: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::Negative { value });
        }
        // Normalise -0.0 so it never renders as "-0.00"
        Ok(ValidatedNumber(value + 0.0))
    }
}

impl<'de> Deserialize<'de> for ValidatedNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        ValidatedNumber::try_from(value).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Validates a raw text field.
///
/// ## Rules
/// - Surrounding whitespace is ignored; blank text is [`ValidationError::Empty`]
/// - Must parse as a finite `f64` (`NaN`, `inf` are rejected)
/// - Must not be below zero (`-0` is accepted as `0`)
///
/// ## Example
/// ```rust
/// use calc_core::validation::validate;
/// use calc_core::ValidationError;
///
/// assert_eq!(validate(" 12.5 ").unwrap().value(), 12.5);
/// assert!(matches!(validate("-5"), Err(ValidationError::Negative { .. })));
/// assert!(matches!(validate("abc"), Err(ValidationError::NotANumber { .. })));
/// ```
pub fn validate(raw: &str) -> ValidationResult<ValidatedNumber> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => ValidatedNumber::try_from(value),
        _ => Err(ValidationError::NotANumber {
            input: text.to_string(),
        }),
    }
}

/// Validates two fields together, reporting the first failure.
///
/// Both calculators take a pair of inputs; this is the shared
/// "both valid or no calculation" gate.
pub fn validate_pair(
    first: &str,
    second: &str,
) -> ValidationResult<(ValidatedNumber, ValidatedNumber)> {
    let a = validate(first)?;
    let b = validate(second)?;
    Ok((a, b))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_examples() {
        assert_eq!(validate("").unwrap_err(), ValidationError::Empty);
        assert_eq!(
            validate("-5").unwrap_err(),
            ValidationError::Negative { value: -5.0 }
        );
        assert_eq!(
            validate("abc").unwrap_err(),
            ValidationError::NotANumber {
                input: "abc".to_string()
            }
        );
        assert_eq!(validate("100").unwrap().value(), 100.0);
    }

    #[test]
    fn test_validate_whitespace() {
        assert!(validate("   ").unwrap_err().is_empty());
        assert_eq!(validate("  42 ").unwrap().value(), 42.0);
    }

    #[test]
    fn test_validate_number_syntax() {
        assert_eq!(validate("0").unwrap().value(), 0.0);
        assert_eq!(validate(".5").unwrap().value(), 0.5);
        assert_eq!(validate("+3").unwrap().value(), 3.0);
        assert_eq!(validate("1e3").unwrap().value(), 1000.0);
        assert!(validate("12abc").is_err());
        assert!(validate("1,000").is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", "Infinity"] {
            assert!(
                matches!(validate(text), Err(ValidationError::NotANumber { .. })),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_negative_zero() {
        let n = validate("-0").unwrap();
        assert_eq!(n.value(), 0.0);
        assert!(n.value().is_sign_positive());
    }

    #[test]
    fn test_try_from_enforces_invariant() {
        assert_eq!(ValidatedNumber::try_from(12.5).unwrap().value(), 12.5);
        assert_eq!(
            ValidatedNumber::try_from(-5.0).unwrap_err(),
            ValidationError::Negative { value: -5.0 }
        );
        assert!(matches!(
            ValidatedNumber::try_from(f64::NAN),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(ValidatedNumber::try_from(-0.0).unwrap().value().is_sign_positive());
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let err = serde_json::from_str::<ValidatedNumber>("-5.0").unwrap_err();
        assert!(err.to_string().contains("-5 is negative"));

        let n: ValidatedNumber = serde_json::from_str("12.5").unwrap();
        assert_eq!(n.value(), 12.5);
        assert_eq!(serde_json::to_string(&n).unwrap(), "12.5");
    }

    #[test]
    fn test_validate_pair_reports_first_failure() {
        assert!(validate_pair("100", "18").is_ok());
        assert_eq!(validate_pair("", "x").unwrap_err(), ValidationError::Empty);
        assert!(matches!(
            validate_pair("100", "-1"),
            Err(ValidationError::Negative { .. })
        ));
    }
}
