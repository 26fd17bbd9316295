//! # Percentage Calculator
//!
//! "What is P% of X?": `result = base_value × percentage / 100`.
//!
//! Stateless: the calculator is a unit struct so the presentation layer can
//! hold one next to the [`crate::gst::GstCalculator`] and call both the
//! same way.

use crate::error::CalcResult;
use crate::format::{plain, two_decimals};
use crate::types::PercentageResult;
use crate::validation::validate_pair;

/// Percentage-of-value calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentageCalculator;

impl PercentageCalculator {
    pub fn new() -> Self {
        PercentageCalculator
    }

    /// Computes `percentage` percent of `base_value`.
    ///
    /// Inputs are expected to be validated; no failure case exists.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::percentage::PercentageCalculator;
    ///
    /// let r = PercentageCalculator::new().calculate(200.0, 15.0);
    /// assert_eq!(r.result, 30.0);
    /// assert_eq!(r.display_text, "15% of 200 = 30.00");
    /// ```
    pub fn calculate(&self, base_value: f64, percentage: f64) -> PercentageResult {
        let result = base_value * percentage / 100.0;
        PercentageResult {
            base_value,
            percentage,
            result,
            display_text: format!(
                "{}% of {} = {}",
                plain(percentage),
                plain(base_value),
                two_decimals(result)
            ),
        }
    }

    /// Validates both raw fields, then computes.
    pub fn calculate_raw(&self, base_value: &str, percentage: &str) -> CalcResult<PercentageResult> {
        let (base_value, percentage) = validate_pair(base_value, percentage)?;
        Ok(self.calculate(base_value.value(), percentage.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalcError, ValidationError};

    #[test]
    fn test_basic_percentage() {
        let r = PercentageCalculator::new().calculate(200.0, 15.0);
        assert_eq!(r.result_display(), "30.00");
        assert_eq!(r.base_value, 200.0);
        assert_eq!(r.percentage, 15.0);
    }

    #[test]
    fn test_display_text_echoes_inputs() {
        let calc = PercentageCalculator::new();
        assert_eq!(calc.calculate(80.5, 12.5).display_text, "12.5% of 80.5 = 10.06");
        assert_eq!(calc.calculate(0.0, 50.0).display_text, "50% of 0 = 0.00");
        assert_eq!(calc.calculate(40.0, 250.0).display_text, "250% of 40 = 100.00");
    }

    #[test]
    fn test_half_cent_result_rounds_up() {
        let r = PercentageCalculator::new().calculate(1.0, 12.5);
        assert_eq!(r.result, 0.125);
        assert_eq!(r.display_text, "12.5% of 1 = 0.13");
    }

    #[test]
    fn test_result_is_unrounded() {
        let r = PercentageCalculator::new().calculate(10.0, 33.3333);
        assert!((r.result - 3.33333).abs() < 1e-9);
        assert_eq!(r.result_display(), "3.33");
    }

    #[test]
    fn test_referential_transparency() {
        let calc = PercentageCalculator::new();
        assert_eq!(calc.calculate(123.45, 7.0), calc.calculate(123.45, 7.0));
    }

    #[test]
    fn test_calculate_raw() {
        let calc = PercentageCalculator::new();
        assert_eq!(calc.calculate_raw("200", "15").unwrap().result, 30.0);
        assert!(matches!(
            calc.calculate_raw("", ""),
            Err(CalcError::Validation(ValidationError::Empty))
        ));
        assert!(matches!(
            calc.calculate_raw("200", "ten"),
            Err(CalcError::Validation(ValidationError::NotANumber { .. }))
        ));
    }
}
