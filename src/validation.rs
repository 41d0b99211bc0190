use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::period::PeriodUnit;

pub const MAX_PRINCIPAL: Decimal = dec!(10000000);
pub const MAX_RATE_PERCENT: Decimal = dec!(100);
pub const MAX_PERIOD_MONTHS: Decimal = dec!(1200);
pub const MAX_PERIOD_YEARS: Decimal = dec!(100);

/// outcome of validating a full set of calculation inputs
///
/// Built fresh on every call and never mutated afterwards. Errors are
/// user-facing strings in a fixed order; a raised error never aborts the
/// remaining checks, so several messages can surface together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// validate principal, monthly rate, and canonical month count
///
/// `None` marks a field the user never filled in; it is distinct from an
/// entered zero. A present rate of exactly 0 is acceptable, an absent
/// rate is not.
pub fn validate_inputs(
    principal: Option<Decimal>,
    rate_percent: Option<Decimal>,
    period_months: Option<Decimal>,
) -> ValidationResult {
    let mut errors = Vec::new();

    match principal {
        None => errors.push("Amount must be greater than 0".to_string()),
        Some(amount) => {
            if amount <= Decimal::ZERO {
                errors.push("Amount must be greater than 0".to_string());
            }
            if amount > MAX_PRINCIPAL {
                errors.push("Amount cannot exceed ₹10,000,000".to_string());
            }
        }
    }

    match rate_percent {
        None => errors.push("Interest rate is required".to_string()),
        Some(rate) => {
            if rate < Decimal::ZERO {
                errors.push("Interest rate cannot be negative".to_string());
            }
            if rate > MAX_RATE_PERCENT {
                errors.push("Interest rate cannot exceed 100%".to_string());
            }
        }
    }

    match period_months {
        None => errors.push("Period must be greater than 0".to_string()),
        Some(months) => {
            if months <= Decimal::ZERO {
                errors.push("Period must be greater than 0".to_string());
            }
            if months > MAX_PERIOD_MONTHS {
                errors.push("Period cannot exceed 1200 months".to_string());
            }
        }
    }

    ValidationResult::from_errors(errors)
}

/// per-field check for the principal amount, for live form feedback
pub fn validate_amount_field(value: Option<Decimal>) -> Option<String> {
    match value {
        None => Some("Amount must be greater than 0".to_string()),
        Some(amount) if amount <= Decimal::ZERO => {
            Some("Amount must be greater than 0".to_string())
        }
        Some(amount) if amount > MAX_PRINCIPAL => {
            Some("Amount cannot exceed ₹10,000,000".to_string())
        }
        Some(_) => None,
    }
}

/// per-field check for the monthly rate; zero is a legitimate rate
pub fn validate_rate_field(value: Option<Decimal>) -> Option<String> {
    match value {
        None => Some("Interest rate is required".to_string()),
        Some(rate) if rate < Decimal::ZERO => {
            Some("Interest rate cannot be negative".to_string())
        }
        Some(rate) if rate > MAX_RATE_PERCENT => {
            Some("Interest rate cannot exceed 100%".to_string())
        }
        Some(_) => None,
    }
}

/// per-field check for the period in its active display unit
pub fn validate_period_field(value: Option<Decimal>, unit: PeriodUnit) -> Option<String> {
    let (limit, limit_message) = match unit {
        PeriodUnit::Months => (MAX_PERIOD_MONTHS, "Period cannot exceed 1200 months"),
        PeriodUnit::Years => (MAX_PERIOD_YEARS, "Period cannot exceed 100 years"),
    };

    match value {
        None => Some("Period must be greater than 0".to_string()),
        Some(period) if period <= Decimal::ZERO => {
            Some("Period must be greater than 0".to_string())
        }
        Some(period) if period > limit => Some(limit_message.to_string()),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs_produce_no_errors() {
        let result = validate_inputs(Some(dec!(10000)), Some(dec!(2)), Some(dec!(12)));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_multiple_failures_surface_together() {
        let result = validate_inputs(Some(dec!(-1000)), Some(dec!(150)), Some(dec!(1500)));
        assert!(!result.is_valid);
        assert!(result.errors.len() >= 3);
        assert_eq!(result.errors[0], "Amount must be greater than 0");
        assert_eq!(result.errors[1], "Interest rate cannot exceed 100%");
        assert_eq!(result.errors[2], "Period cannot exceed 1200 months");
    }

    #[test]
    fn test_boundaries_inclusive() {
        let result = validate_inputs(Some(dec!(10000000)), Some(dec!(100)), Some(dec!(1200)));
        assert!(result.is_valid);
    }

    #[test]
    fn test_boundaries_exclusive_above() {
        let result = validate_inputs(
            Some(dec!(10000001)),
            Some(dec!(100.01)),
            Some(dec!(1201)),
        );
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_unset_fields_are_rejected() {
        let result = validate_inputs(None, None, None);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                "Amount must be greater than 0",
                "Interest rate is required",
                "Period must be greater than 0",
            ]
        );
    }

    #[test]
    fn test_zero_rate_is_valid_but_unset_rate_is_not() {
        let result = validate_inputs(Some(dec!(10000)), Some(Decimal::ZERO), Some(dec!(12)));
        assert!(result.is_valid);

        let result = validate_inputs(Some(dec!(10000)), None, Some(dec!(12)));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Interest rate is required"]);
    }

    #[test]
    fn test_amount_field_feedback() {
        assert_eq!(
            validate_amount_field(Some(dec!(0))),
            Some("Amount must be greater than 0".to_string())
        );
        assert_eq!(
            validate_amount_field(Some(dec!(20000000))),
            Some("Amount cannot exceed ₹10,000,000".to_string())
        );
        assert_eq!(validate_amount_field(Some(dec!(500))), None);
    }

    #[test]
    fn test_rate_field_accepts_zero() {
        assert_eq!(validate_rate_field(Some(Decimal::ZERO)), None);
        assert_eq!(
            validate_rate_field(None),
            Some("Interest rate is required".to_string())
        );
    }

    #[test]
    fn test_period_field_limit_follows_unit() {
        assert_eq!(validate_period_field(Some(dec!(101)), PeriodUnit::Months), None);
        assert_eq!(
            validate_period_field(Some(dec!(101)), PeriodUnit::Years),
            Some("Period cannot exceed 100 years".to_string())
        );
        assert_eq!(validate_period_field(Some(dec!(100)), PeriodUnit::Years), None);
        assert_eq!(
            validate_period_field(Some(dec!(1201)), PeriodUnit::Months),
            Some("Period cannot exceed 1200 months".to_string())
        );
    }
}
