use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interest::{CompoundingFrequency, InterestType};
use crate::period::PeriodSpec;
use crate::validation::{validate_inputs, ValidationResult};

/// one calculation request, as collected from a caller's form
///
/// Scalar fields are `None` while the user has not entered them; an
/// entered zero stays `Some(0)`. `compounding_frequency` is only
/// meaningful when `interest_type` is `Compound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub principal: Option<Decimal>,
    pub monthly_rate_percent: Option<Decimal>,
    pub period: Option<PeriodSpec>,
    pub interest_type: InterestType,
    #[serde(default = "default_frequency")]
    pub compounding_frequency: CompoundingFrequency,
}

fn default_frequency() -> CompoundingFrequency {
    CompoundingFrequency::Monthly
}

impl CalculationInput {
    /// simple-interest request
    pub fn simple(principal: Decimal, monthly_rate_percent: Decimal, period: PeriodSpec) -> Self {
        CalculationInput {
            principal: Some(principal),
            monthly_rate_percent: Some(monthly_rate_percent),
            period: Some(period),
            interest_type: InterestType::Simple,
            compounding_frequency: CompoundingFrequency::Monthly,
        }
    }

    /// compound-interest request
    pub fn compound(
        principal: Decimal,
        monthly_rate_percent: Decimal,
        period: PeriodSpec,
        frequency: CompoundingFrequency,
    ) -> Self {
        CalculationInput {
            principal: Some(principal),
            monthly_rate_percent: Some(monthly_rate_percent),
            period: Some(period),
            interest_type: InterestType::Compound,
            compounding_frequency: frequency,
        }
    }

    /// canonical month count for this request's period, if one was entered
    pub fn period_months(&self) -> Option<Decimal> {
        self.period.as_ref().map(PeriodSpec::normalize)
    }

    /// validate the request without running an engine
    pub fn validate(&self) -> ValidationResult {
        validate_inputs(self.principal, self.monthly_rate_percent, self.period_months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_uses_normalized_months() {
        // 150 years normalizes to 1800 months, over the limit
        let input = CalculationInput::simple(dec!(1000), dec!(1), PeriodSpec::Years(dec!(150)));
        let result = input.validate();
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Period cannot exceed 1200 months"]);
    }

    #[test]
    fn test_unset_fields_stay_unset_through_serde() {
        let input = CalculationInput {
            principal: None,
            monthly_rate_percent: Some(dec!(0)),
            period: Some(PeriodSpec::Months(dec!(12))),
            interest_type: InterestType::Simple,
            compounding_frequency: CompoundingFrequency::Monthly,
        };
        let json = serde_json::to_string(&input).unwrap();
        let back: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.principal, None);
        assert_eq!(back.monthly_rate_percent, Some(dec!(0)));
    }

    #[test]
    fn test_json_round_trip_with_date_range() {
        let input = CalculationInput::compound(
            dec!(10000),
            dec!(2),
            PeriodSpec::DateRange {
                start: chrono::NaiveDate::from_ymd_opt(2020, 1, 1),
                end: chrono::NaiveDate::from_ymd_opt(2021, 6, 1),
            },
            CompoundingFrequency::Yearly,
        );
        let json = serde_json::to_string(&input).unwrap();
        let back: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
        assert_eq!(back.period_months(), Some(dec!(17)));
    }
}
