use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::format_currency;
use crate::decimal::Rate;
use crate::interest::{CalculationResult, CompoundingFrequency, InterestType};

/// display-ready calculation summary
///
/// Every amount is currency-formatted here, the one rounding boundary;
/// the numeric result it was built from stays unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationSummary {
    pub interest_type: String,
    pub monthly_rate: String,
    pub time_period: String,
    pub principal: String,
    pub interest_earned: String,
    pub final_amount: String,
}

impl CalculationSummary {
    pub fn new(
        interest_type: InterestType,
        frequency: CompoundingFrequency,
        monthly_rate: Rate,
        months: Decimal,
        result: &CalculationResult,
    ) -> Self {
        let interest_type = match interest_type {
            InterestType::Simple => "Simple Interest".to_string(),
            InterestType::Compound => format!("Compound Interest ({frequency})"),
        };

        let years = (months / dec!(12)).to_f64().unwrap_or_default();
        let time_period = format!("{} months ({years:.1} years)", months.normalize());

        CalculationSummary {
            interest_type,
            monthly_rate: monthly_rate.to_string(),
            time_period,
            principal: format_currency(result.principal),
            interest_earned: format_currency(result.interest_earned),
            final_amount: format_currency(result.final_amount),
        }
    }

    /// convert to pretty-printed json string
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for CalculationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculation Summary")?;
        writeln!(f, "  Interest Type: {}", self.interest_type)?;
        writeln!(f, "  Monthly Rate: {}", self.monthly_rate)?;
        writeln!(f, "  Time Period: {}", self.time_period)?;
        writeln!(f, "  Principal Amount: {}", self.principal)?;
        writeln!(f, "  Interest Charged: {}", self.interest_earned)?;
        write!(f, "  Final Amount: {}", self.final_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;

    fn reference_result() -> CalculationResult {
        CalculationResult::new(
            Money::from_major(10_000),
            Money::from_str_exact("12682.417945625645").unwrap(),
        )
    }

    #[test]
    fn test_summary_fields() {
        let summary = CalculationSummary::new(
            InterestType::Compound,
            CompoundingFrequency::Monthly,
            Rate::from_percentage(dec!(2)),
            dec!(12),
            &reference_result(),
        );

        assert_eq!(summary.interest_type, "Compound Interest (monthly)");
        assert_eq!(summary.monthly_rate, "2%");
        assert_eq!(summary.time_period, "12 months (1.0 years)");
        assert_eq!(summary.principal, "₹10,000.00");
        assert_eq!(summary.interest_earned, "₹2,682.42");
        assert_eq!(summary.final_amount, "₹12,682.42");
    }

    #[test]
    fn test_simple_interest_label() {
        let result = CalculationResult::new(Money::from_major(10_000), Money::from_major(12_400));
        let summary = CalculationSummary::new(
            InterestType::Simple,
            CompoundingFrequency::Monthly,
            Rate::from_percentage(dec!(2)),
            dec!(17),
            &result,
        );
        assert_eq!(summary.interest_type, "Simple Interest");
        assert_eq!(summary.time_period, "17 months (1.4 years)");
    }

    #[test]
    fn test_display_block() {
        let result = CalculationResult::new(Money::from_major(10_000), Money::from_major(12_400));
        let summary = CalculationSummary::new(
            InterestType::Simple,
            CompoundingFrequency::Monthly,
            Rate::from_percentage(dec!(2)),
            dec!(12),
            &result,
        );
        let rendered = summary.to_string();
        assert!(rendered.starts_with("Calculation Summary"));
        assert!(rendered.contains("Interest Charged: ₹2,400.00"));
        assert!(rendered.ends_with("Final Amount: ₹12,400.00"));
    }

    #[test]
    fn test_json_round_trip() {
        let summary = CalculationSummary::new(
            InterestType::Compound,
            CompoundingFrequency::Yearly,
            Rate::from_percentage(dec!(2)),
            dec!(12),
            &reference_result(),
        );
        let back: CalculationSummary = serde_json::from_str(&summary.json()).unwrap();
        assert_eq!(back, summary);
    }
}
