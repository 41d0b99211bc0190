use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalculatorError;

/// display unit for a duration-style period input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Months,
    Years,
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodUnit::Months => write!(f, "months"),
            PeriodUnit::Years => write!(f, "years"),
        }
    }
}

impl FromStr for PeriodUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "months" => Ok(PeriodUnit::Months),
            "years" => Ok(PeriodUnit::Years),
            other => Err(CalculatorError::UnknownPeriodUnit {
                value: other.to_string(),
            }),
        }
    }
}

/// time period as entered by the user, before normalization to months
///
/// Constructed from raw input, normalized exactly once, then discarded;
/// nothing is retained between calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodSpec {
    Months(Decimal),
    Years(Decimal),
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl PeriodSpec {
    /// canonical month count consumed by the interest engines
    ///
    /// Month and year values pass through without rounding. A date range
    /// counts calendar year/month components only (day-of-month ignored)
    /// and yields 0 when either date is missing. Negative spans pass
    /// through unchanged; the validator rejects non-positive periods.
    pub fn normalize(&self) -> Decimal {
        match self {
            PeriodSpec::Months(value) => *value,
            PeriodSpec::Years(value) => *value * dec!(12),
            PeriodSpec::DateRange { start, end } => match (start, end) {
                (Some(start), Some(end)) => months_between(*start, *end),
                _ => Decimal::ZERO,
            },
        }
    }
}

/// whole calendar months between two dates, day-of-month ignored
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Decimal {
    let year_diff = end.year() - start.year();
    let month_diff = end.month() as i32 - start.month() as i32;
    Decimal::from(year_diff * 12 + month_diff)
}

/// unit-switch conversion: months shown as years, rounded to 2 decimals
pub fn months_to_years(months: Decimal) -> Decimal {
    (months / dec!(12)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// unit-switch conversion: years shown as months, rounded to whole months
pub fn years_to_months(years: Decimal) -> Decimal {
    (years * dec!(12)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
