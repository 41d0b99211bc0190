pub mod compound;
pub mod simple;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::CalculationInput;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::period::PeriodSpec;
use crate::validation::{validate_inputs, ValidationResult};

pub use compound::calculate_compound_interest;
pub use simple::calculate_simple_interest;

/// interest accrual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    Compound,
}

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Monthly,
    Yearly,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Yearly => 1,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundingFrequency::Monthly => write!(f, "monthly"),
            CompoundingFrequency::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for CompoundingFrequency {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "yearly" => Ok(CompoundingFrequency::Yearly),
            other => Err(CalculatorError::UnknownFrequency {
                value: other.to_string(),
            }),
        }
    }
}

/// numeric outcome of one calculation, unrounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub principal: Money,
    pub final_amount: Money,
    pub interest_earned: Money,
}

impl CalculationResult {
    pub fn new(principal: Money, final_amount: Money) -> Self {
        CalculationResult {
            principal,
            final_amount,
            interest_earned: final_amount - principal,
        }
    }
}

/// outcome of running a full calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculationOutcome {
    /// inputs passed validation; the engine produced a result
    Valid(CalculationResult),
    /// inputs failed validation; nothing was computed
    Invalid(ValidationResult),
}

/// run one calculation request end to end
///
/// Normalizes the period, validates all three scalar inputs, then invokes
/// the selected engine. Validation failures come back as
/// `CalculationOutcome::Invalid`; an `Err` from this function means the
/// engine guards rejected inputs that validation let through, which is a
/// caller bug.
pub fn calculate(input: &CalculationInput) -> Result<CalculationOutcome> {
    let months = input.period.as_ref().map(PeriodSpec::normalize);

    let validation = validate_inputs(input.principal, input.monthly_rate_percent, months);
    if !validation.is_valid {
        return Ok(CalculationOutcome::Invalid(validation));
    }

    let principal = Money::from_decimal(input.principal.unwrap_or_default());
    let rate = Rate::from_percentage(input.monthly_rate_percent.unwrap_or_default());
    let months = months.unwrap_or_default();

    let final_amount = match input.interest_type {
        InterestType::Simple => calculate_simple_interest(principal, rate, months)?,
        InterestType::Compound => {
            calculate_compound_interest(principal, rate, months, input.compounding_frequency)?
        }
    };

    Ok(CalculationOutcome::Valid(CalculationResult::new(
        principal,
        final_amount,
    )))
}

/// engine guard against inputs that bypassed validation
pub(crate) fn check_inputs(principal: Money, monthly_rate: Rate, months: Decimal) -> Result<()> {
    if principal <= Money::ZERO {
        return Err(CalculatorError::InvalidPrincipal { amount: principal });
    }
    if monthly_rate < Rate::ZERO {
        return Err(CalculatorError::NegativeRate { rate: monthly_rate });
    }
    if months <= Decimal::ZERO {
        return Err(CalculatorError::InvalidPeriod { months });
    }
    Ok(())
}
