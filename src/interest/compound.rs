use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::{check_inputs, CompoundingFrequency};

/// compound interest at a fixed capitalization frequency
///
/// A = P(1 + r/n)^(n·t): the monthly rate is annualized (×12), n is the
/// frequency's periods per year, t is the period in years. The exponent
/// may be fractional (yearly compounding over a partial year), so the
/// growth factor goes through decimal exponentiation rather than repeated
/// multiplication. No intermediate rounding.
pub fn calculate_compound_interest(
    principal: Money,
    monthly_rate: Rate,
    months: Decimal,
    frequency: CompoundingFrequency,
) -> Result<Money> {
    check_inputs(principal, monthly_rate, months)?;

    let annual_rate = monthly_rate.annualized().as_decimal();
    let n = Decimal::from(frequency.periods_per_year());
    let years = months / dec!(12);

    let base = Decimal::ONE + annual_rate / n;
    let exponent = n * years;

    let growth = base
        .checked_powd(exponent)
        .ok_or_else(|| CalculatorError::CalculationOverflow {
            message: format!("growth factor {base}^{exponent} is out of range"),
        })?;

    let final_amount = principal
        .as_decimal()
        .checked_mul(growth)
        .ok_or_else(|| CalculatorError::CalculationOverflow {
            message: format!("final amount exceeds representable range for {principal}"),
        })?;

    Ok(Money::from_decimal(final_amount))
}
