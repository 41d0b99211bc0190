use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::interest::check_inputs;

/// simple interest on the original principal only
///
/// A = P(1 + r·t) with r the monthly rate fraction and t in months.
/// Returns the unrounded final amount; display rounding is the caller's.
pub fn calculate_simple_interest(
    principal: Money,
    monthly_rate: Rate,
    months: Decimal,
) -> Result<Money> {
    check_inputs(principal, monthly_rate, months)?;

    let growth = Decimal::ONE + monthly_rate.as_decimal() * months;
    Ok(principal * growth)
}
