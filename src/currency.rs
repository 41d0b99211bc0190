use num_format::{Buffer, CustomFormat, Grouping};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};

pub const DEFAULT_LOCALE: &str = "en-IN";
pub const DEFAULT_CURRENCY: &str = "INR";

/// locale-aware currency renderer
///
/// Digit grouping comes from num-format, never hand-spliced; the Indian
/// convention groups the last three digits, then pairs.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    format: CustomFormat,
    symbol: &'static str,
}

impl CurrencyFormatter {
    /// build a formatter for a locale/currency pair
    ///
    /// `("en-IN", "INR")` is the only supported pair; anything else is
    /// rejected rather than silently falling back to a wrong grouping.
    pub fn new(locale: &str, currency: &str) -> Result<Self> {
        match (locale, currency) {
            (DEFAULT_LOCALE, DEFAULT_CURRENCY) => {
                let format = CustomFormat::builder()
                    .grouping(Grouping::Indian)
                    .separator(",")
                    .build()
                    .map_err(|e| CalculatorError::InvalidNumberFormat {
                        message: e.to_string(),
                    })?;
                Ok(CurrencyFormatter {
                    format,
                    symbol: "₹",
                })
            }
            _ => Err(CalculatorError::UnsupportedLocale {
                locale: locale.to_string(),
                currency: currency.to_string(),
            }),
        }
    }

    /// render with exactly 2 fractional digits and grouped integer digits
    ///
    /// The single display rounding happens here, half away from zero.
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount.round_dp(2).as_decimal();
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let abs = rounded.abs();

        let whole = abs.trunc();
        let fraction = ((abs - whole) * Decimal::from(100))
            .to_i64()
            .unwrap_or_default();

        let mut grouped = Buffer::new();
        grouped.write_formatted(&whole.to_i128().unwrap_or_default(), &self.format);

        format!("{sign}{}{}.{fraction:02}", self.symbol, grouped.as_str())
    }
}

/// render an amount in the default en-IN / INR locale
pub fn format_currency(amount: Money) -> String {
    match CurrencyFormatter::new(DEFAULT_LOCALE, DEFAULT_CURRENCY) {
        Ok(formatter) => formatter.format(amount),
        Err(_) => format!("₹{}", amount.round_dp(2)),
    }
}
