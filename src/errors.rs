use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid principal: {amount}")]
    InvalidPrincipal { amount: Money },

    #[error("negative interest rate: {rate}")]
    NegativeRate { rate: Rate },

    #[error("invalid period: {months} months")]
    InvalidPeriod { months: Decimal },

    #[error("unknown compounding frequency: {value}")]
    UnknownFrequency { value: String },

    #[error("unknown period unit: {value}")]
    UnknownPeriodUnit { value: String },

    #[error("unsupported locale: {locale}/{currency}")]
    UnsupportedLocale { locale: String, currency: String },

    #[error("invalid number format: {message}")]
    InvalidNumberFormat { message: String },

    #[error("calculation overflow: {message}")]
    CalculationOverflow { message: String },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
