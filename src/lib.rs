pub mod config;
pub mod currency;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod period;
pub mod summary;
pub mod validation;

// re-export key types
pub use config::CalculationInput;
pub use currency::{format_currency, CurrencyFormatter, DEFAULT_CURRENCY, DEFAULT_LOCALE};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use interest::{
    calculate, calculate_compound_interest, calculate_simple_interest, CalculationOutcome,
    CalculationResult, CompoundingFrequency, InterestType,
};
pub use period::{months_between, months_to_years, years_to_months, PeriodSpec, PeriodUnit};
pub use summary::CalculationSummary;
pub use validation::{
    validate_amount_field, validate_inputs, validate_period_field, validate_rate_field,
    ValidationResult,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
