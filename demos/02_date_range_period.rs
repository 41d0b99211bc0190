/// periods can be entered as months, years, or a calendar date range
use interest_calculator_rs::{
    calculate, chrono::NaiveDate, months_to_years, years_to_months, CalculationInput,
    CalculationOutcome, CompoundingFrequency, PeriodSpec,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // all three spellings of the same period
    let as_months = PeriodSpec::Months(dec!(17));
    let as_range = PeriodSpec::DateRange {
        start: NaiveDate::from_ymd_opt(2020, 1, 1),
        end: NaiveDate::from_ymd_opt(2021, 6, 1),
    };

    println!("17 months normalizes to {} months", as_months.normalize());
    println!("2020-01-01..2021-06-01 normalizes to {} months", as_range.normalize());

    // unit toggles round at the switch, not in the calculation
    println!("17 months shown in years: {}", months_to_years(dec!(17)));
    println!("1.5 years shown in months: {}", years_to_months(dec!(1.5)));

    let input = CalculationInput::compound(
        dec!(50000),
        dec!(1.5),
        as_range,
        CompoundingFrequency::Monthly,
    );
    match calculate(&input)? {
        CalculationOutcome::Valid(result) => {
            println!("final amount over the range: {}", result.final_amount.round_dp(2));
        }
        CalculationOutcome::Invalid(validation) => {
            println!("rejected: {}", validation.errors.join(", "));
        }
    }

    Ok(())
}
