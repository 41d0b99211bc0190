/// run a request end to end and emit the display summary as json
use interest_calculator_rs::{
    calculate, CalculationInput, CalculationOutcome, CalculationSummary, CompoundingFrequency,
    PeriodSpec, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = CalculationInput::compound(
        dec!(10000),
        dec!(2),
        PeriodSpec::Years(dec!(1)),
        CompoundingFrequency::Monthly,
    );

    match calculate(&input)? {
        CalculationOutcome::Valid(result) => {
            let summary = CalculationSummary::new(
                input.interest_type,
                input.compounding_frequency,
                Rate::from_percentage(input.monthly_rate_percent.unwrap_or_default()),
                input.period_months().unwrap_or_default(),
                &result,
            );
            println!("{summary}");
            println!();
            println!("{}", summary.json());
        }
        CalculationOutcome::Invalid(validation) => {
            eprintln!("invalid input: {}", validation.errors.join(", "));
        }
    }

    Ok(())
}
