/// aggregate and per-field validation, as a form front-end would use them
use interest_calculator_rs::{
    validate_amount_field, validate_inputs, validate_period_field, validate_rate_field,
    PeriodUnit,
};
use rust_decimal_macros::dec;

fn main() {
    // aggregate check just before calculating: every failing rule reports
    let result = validate_inputs(Some(dec!(-1000)), Some(dec!(150)), Some(dec!(1500)));
    println!("valid: {}", result.is_valid);
    for error in &result.errors {
        println!("  - {error}");
    }

    // live per-field feedback while the user types
    println!("amount 0: {:?}", validate_amount_field(Some(dec!(0))));
    println!("rate unset: {:?}", validate_rate_field(None));
    println!("rate 0: {:?}", validate_rate_field(Some(dec!(0))));

    // the period limit follows the active display unit
    println!(
        "period 101 in months: {:?}",
        validate_period_field(Some(dec!(101)), PeriodUnit::Months)
    );
    println!(
        "period 101 in years: {:?}",
        validate_period_field(Some(dec!(101)), PeriodUnit::Years)
    );
}
