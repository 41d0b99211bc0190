/// compare simple interest against both compounding frequencies
use interest_calculator_rs::{
    calculate_compound_interest, calculate_simple_interest, format_currency,
    CompoundingFrequency, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let principal = Money::from_major(10_000);
    let rate = Rate::from_percentage(dec!(2));
    let months = dec!(12);

    let simple = calculate_simple_interest(principal, rate, months)?;
    let yearly =
        calculate_compound_interest(principal, rate, months, CompoundingFrequency::Yearly)?;
    let monthly =
        calculate_compound_interest(principal, rate, months, CompoundingFrequency::Monthly)?;

    println!("{} at {} for {} months", format_currency(principal), rate, months);
    println!("  simple:            {}", format_currency(simple));
    println!("  compound, yearly:  {}", format_currency(yearly));
    println!("  compound, monthly: {}", format_currency(monthly));

    // over exactly one year, yearly compounding converges to simple interest
    assert_eq!(simple.round_dp(2), yearly.round_dp(2));

    Ok(())
}
