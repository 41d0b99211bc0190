/// quick start - minimal example to get started
use interest_calculator_rs::{
    calculate_simple_interest, format_currency, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ₹10,000 at 2% per month for a year
    let principal = Money::from_major(10_000);
    let rate = Rate::from_percentage(dec!(2));

    let final_amount = calculate_simple_interest(principal, rate, dec!(12))?;
    let interest = final_amount - principal;

    println!("Principal: {}", format_currency(principal));
    println!("Interest:  {}", format_currency(interest));
    println!("Total:     {}", format_currency(final_amount));

    Ok(())
}
