// ============================================================================
// Basic Usage Example
// ============================================================================

use mona_amount::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Mona Amount Example ===\n");

    // Amounts from raw Watanabe counts
    for units in [0i64, 100_000_000, 100_000] {
        match Amount::from_units(units) {
            Ok(amount) => println!("{} Watanabe: {}", units, amount),
            Err(e) => println!("{} Watanabe: {}", units, e),
        }
    }

    // Amounts from whole-coin input
    println!("\nParsing user input...");
    for input in ["1", "0.01234567", "0", "105.12e6", "105120000.00000001", "abc"] {
        match input.parse::<Amount>() {
            Ok(amount) => println!("  {:>20} -> {}", input, amount),
            Err(e) => println!("  {:>20} -> error: {}", input, e),
        }
    }

    match Amount::from_f64(f64::NAN) {
        Ok(amount) => println!("  {:>20} -> {}", "NaN", amount),
        Err(e) => println!("  {:>20} -> error: {}", "NaN", e),
    }

    // Unit conversions
    println!("\n=== Unit Conversions ===");
    let amount = match Amount::from_units(44_433_322_211_100i64) {
        Ok(amount) => amount,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    for unit in Denomination::KNOWN {
        println!("  Watanabe to {}: {}", unit, amount.format(unit));
    }
    println!("  Non-standard unit: {}", amount.format(Denomination::new(-1)));

    // Fee calculation
    println!("\n=== Fee Calculation ===");
    match amount.mul_f64(0.001) {
        Ok(fee) => {
            println!("  Fee (0.1%): {}", fee);
            println!("  After fee:  {}", &amount - &fee);
        }
        Err(e) => println!("  Fee error: {}", e),
    }
}
