use fractional::{Fraction, Fraction64};

use std::io::{self, prelude::*};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Prints the harmonic numbers H(n) = 1/1 + 1/2 + ... + 1/n exactly,");
    println!("stopping early if the next one no longer fits in 64 bits.");
    println!();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    print!("Terms: ");
    io::stdout().flush()?;

    let mut buf = String::new();
    stdin.read_line(&mut buf)?;
    let terms: i64 = buf.trim().parse()?;

    let mut total = Fraction64::default();
    for n in 1..=terms {
        total = match total.checked_add(Fraction::new(1, n)) {
            Some(total) => total,
            None => {
                eprintln!("H({}) overflows a 64-bit fraction", n);
                break;
            }
        };
        println!("H({}) = {} ~ {:.6}", n, total, total);
    }

    println!();
    println!("Dividing by zero does not fail:");
    println!("{} / 0 = {}", total, total / 0);
    println!("0 / 0 = {}", Fraction64::default() / 0);
    println!("{} * (1/0) = {}", -total, -total * Fraction64::infinity());

    Ok(())
}
