//! Factory method
//!
//! Restaurants share one ordering flow; which burger gets made is up to
//! the concrete restaurant. The choice is read interactively, and an
//! unrecognized choice aborts the run: the catalogue's only error.
//!
//! Run with: cargo run --example factory_method

use colored::Colorize;
use patternbook::patterns::factory::BurgerKind;
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Factory Method ===\n");

    print!("What burger do you want? (chicken/beef/bean) ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;

    let kind: BurgerKind = choice.parse()?;
    let restaurant = kind.restaurant();

    println!("\n{}", restaurant.order_burger().green());

    println!("\n=== Demo Complete ===");
    Ok(())
}
