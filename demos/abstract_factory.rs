//! Abstract factory
//!
//! Meal factories produce a burger and a drink that belong together; the
//! ordering code never names a concrete product.
//!
//! Run with: cargo run --example abstract_factory

use colored::Colorize;
use patternbook::patterns::abstract_factory::{order_meal, FastFoodFactory, HealthyFoodFactory};

fn main() {
    println!("=== Abstract Factory ===\n");

    println!("{}", "Order from the regular menu:".green());
    let (burger, drink) = order_meal(&FastFoodFactory);
    println!("{burger}");
    println!("{drink}\n");

    println!("{}", "Order from the healthy menu:".green());
    let (burger, drink) = order_meal(&HealthyFoodFactory);
    println!("{burger}");
    println!("{drink}");

    println!("\n=== Demo Complete ===");
}
