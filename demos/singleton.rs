//! Singleton, redesigned
//!
//! Instead of a lazily created global behind `get_instance`, the single
//! dragon ball collection is constructed once here in `main` and passed
//! by reference to everyone who collects. Same one-instance behavior,
//! no hidden global state.
//!
//! Run with: cargo run --example singleton

use colored::Colorize;
use patternbook::patterns::singleton::DragonBalls;

fn collect(who: &str, balls: &mut DragonBalls, times: u32) {
    println!("{}", format!("{who} goes hunting:").blue());
    for _ in 0..times {
        println!("  {}", balls.collect().cyan());
    }
}

fn main() {
    println!("=== Singleton (explicit instance) ===\n");

    // The one and only collection, owned right here.
    let mut balls = DragonBalls::new();

    collect("Goku", &mut balls, 3);
    println!("{}\n", balls.summon().red());

    // Vegeta works with the same instance: his finds add to Goku's.
    collect("Vegeta", &mut balls, 4);
    println!("{}", balls.summon().yellow());

    println!("\n=== Demo Complete ===");
}
