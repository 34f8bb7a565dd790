//! Builder pattern
//!
//! A computer record assembled step by step through chained setters.
//!
//! Key concepts:
//! - Fluent setters returning the builder for chaining
//! - Setters callable in any order; repeating one overwrites (last write wins)
//! - Unset fields keep their sentinel values
//! - `build()` hands out an isolated snapshot of the record
//!
//! Run with: cargo run --example builder

use colored::Colorize;
use patternbook::builder::ComputerBuilder;

fn main() {
    println!("=== Builder ===\n");

    let basic = ComputerBuilder::new()
        .cpu("Intel Core 2 Duo")
        .ram("4Gb")
        .storage("128Gb")
        .build();

    println!("{}", "Basic computer:".magenta());
    println!("{basic}\n");

    // RAM set twice on purpose: the second value wins.
    let gaming = ComputerBuilder::new()
        .cpu("Intel Core i9")
        .ram("32Gb")
        .ram("64Gb")
        .storage("1Tb")
        .gpu("Nvidia RTX 4090")
        .build();

    println!("{}", "Gaming computer:".red());
    println!("{gaming}");

    println!("\n=== Demo Complete ===");
}
