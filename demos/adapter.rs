//! Adapter
//!
//! Three payment services with incompatible method names behind one
//! `PaymentProcessor` trait, then two report sinks: a console sink and
//! an adapter over the third-party `log` facade.
//!
//! Run with: RUST_LOG=info cargo run --example adapter

use colored::Colorize;
use patternbook::patterns::adapter::{
    ConsoleSink, LogCrateSink, MercadoPagoAdapter, MercadoPagoService, PayPalAdapter,
    PaymentProcessor, ReportSink, StripeAdapter,
};

fn main() {
    env_logger::init();

    println!("=== Adapter ===\n");

    let amount = 100.0;
    let processors: Vec<(&str, Box<dyn PaymentProcessor>)> = vec![
        ("Using PayPal:", Box::new(PayPalAdapter::default())),
        ("Using Stripe:", Box::new(StripeAdapter::default())),
        (
            "Using MercadoPago:",
            Box::new(MercadoPagoAdapter::new(MercadoPagoService)),
        ),
    ];

    // All three work exactly the same once adapted.
    for (heading, processor) in &processors {
        println!("{}", heading.blue());
        println!("{}\n", processor.process_payment(amount));
    }

    println!("{}", "Report sinks:".blue());
    let sinks: Vec<Box<dyn ReportSink>> = vec![
        Box::new(ConsoleSink::new("adapter.rs")),
        Box::new(LogCrateSink::new("adapter.rs")),
    ];

    for sink in &sinks {
        sink.write_log("payment round finished");
        sink.write_warn("amounts are demo values");
        sink.write_error("no real money was moved");
    }

    println!("\n=== Demo Complete ===");
}
