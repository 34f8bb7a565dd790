//! Adapter: incompatible interfaces behind one trait.
//!
//! Two halves. Payment services each expose their own method name
//! (`send_payment`, `make_charge`, `pay`); one adapter per service maps
//! them onto the shared `PaymentProcessor` trait. Report sinks do the
//! same for output: a plain console sink, and an adapter over the
//! third-party `log` facade so callers never depend on it directly.

/// The uniform interface the client code works against.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: f64) -> String;
}

// External services with interfaces we do not control.

#[derive(Default)]
pub struct PayPalService;

impl PayPalService {
    pub fn send_payment(&self, amount: f64) -> String {
        format!("Processing ${amount} payment through PayPal")
    }
}

#[derive(Default)]
pub struct StripeService;

impl StripeService {
    pub fn make_charge(&self, amount: f64) -> String {
        format!("Processing ${amount} payment through Stripe")
    }
}

pub struct MercadoPagoService;

impl MercadoPagoService {
    pub fn pay(&self, amount: f64) -> String {
        format!("Processing ${amount} payment through MercadoPago")
    }
}

#[derive(Default)]
pub struct PayPalAdapter {
    service: PayPalService,
}

impl PaymentProcessor for PayPalAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.service.send_payment(amount)
    }
}

#[derive(Default)]
pub struct StripeAdapter {
    service: StripeService,
}

impl PaymentProcessor for StripeAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.service.make_charge(amount)
    }
}

/// Unlike the other two, this adapter wraps an instance it is handed,
/// mirroring services that need prior configuration.
pub struct MercadoPagoAdapter {
    service: MercadoPagoService,
}

impl MercadoPagoAdapter {
    pub fn new(service: MercadoPagoService) -> Self {
        Self { service }
    }
}

impl PaymentProcessor for MercadoPagoAdapter {
    fn process_payment(&self, amount: f64) -> String {
        self.service.pay(amount)
    }
}

/// Where a demo writes its report lines.
pub trait ReportSink {
    fn write_log(&self, msg: &str);
    fn write_warn(&self, msg: &str);
    fn write_error(&self, msg: &str);
}

/// Writes straight to stdout with a per-file prefix.
pub struct ConsoleSink {
    file: String,
}

impl ConsoleSink {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

impl ReportSink for ConsoleSink {
    fn write_log(&self, msg: &str) {
        println!("[{} Log] {msg}", self.file);
    }

    fn write_warn(&self, msg: &str) {
        println!("[{} Warning] {msg}", self.file);
    }

    fn write_error(&self, msg: &str) {
        println!("[{} Error] {msg}", self.file);
    }
}

/// Adapts the `log` crate's facade to the sink interface, so swapping
/// the console sink for a real logger is a one-line change at the call
/// site and nothing else.
pub struct LogCrateSink {
    file: String,
}

impl LogCrateSink {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

impl ReportSink for LogCrateSink {
    fn write_log(&self, msg: &str) {
        log::info!(target: "patternbook", "[{}] {msg}", self.file);
    }

    fn write_warn(&self, msg: &str) {
        log::warn!(target: "patternbook", "[{}] {msg}", self.file);
    }

    fn write_error(&self, msg: &str) {
        log::error!(target: "patternbook", "[{}] {msg}", self.file);
    }
}
