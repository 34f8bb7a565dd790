//! Fluent construction of records.
//!
//! This module holds the builder half of the catalogue's core: a record
//! with a fixed field set assembled step by step through chained setters,
//! finalized by an explicit build call.

mod computer;

pub use computer::{Computer, ComputerBuilder, UNSET};
