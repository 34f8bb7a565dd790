//! Stateless pattern catalogue.
//!
//! Each submodule holds the types behind one call-and-print pattern demo.
//! None of them carries state across calls or talks to the core modules;
//! they exist so the runnable demos under `demos/` have something real to
//! dispatch on. Every operation here returns the text it would report,
//! leaving the printing (and coloring) to the demos.

pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod factory;
pub mod singleton;

pub use factory::MenuError;
