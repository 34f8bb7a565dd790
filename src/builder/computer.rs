//! A computer configuration assembled through a fluent builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown for fields that were never set.
pub const UNSET: &str = "not defined";

/// A computer configuration record.
///
/// Fields start at the [`UNSET`] sentinel (the GPU, being optional
/// hardware, starts at `None`) and are filled in one at a time by
/// [`ComputerBuilder`]. The record itself has no behavior beyond its
/// [`Display`](fmt::Display) dump.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub gpu: Option<String>,
}

impl Default for Computer {
    fn default() -> Self {
        Self {
            cpu: UNSET.into(),
            ram: UNSET.into(),
            storage: UNSET.into(),
            gpu: None,
        }
    }
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computer configuration")?;
        writeln!(f, "    CPU: {}", self.cpu)?;
        writeln!(f, "    RAM: {}", self.ram)?;
        writeln!(f, "    Storage: {}", self.storage)?;
        write!(f, "    GPU: {}", self.gpu.as_deref().unwrap_or(UNSET))
    }
}

/// Fluent builder for [`Computer`] records.
///
/// Setters may be chained in any order; calling one twice simply
/// overwrites the earlier value (last write wins). There is nothing to
/// validate, so no setter and no build step can fail.
///
/// `build` hands out a clone of the record under construction (value
/// semantics): records returned earlier are unaffected by later setter
/// calls, and the builder stays usable afterwards.
///
/// # Example
///
/// ```rust
/// use patternbook::builder::ComputerBuilder;
///
/// let computer = ComputerBuilder::new()
///     .cpu("Intel Core 2 Duo")
///     .ram("4Gb")
///     .storage("128Gb")
///     .build();
///
/// assert_eq!(computer.cpu, "Intel Core 2 Duo");
/// assert_eq!(computer.gpu, None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    /// Create a builder holding an all-unset record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CPU description.
    pub fn cpu(&mut self, cpu: impl Into<String>) -> &mut Self {
        self.computer.cpu = cpu.into();
        self
    }

    /// Set the RAM description.
    pub fn ram(&mut self, ram: impl Into<String>) -> &mut Self {
        self.computer.ram = ram.into();
        self
    }

    /// Set the storage description.
    pub fn storage(&mut self, storage: impl Into<String>) -> &mut Self {
        self.computer.storage = storage.into();
        self
    }

    /// Set the GPU description.
    pub fn gpu(&mut self, gpu: impl Into<String>) -> &mut Self {
        self.computer.gpu = Some(gpu.into());
        self
    }

    /// Finalize the record as currently configured.
    ///
    /// Returns a snapshot by value; the builder keeps its own copy and
    /// may continue to be configured for further builds.
    pub fn build(&self) -> Computer {
        self.computer.clone()
    }
}
