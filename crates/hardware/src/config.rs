//! Configuration system for the CFU simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Funct Table:** The list of `(funct, behavior)` entries installed into
//!    the dispatcher; empty slots default to the template behavior.
//! 2. **Deserialization:** Configuration is supplied as JSON (from the CLI or
//!    a test fixture) or built via `Config::default()`.
//!
//! Validation is deliberately split: deserialization accepts any raw funct
//! value and behavior name, and the funct-table constructor rejects the
//! malformed ones eagerly. A configuration that builds a table cannot fail
//! later.

use serde::Deserialize;

/// Root simulator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// CFU dispatcher configuration.
    #[serde(default)]
    pub cfu: CfuConfig,
}

impl Config {
    /// Deserializes a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed documents.
    /// Semantic validation (range, duplicates, behavior names) happens when
    /// the funct table is built, not here.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// CFU dispatcher configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CfuConfig {
    /// Funct-table entries. Slots not listed here hold the template behavior.
    #[serde(default)]
    pub table: Vec<TableEntry>,
}

/// One funct-table entry: a selector slot and the behavior name to install.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableEntry {
    /// Raw funct-field value selecting the slot.
    pub funct: u8,
    /// Behavior name from the closed set (`"add"`, `"sub"`, `"xor"`, ...).
    pub behavior: String,
}
