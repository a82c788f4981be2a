//! Funct-Field Selector.
//!
//! This module defines the validated opcode type used to index the funct
//! table. It provides:
//! 1. **Closed Range:** Raw funct values are checked against the table size
//!    at construction; an `Opcode` that exists is always dispatchable.
//! 2. **Indexing:** Direct conversion to a table slot index.

use crate::common::constants::NUM_FUNCTS;
use crate::common::error::ConfigError;

/// A validated CFU funct-field value.
///
/// The selector is a closed set: only values `0..NUM_FUNCTS` exist. An
/// out-of-range raw value is a configuration defect surfaced by
/// [`new`](Self::new), never a runtime condition the dispatcher checks per
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode(u8);

impl Opcode {
    /// Validates a raw funct-field value.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FunctOutOfRange`] if `raw` does not name a table slot.
    pub const fn new(raw: u8) -> Result<Self, ConfigError> {
        if (raw as usize) < NUM_FUNCTS {
            Ok(Self(raw))
        } else {
            Err(ConfigError::FunctOutOfRange {
                funct: raw,
                limit: NUM_FUNCTS,
            })
        }
    }

    /// The raw funct-field encoding.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The funct-table slot this opcode selects.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "funct{}", self.0)
    }
}
