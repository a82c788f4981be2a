//! Funct-Table Construction and Dispatch.
//!
//! This module builds the closed opcode-to-behavior table the dispatcher
//! selects from. It provides:
//! 1. **Eager Validation:** Duplicate slots, out-of-range functs, and unknown
//!    behavior names are rejected at construction, never at call time.
//! 2. **Template Default:** Slots the configuration leaves empty dispatch the
//!    template wraparound-add behavior.
//! 3. **Pure Dispatch:** Table lookup plus behavior application, free of any
//!    hidden state.

use crate::common::constants::NUM_FUNCTS;
use crate::common::error::ConfigError;
use crate::config::CfuConfig;

use super::behaviors::Behavior;
use super::opcode::Opcode;

/// The closed funct table: one behavior per selector slot.
///
/// A constructed table is total — every [`Opcode`] selects a behavior, so
/// dispatch cannot fail. Malformed configurations are rejected before a table
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctTable {
    slots: [Behavior; NUM_FUNCTS],
}

impl FunctTable {
    /// Creates a table with the template behavior in every slot.
    pub const fn new() -> Self {
        Self {
            slots: [Behavior::TEMPLATE; NUM_FUNCTS],
        }
    }

    /// Builds a table from explicit `(funct, behavior)` entries.
    ///
    /// Slots not named by any entry keep the template behavior.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FunctOutOfRange`] for an entry outside the selector
    /// range, [`ConfigError::DuplicateFunct`] when two entries name the same
    /// slot.
    pub fn from_entries(entries: &[(u8, Behavior)]) -> Result<Self, ConfigError> {
        let mut slots = [Behavior::TEMPLATE; NUM_FUNCTS];
        let mut configured = [false; NUM_FUNCTS];

        for &(funct, behavior) in entries {
            let opcode = Opcode::new(funct)?;
            if configured[opcode.index()] {
                return Err(ConfigError::DuplicateFunct { funct });
            }
            configured[opcode.index()] = true;
            slots[opcode.index()] = behavior;
        }

        Ok(Self { slots })
    }

    /// Builds a table from a deserialized configuration section.
    ///
    /// # Errors
    ///
    /// The range and duplicate errors of [`from_entries`](Self::from_entries),
    /// plus [`ConfigError::UnknownBehavior`] for a behavior name outside the
    /// closed set.
    pub fn from_config(config: &CfuConfig) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(config.table.len());
        for entry in &config.table {
            let behavior =
                Behavior::from_name(&entry.behavior).ok_or_else(|| ConfigError::UnknownBehavior {
                    name: entry.behavior.clone(),
                    funct: entry.funct,
                })?;
            entries.push((entry.funct, behavior));
        }
        Self::from_entries(&entries)
    }

    /// Dispatches one call: selects the slot's behavior and applies it.
    pub const fn dispatch(&self, opcode: Opcode, a: u32, b: u32) -> u32 {
        self.slots[opcode.index()].apply(a, b)
    }

    /// The behavior installed in a slot.
    pub const fn behavior(&self, opcode: Opcode) -> Behavior {
        self.slots[opcode.index()]
    }
}

impl Default for FunctTable {
    fn default() -> Self {
        Self::new()
    }
}
