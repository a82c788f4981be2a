//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Funct-Field Constants:** Width and slot count of the CFU instruction selector.
//! 2. **Datapath Constants:** Operand width and the capture-register reset value.

/// Width of the CFU funct selector field in bits.
pub const FUNCT_BITS: u32 = 3;

/// Number of funct-table slots (2^FUNCT_BITS).
pub const NUM_FUNCTS: usize = 1 << FUNCT_BITS;

/// Width of a CFU operand and result in bits.
pub const OPERAND_BITS: u32 = 32;

/// Value every capture register holds out of reset.
pub const RESET_VALUE: u32 = 0;

/// Lower bits of an operand consumed as a shift amount by the shift behaviors.
pub const SHAMT_MASK: u32 = OPERAND_BITS - 1;
