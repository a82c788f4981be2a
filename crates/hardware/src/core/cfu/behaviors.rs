//! Functional-unit behaviors.
//!
//! Implements the closed set of pure combinational behaviors a funct-table
//! slot can hold. Every behavior is a total function over two 32-bit
//! operands; all arithmetic wraps modulo 2^32 with no overflow fault, and no
//! behavior may depend on hidden state.
//!
//! `Add` doubles as the template behavior: it is what an unconfigured slot
//! dispatches, preserving the wraparound-add contract of the reference
//! template instruction.

use crate::common::constants::SHAMT_MASK;

/// A pure combinational behavior installed in a funct-table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Wraparound unsigned addition. The template/default behavior.
    Add,
    /// Wraparound unsigned subtraction (`a - b`).
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Logical shift left of `a` by the low shift-amount bits of `b`.
    Sll,
    /// Logical shift right of `a` by the low shift-amount bits of `b`.
    Srl,
    /// Arithmetic shift right of `a` by the low shift-amount bits of `b`.
    Sra,
    /// Unsigned minimum.
    Min,
    /// Unsigned maximum.
    Max,
}

impl Behavior {
    /// The behavior installed in every slot the configuration leaves empty.
    pub const TEMPLATE: Self = Self::Add;

    /// Applies the behavior to two operands.
    ///
    /// Total over the full operand domain: no input faults, no hidden state,
    /// wraparound on overflow.
    pub const fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Sub => a.wrapping_sub(b),
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::Sll => a << (b & SHAMT_MASK),
            Self::Srl => a >> (b & SHAMT_MASK),
            Self::Sra => ((a as i32) >> (b & SHAMT_MASK)) as u32,
            Self::Min => {
                if a < b { a } else { b }
            }
            Self::Max => {
                if a > b { a } else { b }
            }
        }
    }

    /// Resolves a configuration-file behavior name.
    ///
    /// Names are the lower-case variant names; anything else is outside the
    /// closed behavior set and yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "xor" => Some(Self::Xor),
            "sll" => Some(Self::Sll),
            "srl" => Some(Self::Srl),
            "sra" => Some(Self::Sra),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            _ => None,
        }
    }

    /// The configuration-file name of the behavior.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}
