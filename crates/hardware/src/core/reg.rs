//! Capture-and-Hold Register.
//!
//! This module provides `CaptureReg`, the clocked storage cell used across
//! the CFU datapath. It provides:
//! 1. **Conditional Capture:** The stored value updates only on clock edges
//!    where the capture control line is asserted.
//! 2. **Width Parametricity:** One generic type covers every field width the
//!    datapath uses (funct fields, operands, full words).
//! 3. **Two-Phase Commit:** Inputs are driven combinationally and committed
//!    by `tick`, reproducing sample-then-commit edge semantics.

use crate::common::constants::{OPERAND_BITS, RESET_VALUE};
use crate::core::traits::Clocked;

/// A capture-and-hold register of `WIDTH` bits (1..=32).
///
/// Out of reset the register holds [`RESET_VALUE`]. On each clock edge where
/// the capture line was driven high, the held value becomes the driven input
/// masked to `WIDTH` bits; on every other edge it is unchanged. Reads through
/// [`output`](Self::output) are combinational and never advance state.
///
/// A register instance is exclusively owned by one producer of its
/// capture/input lines and may be read by any number of consumers within the
/// same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureReg<const WIDTH: u32> {
    /// Committed state: the value visible on the output port.
    held: u32,
    /// Capture line as driven for the current cycle.
    capture_in: bool,
    /// Input port as driven for the current cycle.
    data_in: u32,
}

impl<const WIDTH: u32> CaptureReg<WIDTH> {
    /// Mask selecting the low `WIDTH` bits of the input port.
    const MASK: u32 = {
        assert!(WIDTH >= 1 && WIDTH <= OPERAND_BITS);
        if WIDTH == OPERAND_BITS {
            u32::MAX
        } else {
            (1u32 << WIDTH) - 1
        }
    };

    /// Creates a register in its reset state (holding 0, capture deasserted).
    pub const fn new() -> Self {
        Self {
            held: RESET_VALUE,
            capture_in: false,
            data_in: 0,
        }
    }

    /// Drives the capture and input lines for the current cycle.
    ///
    /// Driving is combinational: nothing commits until the next
    /// [`tick`](Clocked::tick). Driving twice in one cycle simply overwrites
    /// the settled line values, matching wire semantics.
    pub fn drive(&mut self, capture: bool, input: u32) {
        self.capture_in = capture;
        self.data_in = input & Self::MASK;
    }

    /// Reads the held value without advancing state.
    pub const fn output(&self) -> u32 {
        self.held
    }

    /// Drives the lines and advances one cycle in a single call.
    ///
    /// Equivalent to `drive(capture, input)` followed by `tick()`; this is
    /// the natural form for a harness that settles and clocks in lockstep.
    pub fn sample(&mut self, capture: bool, input: u32) {
        self.drive(capture, input);
        self.tick();
    }
}

impl<const WIDTH: u32> Clocked for CaptureReg<WIDTH> {
    /// Models the rising clock edge: commits the driven input if capture was
    /// asserted, otherwise holds. The capture line is left as driven; a
    /// harness that stops driving it must deassert explicitly, exactly as a
    /// wire would retain its settled level.
    fn tick(&mut self) {
        if self.capture_in {
            self.held = self.data_in;
        }
    }
}

impl<const WIDTH: u32> Default for CaptureReg<WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}
