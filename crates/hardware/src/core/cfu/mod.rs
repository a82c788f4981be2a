//! CFU dispatcher.
//!
//! This module implements the custom function unit's control path: a closed
//! funct table of pure combinational behaviors wrapped in a synchronous
//! request/response shell. It is organized as:
//! - [`opcode`]:    the validated funct-field selector.
//! - [`behaviors`]: the closed set of pure behaviors a slot can hold.
//! - [`table`]:     the eagerly validated funct table.
//!
//! The shell itself lives here: the call protocol IDLE → ACCEPT → EMIT with a
//! fixed one-cycle latency between request and response.

/// Pure combinational behaviors (the functional-unit bodies).
pub mod behaviors;

/// Validated funct-field selector.
pub mod opcode;

/// Funct table construction and dispatch.
pub mod table;

use tracing::trace;

use crate::common::constants::OPERAND_BITS;
use crate::common::error::{CfuError, ProtocolViolation};
use crate::core::reg::CaptureReg;
use crate::core::traits::Clocked;

pub use self::behaviors::Behavior;
pub use self::opcode::Opcode;
pub use self::table::FunctTable;

/// Call-protocol state of the dispatcher shell.
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// No call in flight.
    Idle,
    /// Request accepted this cycle; operands are settling into the capture
    /// registers and the result commits on the next clock edge.
    Accept(Opcode),
    /// Result committed and held until the harness consumes it.
    Emit(u32),
}

/// The CFU dispatcher: a funct table behind a one-cycle call shell.
///
/// Dispatch is stateless and pure: the response to `(opcode, a, b)` is the
/// same regardless of call history. The only state in this type is the call
/// protocol itself (which request is in flight) and the operand capture
/// registers that model the request-side latch.
///
/// Requests and responses correlate one to one. A response becomes observable
/// exactly one [`tick`](Clocked::tick) after its request was issued, never
/// earlier; it is then held until consumed. Overlapping calls are a
/// [`ProtocolViolation`], not a queueing request.
#[derive(Debug, Clone)]
pub struct Cfu {
    table: FunctTable,
    operand_a: CaptureReg<OPERAND_BITS>,
    operand_b: CaptureReg<OPERAND_BITS>,
    phase: Phase,
}

impl Cfu {
    /// Creates a dispatcher around an already-validated funct table.
    pub const fn new(table: FunctTable) -> Self {
        Self {
            table,
            operand_a: CaptureReg::new(),
            operand_b: CaptureReg::new(),
            phase: Phase::Idle,
        }
    }

    /// Issues a request for the current cycle.
    ///
    /// The operands are driven into the capture registers; the result commits
    /// at the next clock edge. Issuing while a previous call is still in
    /// flight (unconsumed response included) is a protocol violation.
    ///
    /// # Errors
    ///
    /// [`ProtocolViolation::OverlappingCall`] if the shell is not idle.
    pub fn issue(&mut self, opcode: Opcode, a: u32, b: u32) -> Result<(), CfuError> {
        match self.phase {
            Phase::Idle => {
                self.operand_a.drive(true, a);
                self.operand_b.drive(true, b);
                self.phase = Phase::Accept(opcode);
                Ok(())
            }
            Phase::Accept(_) | Phase::Emit(_) => {
                Err(CfuError::Protocol(ProtocolViolation::OverlappingCall))
            }
        }
    }

    /// Consumes the pending response, returning the shell to idle.
    ///
    /// # Errors
    ///
    /// [`ProtocolViolation::ResponseNotReady`] if no result has committed yet
    /// (either nothing was issued, or the clock has not ticked since issue).
    pub fn response(&mut self) -> Result<u32, CfuError> {
        match self.phase {
            Phase::Emit(result) => {
                self.phase = Phase::Idle;
                Ok(result)
            }
            Phase::Idle | Phase::Accept(_) => {
                Err(CfuError::Protocol(ProtocolViolation::ResponseNotReady))
            }
        }
    }

    /// Issues a request, advances one cycle, and consumes the response.
    ///
    /// This is the blocking form of the one-cycle call protocol, matching the
    /// instruction-issue view of the CFU: one request, one cycle, one result.
    ///
    /// # Errors
    ///
    /// Propagates the protocol violations of [`issue`](Self::issue) and
    /// [`response`](Self::response).
    pub fn call(&mut self, opcode: Opcode, a: u32, b: u32) -> Result<u32, CfuError> {
        self.issue(opcode, a, b)?;
        self.tick();
        self.response()
    }

    /// Whether a committed response is waiting to be consumed.
    pub const fn response_ready(&self) -> bool {
        matches!(self.phase, Phase::Emit(_))
    }

    /// Whether the shell can accept a new request this cycle.
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// The funct table behind the shell.
    pub const fn table(&self) -> &FunctTable {
        &self.table
    }
}

impl Clocked for Cfu {
    /// Models the rising clock edge.
    ///
    /// An accepted request commits its operands into the capture registers
    /// and latches the dispatched result; the shell then holds that result
    /// until consumed. Idle and holding shells are unchanged by extra edges.
    fn tick(&mut self) {
        self.operand_a.tick();
        self.operand_b.tick();
        if let Phase::Accept(opcode) = self.phase {
            let a = self.operand_a.output();
            let b = self.operand_b.output();
            let result = self.table.dispatch(opcode, a, b);
            trace!(funct = opcode.raw(), a, b, result, "cfu dispatch");
            self.phase = Phase::Emit(result);
        }
        // Deassert the capture lines so later edges hold rather than resample.
        self.operand_a.drive(false, 0);
        self.operand_b.drive(false, 0);
    }
}

impl Default for Cfu {
    /// A dispatcher with every slot holding the template behavior.
    fn default() -> Self {
        Self::new(FunctTable::new())
    }
}
