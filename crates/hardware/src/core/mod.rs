//! Core hardware model.
//!
//! This module contains the leaf components of the CFU control path: the
//! capture-and-hold register, the dispatcher with its funct table, and the
//! clock-edge trait that ties their cycle behavior together.

/// CFU dispatcher (opcode selector, behavior set, funct table, call shell).
pub mod cfu;

/// Width-parametric capture-and-hold register.
pub mod reg;

/// Clock-edge trait shared by all stateful components.
pub mod traits;

pub use self::cfu::Cfu;
pub use self::reg::CaptureReg;
pub use self::traits::Clocked;
