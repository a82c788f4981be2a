//! Common utilities and types used throughout the CFU simulator.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Funct-field geometry and datapath widths.
//! 2. **Error Handling:** Configuration and protocol error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and call-protocol defects.
pub mod error;

pub use constants::{FUNCT_BITS, NUM_FUNCTS, OPERAND_BITS, RESET_VALUE};
pub use error::{CfuError, ConfigError, ProtocolViolation};
