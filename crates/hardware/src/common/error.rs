//! Configuration and protocol error definitions.
//!
//! This module defines the two error kinds the core can surface:
//! 1. **Configuration Errors:** A malformed funct table, detected eagerly at
//!    construction. Fatal; no partial or degraded dispatch is offered.
//! 2. **Protocol Violations:** The driving harness breaking the synchronous
//!    call protocol (overlapping requests, reading a response that is not
//!    ready). Fatal; the core has no buffering for overlapping requests.
//!
//! There are no retryable conditions: every operation is a deterministic pure
//! function of visible state, so nothing transient exists to retry.

use thiserror::Error;

/// Errors raised while building the funct table from configuration.
///
/// All variants are construction-time defects. A dispatcher that constructs
/// successfully can never fail at call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A table entry names a funct slot outside the closed selector range.
    #[error("funct {funct:#x} outside table range 0..{limit}")]
    FunctOutOfRange {
        /// The offending raw funct value.
        funct: u8,
        /// Number of slots in the table.
        limit: usize,
    },

    /// Two table entries name the same funct slot.
    #[error("duplicate table entry for funct {funct:#x}")]
    DuplicateFunct {
        /// The funct slot configured more than once.
        funct: u8,
    },

    /// A table entry names a behavior outside the closed behavior set.
    #[error("unknown behavior {name:?} for funct {funct:#x}")]
    UnknownBehavior {
        /// The offending behavior name from the configuration file.
        name: String,
        /// The funct slot the entry targeted.
        funct: u8,
    },
}

/// Violations of the synchronous request/response call protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    /// A new request was issued before the previous response was consumed.
    #[error("request issued while a previous call is still in flight")]
    OverlappingCall,

    /// A response was read with no completed request to answer it.
    #[error("response read before any result was ready")]
    ResponseNotReady,
}

/// Top-level error type for the CFU simulation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CfuError {
    /// Funct-table configuration defect, reported at construction.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Harness broke the call protocol, reported at the offending call.
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),
}
