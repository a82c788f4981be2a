//! CFU control-path simulation library.
//!
//! This crate implements a cycle-stepped, two-valued-logic model of the
//! control path around an ML-accelerator custom function unit (CFU):
//! 1. **Core:** Width-parametric capture registers and the CFU dispatcher
//!    (a validated funct table behind a synchronous request/response shell).
//! 2. **Cycle model:** An explicit `tick` clock edge; reads between edges are
//!    combinational and side-effect-free.
//! 3. **Simulation:** A lockstep driver that issues stimulus traces and
//!    collects responses and statistics.
//!
//! All arithmetic on the 32-bit datapath wraps modulo 2^32; there is no
//! overflow fault anywhere in the core.

/// Common types and constants (errors, funct-field geometry).
pub mod common;
/// Simulator configuration (defaults, funct-table entries).
pub mod config;
/// Core hardware model (capture register, CFU dispatcher, clock trait).
pub mod core;
/// Lockstep simulation driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The CFU dispatcher: a validated funct table behind a one-cycle shell.
pub use crate::core::cfu::Cfu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
