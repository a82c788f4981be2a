//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the CFU
//! simulation core. It organizes tests for the leaf hardware components,
//! the simulation driver, and configuration parsing.


/// Unit tests for the core hardware model.
///
/// This module aggregates tests for:
/// - The capture-and-hold register (traces, hold invariant, widths).
/// - The CFU dispatcher (funct table, behaviors, call protocol).
pub mod core;
