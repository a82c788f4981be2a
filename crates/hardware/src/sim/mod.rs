//! Lockstep simulation driver.

/// The simulator: dispatcher plus statistics, stepped cycle by cycle.
pub mod simulator;

pub use self::simulator::Simulator;
