//! Unit tests for the core hardware model.


/// Capture-and-hold register tests.
pub mod reg;
