//! Clock-Edge Interface.
//!
//! This module defines the common trait for clocked components. It provides:
//! 1. **Tick Operation:** Standardizes the single clock-edge commit point.
//! 2. **Cycle Discipline:** Reads between ticks are combinational; all state
//!    changes happen inside `tick`.

/// A component driven by the single simulation clock.
///
/// The simulation is synchronous and cycle-stepped: the harness settles all
/// combinational inputs, then calls `tick` on every component to model one
/// rising clock edge. Components sample their old state and commit new state
/// atomically inside `tick`, so no read-after-write hazard exists within a
/// cycle.
pub trait Clocked {
    /// Advances the component by one clock cycle.
    ///
    /// Any state visible through read accessors changes only here.
    fn tick(&mut self);
}
