//! Simulator: owns the CFU and its statistics side-by-side.
//!
//! The driver settles inputs, ticks, and observes outputs in lockstep with
//! the single simulation clock, the same discipline a hardware testbench
//! imposes on the device under test.

use tracing::{debug, trace};

use crate::common::error::CfuError;
use crate::config::Config;
use crate::core::cfu::{Cfu, FunctTable, Opcode};
use crate::core::traits::Clocked;
use crate::stats::SimStats;

/// One stimulus step: a raw funct value and two operands.
pub type TraceOp = (u8, u32, u32);

/// Top-level simulator: CFU dispatcher + activity counters.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    /// The device under simulation.
    pub cfu: Cfu,
    /// Counters accumulated across all ticks and calls.
    pub stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with the funct table described by `config`.
    ///
    /// # Errors
    ///
    /// [`CfuError::Config`] if the configuration names a funct outside the
    /// table, a duplicate slot, or an unknown behavior. Construction is the
    /// only place configuration defects surface; a constructed simulator
    /// cannot fail on dispatch.
    pub fn new(config: &Config) -> Result<Self, CfuError> {
        let table = FunctTable::from_config(&config.cfu)?;
        debug!(entries = config.cfu.table.len(), "funct table built");
        Ok(Self {
            cfu: Cfu::new(table),
            stats: SimStats::new(),
        })
    }

    /// Advances the whole simulation by one clock cycle.
    pub fn tick(&mut self) {
        self.cfu.tick();
        self.stats.cycles += 1;
        trace!(cycle = self.stats.cycles, "tick");
    }

    /// Runs a stimulus trace: each op is issued, clocked, and its response
    /// collected, one call per cycle.
    ///
    /// # Errors
    ///
    /// [`CfuError::Config`] for a raw funct value outside the selector range;
    /// protocol violations cannot occur here because the loop consumes every
    /// response before issuing the next request.
    pub fn run_trace(&mut self, ops: &[TraceOp]) -> Result<Vec<u32>, CfuError> {
        let mut results = Vec::with_capacity(ops.len());
        for &(funct, a, b) in ops {
            let opcode = Opcode::new(funct)?;
            self.cfu.issue(opcode, a, b)?;
            self.stats.record_issue(opcode);
            self.tick();
            let result = self.cfu.response()?;
            self.stats.record_response();
            results.push(result);
        }
        Ok(results)
    }
}
