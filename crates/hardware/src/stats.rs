//! Simulation statistics collection and reporting.
//!
//! This module tracks activity counters for the CFU simulator. It provides:
//! 1. **Cycle Counts:** Total clock edges stepped.
//! 2. **Call Protocol:** Requests issued and responses consumed.
//! 3. **Dispatch Mix:** Per-funct-slot dispatch counts.

use crate::common::constants::NUM_FUNCTS;
use crate::core::cfu::Opcode;

/// Activity counters for one simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Total clock cycles stepped.
    pub cycles: u64,
    /// Requests accepted by the dispatcher shell.
    pub requests_issued: u64,
    /// Responses consumed by the harness.
    pub responses_consumed: u64,
    /// Dispatch count per funct slot.
    pub dispatches: [u64; NUM_FUNCTS],
}

impl SimStats {
    /// Creates a zeroed statistics block.
    pub const fn new() -> Self {
        Self {
            cycles: 0,
            requests_issued: 0,
            responses_consumed: 0,
            dispatches: [0; NUM_FUNCTS],
        }
    }

    /// Records one accepted request against its funct slot.
    pub fn record_issue(&mut self, opcode: Opcode) {
        self.requests_issued += 1;
        self.dispatches[opcode.index()] += 1;
    }

    /// Records one consumed response.
    pub fn record_response(&mut self) {
        self.responses_consumed += 1;
    }

    /// Prints a summary block to stdout.
    pub fn report(&self) {
        println!("\n==========================================================");
        println!("CFU SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("requests_issued          {}", self.requests_issued);
        println!("responses_consumed       {}", self.responses_consumed);
        for (funct, count) in self.dispatches.iter().enumerate() {
            if *count > 0 {
                println!("dispatch_funct{funct}          {count}");
            }
        }
        println!("==========================================================");
    }
}
