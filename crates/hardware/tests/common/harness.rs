use cfu_core::Simulator;
use cfu_core::core::cfu::{Behavior, Cfu, FunctTable, Opcode};
use cfu_core::stats::SimStats;

/// Lockstep harness owning the simulator under test.
///
/// Plays the role a hardware testbench plays for the gateware: it settles
/// request inputs, steps the clock, and samples the response, one call per
/// cycle.
pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A context whose funct table holds the template behavior in every slot.
    pub fn new() -> Self {
        Self::with_table(&[])
    }

    /// A context with the given `(funct, behavior)` entries installed.
    ///
    /// Entries must be valid; table construction defects are test bugs here,
    /// not conditions under test.
    pub fn with_table(entries: &[(u8, Behavior)]) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let table = FunctTable::from_entries(entries).unwrap();
        Self {
            sim: Simulator {
                cfu: Cfu::new(table),
                stats: SimStats::new(),
            },
        }
    }

    /// One complete call through the one-cycle protocol.
    pub fn call(&mut self, funct: u8, a: u32, b: u32) -> u32 {
        let opcode = Opcode::new(funct).unwrap();
        self.sim.cfu.call(opcode, a, b).unwrap()
    }

    /// Verifies `(a, b, expected)` vectors against one funct slot.
    pub fn verify(&mut self, funct: u8, cases: &[(u32, u32, u32)]) {
        for &(a, b, expected) in cases {
            let got = self.call(funct, a, b);
            assert_eq!(
                got, expected,
                "funct{funct}({a:#x}, {b:#x}) = {got:#x}, expected {expected:#x}"
            );
        }
    }
}
