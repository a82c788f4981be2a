//! CFU cycle-stepped simulator CLI.
//!
//! This binary drives the simulation core from the command line. It performs:
//! 1. **Config load:** Build the funct table from a JSON config (or defaults).
//! 2. **Trace run:** Issue a stimulus trace (JSON file or a built-in smoke
//!    trace) through the dispatcher, one call per cycle.
//! 3. **Reporting:** Print per-call results and the statistics summary.

use clap::{Parser, Subcommand};
use std::{fs, process};

use cfu_core::Config;
use cfu_core::Simulator;
use cfu_core::sim::simulator::TraceOp;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "CFU cycle-stepped simulator",
    long_about = "Run a stimulus trace through the CFU dispatcher.\n\nConfiguration is JSON: {\"cfu\": {\"table\": [{\"funct\": 1, \"behavior\": \"xor\"}]}}.\nTraces are JSON arrays of [funct, operand_a, operand_b] triples.\n\nExamples:\n  sim run\n  sim run -c cfu.json -t trace.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a stimulus trace through the dispatcher.
    Run {
        /// JSON configuration file (funct table). Defaults to an all-template table.
        #[arg(short, long)]
        config: Option<String>,

        /// JSON trace file of [funct, a, b] triples. Defaults to a smoke trace.
        #[arg(short, long)]
        trace: Option<String>,
    },
}

/// Smoke trace exercising the template slot, including the wraparound case.
const SMOKE_TRACE: &[TraceOp] = &[
    (0, 0, 0),
    (0, 4, 5),
    (0, 22, 22),
    (0, 0xFFFF_FFFF, 0xFFFF_FFFF),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { config, trace } => cmd_run(config.as_deref(), trace.as_deref()),
    }
}

/// Runs the simulator: builds the funct table, then loops the trace through
/// the one-call-per-cycle protocol and reports statistics.
fn cmd_run(config_path: Option<&str>, trace_path: Option<&str>) {
    let config = match config_path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(msg) => fail(&msg),
        },
        None => Config::default(),
    };

    let trace = match trace_path {
        Some(path) => match load_trace(path) {
            Ok(trace) => trace,
            Err(msg) => fail(&msg),
        },
        None => SMOKE_TRACE.to_vec(),
    };

    let mut sim = match Simulator::new(&config) {
        Ok(sim) => sim,
        Err(err) => fail(&format!("invalid configuration: {err}")),
    };

    let results = match sim.run_trace(&trace) {
        Ok(results) => results,
        Err(err) => fail(&format!("trace failed: {err}")),
    };

    for ((funct, a, b), result) in trace.iter().zip(&results) {
        println!("funct{funct}({a:#010x}, {b:#010x}) = {result:#010x}");
    }
    sim.stats.report();
}

/// Loads and parses a JSON configuration file.
fn load_config(path: &str) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    Config::from_json(&text).map_err(|e| format!("cannot parse {path}: {e}"))
}

/// Loads a JSON trace file: an array of `[funct, a, b]` triples.
fn load_trace(path: &str) -> Result<Vec<TraceOp>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {path}: {e}"))
}

/// Prints an error and exits.
fn fail(msg: &str) -> ! {
    eprintln!("sim: {msg}");
    process::exit(1);
}
