//! LS-8 emulator CLI.
//!
//! Runs one program file to completion: `ls8 <program>`. It performs:
//! 1. **Argument parsing:** Exactly one positional path; anything else prints usage and
//!    exits non-zero.
//! 2. **Logging:** Installs a `tracing` subscriber on stderr (`RUST_LOG` overrides the
//!    default `warn` filter).
//! 3. **Run:** Loads the program, ticks the CPU until `HLT`, and maps faults to exit 1.
//!
//! A JSON configuration file may be named in the `LS8_CONFIG` environment variable.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::sim::{Exit, SimError, Simulator};

/// Environment variable naming an optional JSON configuration file.
const CONFIG_ENV: &str = "LS8_CONFIG";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit CPU emulator",
    long_about = "Load an LS-8 program (one binary byte per line, '#' starts a comment) and run it until HLT.\n\nExamples:\n  ls8 programs/print8.ls8\n  RUST_LOG=debug ls8 programs/mult.ls8"
)]
struct Cli {
    /// Program file to load at address 0.
    program: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    process::exit(match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            1
        }
    });
}

/// Loads the configuration, the program, and runs it. Returns the process exit code.
fn run(cli: &Cli) -> Result<i32, SimError> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    tracing::info!(program = %cli.program.display(), "loading");
    let mut sim = Simulator::from_file(&cli.program, &config)?;
    let result = sim.run();

    if config.general.trace_instructions {
        sim.cpu.stats.print();
    }

    match result {
        Ok(Exit::Halted) => Ok(0),
        Ok(Exit::TickLimit) => {
            eprintln!("[!] tick limit reached before HLT");
            sim.cpu.dump_state();
            Ok(1)
        }
        Err(fault) => {
            eprintln!("[!] FATAL: {fault}");
            sim.cpu.dump_state();
            Ok(1)
        }
    }
}
