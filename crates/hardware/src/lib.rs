//! LS-8 emulator library.
//!
//! This crate implements a minimal 8-bit virtual CPU with the following:
//! 1. **Memory:** A flat, bounds-checked, byte-addressed RAM (256 bytes by default).
//! 2. **Core:** Eight registers, PC, FL and a downward-growing stack, driven by a
//!    fetch-decode-execute loop with an internal ALU and `INT`/`IRET` interrupts.
//! 3. **ISA:** A closed opcode table whose high two bits encode instruction length.
//! 4. **Simulation:** Text program loader, clock-paced run loop, configuration and
//!    statistics.
//!
//! ```
//! use ls8_core::config::Config;
//! use ls8_core::sim::{Exit, Simulator};
//!
//! // LDI R0,8 / PRN R0 / HLT
//! let program = [0b1001_1001, 0, 8, 0b0100_0011, 0, 0b0000_0001];
//! let mut config = Config::default();
//! config.clock.paced = false;
//!
//! let mut sim = Simulator::load(&program, &config, Vec::new()).unwrap();
//! assert_eq!(sim.run().unwrap(), Exit::Halted);
//! assert_eq!(sim.cpu.output(), b"8\n");
//! ```

/// Common types and constants (registers, faults, machine geometry).
pub mod common;
/// Emulator configuration (defaults and JSON-deserialisable structures).
pub mod config;
/// CPU core (state, execution loop, handlers, interrupts, ALU).
pub mod core;
/// Instruction set (opcodes, decoding, disassembly).
pub mod isa;
/// Program loader and simulation driver.
pub mod sim;
/// Main memory.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type.
pub use crate::core::Cpu;
/// Clock-paced driver that owns a CPU.
pub use crate::sim::Simulator;
/// Main memory type.
pub use crate::soc::Ram;
