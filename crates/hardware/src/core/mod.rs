//! Core processor implementation.
//!
//! This module contains the CPU (state, fetch-decode-execute loop, instruction
//! handlers, interrupts), its architectural building blocks and the ALU.

/// Architectural state that is not a register (flags, run state).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
