//! # Unit Components
//!
//! Tests for each part of the emulator, grouped the way the library is laid out.

/// Register file and fault tests.
pub mod common;


/// CPU core: flags, ALU, execution loop, instruction handlers, stack, interrupts.
pub mod core;
