//! Common types and constants shared by every part of the emulator.
//!
//! This module provides:
//! 1. **Constants:** Machine geometry (register count, RAM size, reserved registers).
//! 2. **Error Handling:** The `Fault` taxonomy for fatal execution errors.
//! 3. **Register Management:** The eight-entry general-purpose register file.

/// Machine-wide constants (register indices, memory geometry, clock).
pub mod constants;

/// Fatal execution faults.
pub mod error;

/// General-purpose register file.
pub mod reg;

pub use error::Fault;
pub use reg::RegisterFile;
