//! Execution units.

/// Arithmetic Logic Unit for register arithmetic, logic and compare.
pub mod alu;
