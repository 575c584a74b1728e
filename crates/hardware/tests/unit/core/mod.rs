//! # Core Tests

/// Architectural state: flags and lifecycle.
pub mod arch;


/// Execution units.
pub mod units;
