//! System components outside the CPU.
//!
//! The LS-8 has a single device: a flat, byte-addressed RAM owned by the CPU.

/// Main memory.
pub mod memory;

pub use memory::Ram;
