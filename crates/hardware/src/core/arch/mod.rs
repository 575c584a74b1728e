//! LS-8 architectural state.
//!
//! 1. **Flags:** The FL register written by `CMP` and read by conditional jumps.
//! 2. **State:** The Idle / Running / Halted lifecycle of the CPU.

/// The FL (flags) register.
pub mod flags;

/// CPU lifecycle states.
pub mod state;

pub use flags::Flags;
pub use state::CpuState;
