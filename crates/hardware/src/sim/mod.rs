//! Program loading and simulation driving.
//!
//! Provides the text program loader and the `Simulator`, which paces the CPU's clock
//! and runs it to completion.

/// Text program loader.
pub mod loader;

/// Clock-paced run loop.
pub mod simulator;

pub use simulator::{Clock, Exit, SimError, Simulator};
