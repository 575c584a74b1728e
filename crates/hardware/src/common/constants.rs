//! LS-8 machine constants.
//!
//! Geometry of the reference machine: 8 byte-wide registers, 256 bytes of RAM,
//! a downward-growing stack and an interrupt vector table at the top of memory.

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Default RAM capacity in bytes; also the size of the 8-bit address space.
pub const RAM_SIZE: usize = 256;

/// Register holding the interrupt mask (IM).
pub const REG_IM: usize = 5;

/// Register holding the interrupt status (IS).
pub const REG_IS: usize = 6;

/// Register reserved as the stack pointer (SP).
pub const REG_SP: usize = 7;

/// Initial stack pointer value; the stack grows down from here.
pub const STACK_TOP: u8 = 0xF4;

/// Base address of the interrupt vector table (`0xF8..=0xFF`).
pub const INTERRUPT_VECTOR_BASE: usize = 0xF8;

/// Number of interrupt lines (one per bit of IM/IS).
pub const INTERRUPT_COUNT: u8 = 8;

/// Reference clock period in microseconds (1 kHz virtual clock).
pub const TICK_PERIOD_US: u64 = 1_000;
