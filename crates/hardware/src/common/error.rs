//! Fault definitions.
//!
//! Every fault is fatal: the CPU transitions to Halted and the run ends. Execution is
//! fully deterministic and local, so nothing here is retried.

use std::io;

use thiserror::Error;

/// Fatal errors raised while the CPU executes a program.
///
/// Addresses and program counters are reported in hex, opcodes as raw bit patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A memory access fell outside `[0, capacity)`.
    #[error("memory access out of range: address {addr:#04x} (capacity {capacity} bytes)")]
    MemoryOutOfBounds {
        /// The offending address.
        addr: usize,
        /// Capacity of the RAM that was accessed.
        capacity: usize,
    },

    /// The byte at `pc` does not encode any known instruction.
    #[error("unknown instruction {opcode:#010b} at {pc:#04x}")]
    UnknownOpcode {
        /// The raw instruction byte.
        opcode: u8,
        /// Address of the instruction byte.
        pc: usize,
    },

    /// `DIV` with a zero divisor.
    #[error("division by zero at {pc:#04x}")]
    DivisionByZero {
        /// Address of the `DIV` instruction.
        pc: usize,
    },

    /// An operand named a register outside `R0`-`R7`.
    #[error("invalid register index {index} at {pc:#04x}")]
    InvalidRegister {
        /// The operand byte used as a register index.
        index: u8,
        /// Address of the instruction.
        pc: usize,
    },

    /// `INT` named an interrupt line outside `0..8`.
    #[error("invalid interrupt number {number} at {pc:#04x}")]
    InvalidInterrupt {
        /// The requested interrupt number.
        number: u8,
        /// Address of the `INT` instruction.
        pc: usize,
    },

    /// `PRN` could not write to the output stream.
    #[error("output error at {pc:#04x}: {kind}")]
    Output {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
        /// Address of the `PRN` instruction.
        pc: usize,
    },
}
