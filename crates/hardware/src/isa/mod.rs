//! Instruction Set Architecture (ISA) Definitions.
//!
//! The LS-8 instruction set: one opcode byte followed by zero, one or two operand
//! bytes. The two high bits of the opcode give the operand count, so the length of
//! every instruction is known before it is decoded.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// The `Opcode` enum, decoded `Instruction`s and bit extraction helpers.
pub mod instruction;

/// Raw opcode byte values.
pub mod opcodes;

pub use instruction::{Instruction, InstructionBits, InstructionClass, Opcode, OperandKind};
