//! ALU logical and comparison operations.

use super::AluOp;
use crate::core::arch::Flags;

/// Executes a bitwise operation. Returns `a` unchanged for other opcodes.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        _ => a,
    }
}

/// Compares two unsigned register values. Exactly one flag is set in the result.
pub const fn compare(a: u8, b: u8) -> Flags {
    Flags::compare(a, b)
}
