//! ALU arithmetic operations.
//!
//! All results wrap modulo 256. Overflow is never an error.

use super::{AluError, AluOp};

/// Executes an arithmetic operation.
///
/// Returns `a` unchanged for non-arithmetic opcodes.
///
/// # Errors
///
/// [`AluError::DivisionByZero`] for `Div` with `b == 0`.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    Ok(match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => a.checked_div(b).ok_or(AluError::DivisionByZero)?,
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
        AluOp::And | AluOp::Cmp => a,
    })
}
