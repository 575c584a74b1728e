//! Arithmetic Logic Unit (ALU).
//!
//! Pure functions of `(op, a, b)` on 8-bit register values. Arithmetic wraps modulo
//! 256; the only error is division by zero.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul, Div, Inc, Dec
//! - [`logic`]:      And, Cmp

/// Wrapping 8-bit arithmetic.
pub mod arithmetic;

/// Bitwise logic and compare.
pub mod logic;

use thiserror::Error;

use crate::core::arch::Flags;

/// Operations the ALU performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b` mod 256.
    Add,
    /// `a * b` mod 256.
    Mul,
    /// `a / b`, integer division.
    Div,
    /// `a & b`.
    And,
    /// `a + 1` mod 256; `b` is ignored.
    Inc,
    /// `a - 1` mod 256; `b` is ignored.
    Dec,
    /// Compare `a` with `b`; produces flags instead of a value.
    Cmp,
}

/// What an ALU operation produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// New value for the destination register.
    Value(u8),
    /// New contents of FL.
    Flags(Flags),
}

/// ALU failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// `Div` with `b == 0`.
    #[error("division by zero")]
    DivisionByZero,
}

/// Arithmetic Logic Unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Errors
    ///
    /// [`AluError::DivisionByZero`] for `Div` with `b == 0`; nothing is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp, AluOutput};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 10, 20), Ok(AluOutput::Value(200)));
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 1), Ok(AluOutput::Value(0)));
    /// assert_eq!(
    ///     Alu::execute(AluOp::Cmp, 3, 3),
    ///     Ok(AluOutput::Flags(Flags::compare(3, 3)))
    /// );
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<AluOutput, AluError> {
        match op {
            AluOp::Add | AluOp::Mul | AluOp::Div | AluOp::Inc | AluOp::Dec => {
                arithmetic::execute(op, a, b).map(AluOutput::Value)
            }
            AluOp::And => Ok(AluOutput::Value(logic::execute(op, a, b))),
            AluOp::Cmp => Ok(AluOutput::Flags(logic::compare(a, b))),
        }
    }
}
