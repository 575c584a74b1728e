//! Instruction handlers.
//!
//! One arm per [`Opcode`]. Handlers never touch PC advancement themselves; they report a
//! [`Flow`] and the tick loop applies it. Register operands are validated before any
//! state is modified, so a faulting instruction leaves registers and flags unchanged.

use std::io::Write;

use super::{Cpu, Flow};
use crate::common::Fault;
use crate::core::units::alu::{Alu, AluError, AluOp, AluOutput};
use crate::isa::{Instruction, Opcode};

impl<W: Write> Cpu<W> {
    /// Executes a decoded instruction located at the current PC.
    ///
    /// # Errors
    ///
    /// The instruction's [`Fault`], if any.
    pub fn execute(&mut self, inst: &Instruction) -> Result<Flow, Fault> {
        let Instruction {
            opcode,
            operand_a,
            operand_b,
        } = *inst;

        match opcode {
            Opcode::Ldi => {
                *self.reg_mut(operand_a)? = operand_b;
                Ok(Flow::Next)
            }
            Opcode::Prn => {
                let value = self.reg(operand_a)?;
                self.emit(value)?;
                Ok(Flow::Next)
            }
            Opcode::Hlt => Ok(Flow::Halt),

            Opcode::Add => self.alu(AluOp::Add, operand_a, Some(operand_b)),
            Opcode::Mul => self.alu(AluOp::Mul, operand_a, Some(operand_b)),
            Opcode::Div => self.alu(AluOp::Div, operand_a, Some(operand_b)),
            Opcode::And => self.alu(AluOp::And, operand_a, Some(operand_b)),
            Opcode::Cmp => self.alu(AluOp::Cmp, operand_a, Some(operand_b)),
            Opcode::Inc => self.alu(AluOp::Inc, operand_a, None),
            Opcode::Dec => self.alu(AluOp::Dec, operand_a, None),

            Opcode::Jmp => self.jump_if(true, operand_a),
            Opcode::Jeq => self.jump_if(self.fl.equal(), operand_a),
            Opcode::Jne => self.jump_if(!self.fl.equal(), operand_a),
            Opcode::Call => {
                let target = self.reg(operand_a)?;
                // Return addresses are bytes; RAM never exceeds the 8-bit address space.
                let ret = (self.pc + inst.len()) as u8;
                self.push(ret)?;
                Ok(Flow::Jump(usize::from(target)))
            }

            Opcode::Int => self.raise_interrupt(operand_a),
            Opcode::Iret => self.return_from_interrupt(),
        }
    }

    /// Runs `op` on `reg[a]` (and `reg[b]` for binary ops), writing the result to `reg[a]`
    /// or to FL for compares.
    fn alu(&mut self, op: AluOp, a: u8, b: Option<u8>) -> Result<Flow, Fault> {
        let lhs = self.reg(a)?;
        let rhs = match b {
            Some(b) => self.reg(b)?,
            None => 0,
        };

        let pc = self.pc;
        let output = Alu::execute(op, lhs, rhs).map_err(|err| match err {
            AluError::DivisionByZero => Fault::DivisionByZero { pc },
        })?;

        match output {
            AluOutput::Value(value) => *self.reg_mut(a)? = value,
            AluOutput::Flags(flags) => self.fl = flags,
        }
        Ok(Flow::Next)
    }

    /// Jumps to the address in `reg[r]` when `taken`. The register is validated either way.
    fn jump_if(&self, taken: bool, r: u8) -> Result<Flow, Fault> {
        let target = self.reg(r)?;
        Ok(if taken {
            Flow::Jump(usize::from(target))
        } else {
            Flow::Next
        })
    }

    /// Writes `value` in decimal, one per line.
    fn emit(&mut self, value: u8) -> Result<(), Fault> {
        let pc = self.pc;
        writeln!(self.out, "{value}")
            .and_then(|()| self.out.flush())
            .map_err(|e| Fault::Output { kind: e.kind(), pc })
    }
}
