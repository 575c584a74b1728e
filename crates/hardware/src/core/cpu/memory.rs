//! Register Operand Access and Stack.
//!
//! Operand bytes name registers; anything outside `R0`-`R7` is a fault rather than a
//! panic. The stack lives in RAM and grows down from SP (`R7`).

use std::io::Write;

use tracing::trace;

use super::Cpu;
use crate::common::Fault;

impl<W: Write> Cpu<W> {
    /// Reads the register named by an operand byte.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidRegister`] if `index >= 8`.
    pub fn reg(&self, index: u8) -> Result<u8, Fault> {
        self.regs
            .get(usize::from(index))
            .ok_or(Fault::InvalidRegister { index, pc: self.pc })
    }

    /// Mutable access to the register named by an operand byte.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidRegister`] if `index >= 8`.
    pub fn reg_mut(&mut self, index: u8) -> Result<&mut u8, Fault> {
        let pc = self.pc;
        self.regs
            .get_mut(usize::from(index))
            .ok_or(Fault::InvalidRegister { index, pc })
    }

    /// Pushes a byte: decrement SP, then store at `Memory[SP]`.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if the new SP is outside RAM; SP is left unchanged.
    pub fn push(&mut self, value: u8) -> Result<(), Fault> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.ram.write(usize::from(sp), value)?;
        self.regs.set_sp(sp);
        trace!(sp, value, "push");
        Ok(())
    }

    /// Pops a byte: load `Memory[SP]`, then increment SP.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if SP is outside RAM; SP is left unchanged.
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        let value = self.ram.read(usize::from(sp))?;
        self.regs.set_sp(sp.wrapping_add(1));
        trace!(sp, value, "pop");
        Ok(value)
    }
}
