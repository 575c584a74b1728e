//! Interrupt Handling Logic.
//!
//! 1. **Raise:** `INT` sets bit `n` of IS (`R6`).
//! 2. **Dispatch:** At the start of a tick, with interrupts enabled, the lowest pending
//!    bit of `IM & IS` is cleared and serviced: interrupts are disabled, PC, FL and
//!    `R0`-`R6` are pushed, and PC is loaded from the vector table at `0xF8 + n`.
//! 3. **Return:** `IRET` pops `R6`-`R0`, FL and PC, then re-enables interrupts.

use std::io::Write;

use tracing::trace;

use super::{Cpu, Flow};
use crate::common::Fault;
use crate::common::constants::{INTERRUPT_COUNT, INTERRUPT_VECTOR_BASE, REG_IM, REG_IS};
use crate::core::arch::Flags;

impl<W: Write> Cpu<W> {
    /// `INT r`: marks the interrupt numbered by `reg[r]` as pending.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidRegister`] for a bad operand, [`Fault::InvalidInterrupt`] if the
    /// number is not below 8.
    pub fn raise_interrupt(&mut self, r: u8) -> Result<Flow, Fault> {
        let number = self.reg(r)?;
        if number >= INTERRUPT_COUNT {
            return Err(Fault::InvalidInterrupt {
                number,
                pc: self.pc,
            });
        }
        let status = self.regs.read(REG_IS) | (1 << number);
        self.regs.write(REG_IS, status);
        trace!(number, status, "interrupt raised");
        Ok(Flow::Next)
    }

    /// Dispatches the highest-priority (lowest-numbered) pending interrupt, if any.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if the stack or vector table is outside RAM.
    pub fn service_interrupts(&mut self) -> Result<(), Fault> {
        if !self.interrupts_enabled {
            return Ok(());
        }
        let pending = self.regs.read(REG_IM) & self.regs.read(REG_IS);
        if pending == 0 {
            return Ok(());
        }

        let line = pending.trailing_zeros() as usize;
        self.regs
            .write(REG_IS, self.regs.read(REG_IS) & !(1u8 << line));
        self.interrupts_enabled = false;

        let ret = self.pc as u8;
        self.push(ret)?;
        self.push(self.fl.bits())?;
        for r in 0..=REG_IS {
            let value = self.regs.read(r);
            self.push(value)?;
        }

        let vector = self.ram.read(INTERRUPT_VECTOR_BASE + line)?;
        trace!(line, ret, vector, "interrupt dispatched");
        self.pc = usize::from(vector);
        self.stats.interrupts_serviced += 1;
        Ok(())
    }

    /// `IRET`: restores `R6`-`R0`, FL and PC from the stack and re-enables interrupts.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if the stack is outside RAM.
    pub fn return_from_interrupt(&mut self) -> Result<Flow, Fault> {
        for r in (0..=REG_IS).rev() {
            let value = self.pop()?;
            self.regs.write(r, value);
        }
        self.fl = Flags::from_bits(self.pop()?);
        let ret = self.pop()?;
        self.interrupts_enabled = true;
        Ok(Flow::Jump(usize::from(ret)))
    }
}
