//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. Each tick performs, in order:
//! 1. **Interrupts:** Dispatches a pending, unmasked interrupt (see [`super::trap`]).
//! 2. **Fetch:** Reads the instruction register at PC and, unconditionally, the two
//!    bytes after it.
//! 3. **Decode/Execute:** Looks the opcode up and runs its handler.
//! 4. **Advance:** Moves PC by the encoded length unless the handler redirected it.
//!
//! Any fault halts the CPU with PC still at the faulting instruction.

use std::io::Write;

use tracing::{debug, info};

use super::Cpu;
use crate::common::Fault;
use crate::core::arch::CpuState;
use crate::isa::Instruction;

/// What the tick loop does with PC after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Advance PC by the instruction length.
    Next,
    /// PC was redirected; do not advance.
    Jump(usize),
    /// Stop the CPU; PC stays at the halting instruction.
    Halt,
}

impl<W: Write> Cpu<W> {
    /// Moves an idle CPU to Running. No effect in any other state.
    pub fn start(&mut self) {
        if self.state == CpuState::Idle {
            self.state = CpuState::Running;
            info!(pc = self.pc, "clock started");
        }
    }

    /// Advances the CPU by one clock tick.
    ///
    /// An idle CPU is started first; a halted CPU ignores the tick.
    ///
    /// # Errors
    ///
    /// Any [`Fault`] raised by the instruction. The CPU is Halted when this returns `Err`.
    pub fn tick(&mut self) -> Result<(), Fault> {
        match self.state {
            CpuState::Halted => return Ok(()),
            CpuState::Idle => self.start(),
            CpuState::Running => {}
        }

        self.stats.ticks += 1;
        if let Err(fault) = self.step() {
            debug!(pc = self.pc, "fault: {fault}");
            self.state = CpuState::Halted;
            return Err(fault);
        }
        Ok(())
    }

    /// Ticks back to back until the CPU halts.
    ///
    /// # Errors
    ///
    /// The [`Fault`] that halted the CPU, if it did not stop on `HLT`.
    pub fn run(&mut self) -> Result<(), Fault> {
        self.start();
        while !self.is_halted() {
            self.tick()?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), Fault> {
        self.service_interrupts()?;

        let pc = self.pc;
        let ir = self.ram.read(pc)?;
        let operand_a = self.ram.read(pc + 1)?;
        let operand_b = self.ram.read(pc + 2)?;

        let inst = Instruction::decode(ir, operand_a, operand_b)
            .map_err(|opcode| Fault::UnknownOpcode { opcode, pc })?;

        if self.trace {
            debug!("{pc:#04x}: {inst}");
        }

        let flow = self.execute(&inst)?;
        self.stats.retire(inst.opcode.class());

        match flow {
            Flow::Next => self.pc = pc + inst.len(),
            Flow::Jump(target) => {
                self.stats.branches_taken += 1;
                self.pc = target;
            }
            Flow::Halt => {
                self.state = CpuState::Halted;
                info!(pc, ticks = self.stats.ticks, "halted");
            }
        }
        Ok(())
    }
}
