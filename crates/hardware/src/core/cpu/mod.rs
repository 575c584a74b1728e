//! CPU Core Definition and Initialization.
//!
//! This module defines the `Cpu` structure, the container for the entire processor
//! state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, flags and the run state.
//! 2. **Memory:** Exclusive ownership of the RAM the program runs from.
//! 3. **Output:** The stream `PRN` writes decimal values to.
//! 4. **Interrupts:** The global interrupt-enable latch used by `INT`/`IRET`.

/// Fetch-decode-execute loop.
pub mod execution;

/// Instruction handlers.
pub mod instructions;

/// Register operand access and stack operations.
pub mod memory;

/// Interrupt raise, dispatch and return.
pub mod trap;

use std::fmt;
use std::io::{self, Write};

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::{CpuState, Flags};
use crate::isa::disasm;
use crate::soc::Ram;
use crate::stats::SimStats;

pub use execution::Flow;

/// The LS-8 CPU.
///
/// `W` is where `PRN` output goes; standard output unless a different writer is
/// supplied through [`Cpu::with_output`].
pub struct Cpu<W = io::Stdout> {
    /// General-purpose registers `R0`-`R7`.
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: usize,
    /// Flags register.
    pub fl: Flags,
    /// Main memory, owned for the CPU's whole lifetime.
    pub ram: Ram,
    /// Lifecycle state.
    pub state: CpuState,
    /// Whether pending interrupts are dispatched.
    pub interrupts_enabled: bool,
    /// Log each executed instruction at debug level.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
    out: W,
}

impl<W: Write> Cpu<W> {
    /// Creates an idle CPU that owns `ram` and prints to `out`.
    ///
    /// PC and FL are zero, registers are zero except SP, interrupts are enabled.
    pub fn with_output(ram: Ram, config: &Config, out: W) -> Self {
        Self {
            regs: RegisterFile::with_stack_top(config.memory.stack_top),
            pc: 0,
            fl: Flags::default(),
            ram,
            state: CpuState::Idle,
            interrupts_enabled: true,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            out,
        }
    }

    /// The output writer.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the CPU, returning its output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Returns `true` once the CPU has halted.
    pub const fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    /// Formats registers, PC, FL and the instruction at PC.
    pub fn state_report(&self) -> String {
        let window_end = (self.pc + 3).min(self.ram.len());
        let at_pc = self
            .ram
            .as_slice()
            .get(self.pc..window_end)
            .map_or_else(|| String::from("<out of range>"), disasm::disassemble);
        format!(
            "state={} pc={:#04x} fl={} ie={} inst=[{at_pc}]\n{}",
            self.state, self.pc, self.fl, self.interrupts_enabled, self.regs
        )
    }

    /// Dumps [`Cpu::state_report`] to stderr.
    pub fn dump_state(&self) {
        eprintln!("{}", self.state_report());
    }
}

impl<W> fmt::Debug for Cpu<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("pc", &self.pc)
            .field("fl", &self.fl)
            .field("state", &self.state)
            .field("interrupts_enabled", &self.interrupts_enabled)
            .finish_non_exhaustive()
    }
}
