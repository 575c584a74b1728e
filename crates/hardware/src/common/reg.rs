//! General-purpose register file.
//!
//! Eight byte-wide registers, `R0`-`R7`. Arithmetic on register values wraps modulo 256;
//! the register file itself only stores bytes. `R7` doubles as the stack pointer and is
//! seeded with the stack top on construction.

use std::fmt;

use super::constants::{REG_SP, REGISTER_COUNT, STACK_TOP};

/// The LS-8 register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except SP, which holds `0xF4`.
    pub fn new() -> Self {
        Self::with_stack_top(STACK_TOP)
    }

    /// Creates a register file whose stack pointer starts at `stack_top`.
    pub fn with_stack_top(stack_top: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[REG_SP] = stack_top;
        Self { regs }
    }

    /// Reads a register, or `None` if `idx` does not name one.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<u8> {
        self.regs.get(idx).copied()
    }

    /// Returns a mutable slot for a register, or `None` if `idx` does not name one.
    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut u8> {
        self.regs.get_mut(idx)
    }

    /// Reads a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 8`. Use [`RegisterFile::get`] for operand-supplied indices.
    #[inline]
    pub fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 8`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[REG_SP] = val;
    }

    /// Snapshot of all eight registers.
    pub const fn as_array(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..REGISTER_COUNT).step_by(4) {
            for i in row..row + 4 {
                write!(f, "R{i}={:#04x} ", self.regs[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
