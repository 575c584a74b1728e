//! LS-8 Opcodes.
//!
//! Raw byte values. Bits 7-6 hold the operand count, so `LDI` (`10xxxxxx`) is three
//! bytes long and `HLT` (`00xxxxxx`) is one.

/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;

/// Return from an interrupt handler.
pub const IRET: u8 = 0b0000_1011;

/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0011;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0100_1000;

/// Raise the interrupt numbered by a register.
pub const INT: u8 = 0b0100_1010;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0001;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0010;

/// Unconditional jump.
pub const JMP: u8 = 0b0101_0100;

/// Increment a register.
pub const INC: u8 = 0b0111_1000;

/// Decrement a register.
pub const DEC: u8 = 0b0111_1001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1001_1001;

/// Compare two registers and set FL.
pub const CMP: u8 = 0b1010_0000;

/// Add two registers.
pub const ADD: u8 = 0b1010_1000;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_1010;

/// Integer-divide two registers.
pub const DIV: u8 = 0b1010_1011;

/// Bitwise-AND two registers.
pub const AND: u8 = 0b1011_0011;

/// Shift that moves the operand-count field into the low bits.
pub const OPERAND_COUNT_SHIFT: u32 = 6;
