//! Instruction encoding and decoding.
//!
//! [`Opcode`] is the closed set of LS-8 instructions. Decoding a byte is a lookup in
//! [`Opcode::ALL`]; everything else about an instruction (mnemonic, operand kinds,
//! class, length) hangs off the variant, so adding an instruction is a table edit and
//! the compiler flags every `match` that has to learn about it.

use std::fmt;

use super::opcodes::{self, OPERAND_COUNT_SHIFT};

/// Length information carried by the opcode byte itself.
pub trait InstructionBits {
    /// Number of operand bytes that follow the opcode (bits 7-6).
    fn operand_count(self) -> usize;

    /// Total instruction length in bytes, `operand_count + 1`.
    fn instruction_len(self) -> usize;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn instruction_len(self) -> usize {
        self.operand_count() + 1
    }
}

/// What an operand byte means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// Index of a general-purpose register (`R0`-`R7`).
    Register,
    /// An 8-bit literal.
    Immediate,
}

/// Coarse instruction category, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Arithmetic, logic and compare.
    Alu,
    /// Register loads.
    Load,
    /// Jumps and calls.
    Branch,
    /// Output.
    Io,
    /// `INT` / `IRET`.
    Interrupt,
    /// `HLT`.
    System,
}

/// LS-8 opcodes. The discriminant is the encoded byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `HLT`
    Hlt = opcodes::HLT,
    /// `IRET`
    Iret = opcodes::IRET,
    /// `PRN reg`
    Prn = opcodes::PRN,
    /// `CALL reg`
    Call = opcodes::CALL,
    /// `INT reg`
    Int = opcodes::INT,
    /// `JEQ reg`
    Jeq = opcodes::JEQ,
    /// `JNE reg`
    Jne = opcodes::JNE,
    /// `JMP reg`
    Jmp = opcodes::JMP,
    /// `INC reg`
    Inc = opcodes::INC,
    /// `DEC reg`
    Dec = opcodes::DEC,
    /// `LDI reg, imm`
    Ldi = opcodes::LDI,
    /// `CMP regA, regB`
    Cmp = opcodes::CMP,
    /// `ADD regA, regB`
    Add = opcodes::ADD,
    /// `MUL regA, regB`
    Mul = opcodes::MUL,
    /// `DIV regA, regB`
    Div = opcodes::DIV,
    /// `AND regA, regB`
    And = opcodes::AND,
}

const REG: OperandKind = OperandKind::Register;
const IMM: OperandKind = OperandKind::Immediate;

impl Opcode {
    /// Every opcode, in encoding order.
    pub const ALL: [Self; 16] = [
        Self::Hlt,
        Self::Iret,
        Self::Prn,
        Self::Call,
        Self::Int,
        Self::Jeq,
        Self::Jne,
        Self::Jmp,
        Self::Inc,
        Self::Dec,
        Self::Ldi,
        Self::Cmp,
        Self::Add,
        Self::Mul,
        Self::Div,
        Self::And,
    ];

    /// Looks up the opcode for a raw instruction byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.byte() == byte)
    }

    /// The encoded byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Total instruction length in bytes, taken from the encoding.
    #[inline]
    pub fn len(self) -> usize {
        self.byte().instruction_len()
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Iret => "IRET",
            Self::Prn => "PRN",
            Self::Call => "CALL",
            Self::Int => "INT",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Jmp => "JMP",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Ldi => "LDI",
            Self::Cmp => "CMP",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::And => "AND",
        }
    }

    /// Declared operands. Always as long as the encoding's operand count.
    pub const fn operands(self) -> &'static [OperandKind] {
        match self {
            Self::Hlt | Self::Iret => &[],
            Self::Prn
            | Self::Call
            | Self::Int
            | Self::Jeq
            | Self::Jne
            | Self::Jmp
            | Self::Inc
            | Self::Dec => &[REG],
            Self::Ldi => &[REG, IMM],
            Self::Cmp | Self::Add | Self::Mul | Self::Div | Self::And => &[REG, REG],
        }
    }

    /// Instruction category.
    pub const fn class(self) -> InstructionClass {
        match self {
            Self::Hlt => InstructionClass::System,
            Self::Iret | Self::Int => InstructionClass::Interrupt,
            Self::Prn => InstructionClass::Io,
            Self::Call | Self::Jeq | Self::Jne | Self::Jmp => InstructionClass::Branch,
            Self::Ldi => InstructionClass::Load,
            Self::Inc | Self::Dec | Self::Cmp | Self::Add | Self::Mul | Self::Div | Self::And => {
                InstructionClass::Alu
            }
        }
    }

    /// Looks up an opcode by mnemonic, ignoring case.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Fails with the raw byte when it is not an LS-8 opcode.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        op.byte()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction: the opcode plus the two bytes that follow it.
///
/// Both operand bytes are always fetched; instructions with fewer operands ignore
/// the extra ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The decoded opcode.
    pub opcode: Opcode,
    /// Byte at `PC + 1`.
    pub operand_a: u8,
    /// Byte at `PC + 2`.
    pub operand_b: u8,
}

impl Instruction {
    /// Decodes an instruction register and its operand bytes.
    ///
    /// Returns the raw byte as the error when it is not an opcode.
    pub fn decode(ir: u8, operand_a: u8, operand_b: u8) -> Result<Self, u8> {
        let opcode = Opcode::try_from(ir)?;
        Ok(Self {
            opcode,
            operand_a,
            operand_b,
        })
    }

    /// Length in bytes; the PC advance for a non-branching instruction.
    #[inline]
    pub fn len(&self) -> usize {
        self.opcode.len()
    }

    /// Re-encodes the instruction, dropping operand bytes it does not use.
    pub fn encode(&self) -> Vec<u8> {
        [self.opcode.byte(), self.operand_a, self.operand_b][..self.len()].to_vec()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::disasm::disassemble(&[
            self.opcode.byte(),
            self.operand_a,
            self.operand_b,
        ]))
    }
}
