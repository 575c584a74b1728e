//! Instruction Disassembler for the LS-8.
//!
//! Converts the bytes of one instruction into text for tracing, state dumps and
//! test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1001_1001, 0, 8]), "LDI R0,8");
//! assert_eq!(disassemble(&[0b0000_0001]), "HLT");
//! ```

use super::instruction::{Opcode, OperandKind};

/// Disassembles the instruction starting at `bytes[0]`.
///
/// Register operands print as `R<n>`, immediates in decimal. Bytes that are not an
/// opcode render as `.byte 0b<bits>`; missing operand bytes render as `?`.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&ir) = bytes.first() else {
        return String::from("<empty>");
    };
    let Some(op) = Opcode::from_byte(ir) else {
        return format!(".byte {ir:#010b}");
    };

    let operands: Vec<String> = op
        .operands()
        .iter()
        .enumerate()
        .map(|(i, kind)| match (kind, bytes.get(i + 1)) {
            (OperandKind::Register, Some(r)) => format!("R{r}"),
            (OperandKind::Immediate, Some(v)) => v.to_string(),
            (_, None) => String::from("?"),
        })
        .collect();

    if operands.is_empty() {
        op.mnemonic().to_string()
    } else {
        format!("{} {}", op.mnemonic(), operands.join(","))
    }
}

/// Disassembles a whole program, one line per instruction, prefixed by address.
///
/// Decoding resumes after an unknown byte at the next address.
pub fn disassemble_program(program: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pc = 0;
    while pc < program.len() {
        let step = Opcode::from_byte(program[pc]).map_or(1, Opcode::len);
        let end = (pc + step).min(program.len());
        lines.push(format!("{pc:#04x}: {}", disassemble(&program[pc..end])));
        pc += step;
    }
    lines
}
