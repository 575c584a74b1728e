//! # Decoding Tests
//!
//! The two high bits of every opcode give the number of operand bytes. These tests
//! check that the opcode table agrees with that rule and that decoding rejects bytes
//! outside the table.

use ls8_core::isa::opcodes;
use ls8_core::isa::{Instruction, InstructionBits, InstructionClass, Opcode, OperandKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_table_lengths_follow_high_bits() {
    for op in Opcode::ALL {
        assert_eq!(
            op.len(),
            op.byte().instruction_len(),
            "{op} length disagrees with its encoding"
        );
        assert_eq!(op.operands().len(), op.byte().operand_count(), "{op}");
    }
}

#[test]
fn test_table_bytes_are_unique() {
    let mut bytes: Vec<u8> = Opcode::ALL.iter().map(|op| op.byte()).collect();
    bytes.sort_unstable();
    bytes.dedup();
    assert_eq!(bytes.len(), Opcode::ALL.len());
}

#[rstest]
#[case(opcodes::LDI, Opcode::Ldi, 3)]
#[case(opcodes::PRN, Opcode::Prn, 2)]
#[case(opcodes::HLT, Opcode::Hlt, 1)]
#[case(opcodes::MUL, Opcode::Mul, 3)]
#[case(opcodes::ADD, Opcode::Add, 3)]
#[case(opcodes::AND, Opcode::And, 3)]
#[case(opcodes::CMP, Opcode::Cmp, 3)]
#[case(opcodes::INC, Opcode::Inc, 2)]
#[case(opcodes::DEC, Opcode::Dec, 2)]
#[case(opcodes::DIV, Opcode::Div, 3)]
#[case(opcodes::JMP, Opcode::Jmp, 2)]
#[case(opcodes::JEQ, Opcode::Jeq, 2)]
#[case(opcodes::JNE, Opcode::Jne, 2)]
#[case(opcodes::CALL, Opcode::Call, 2)]
#[case(opcodes::INT, Opcode::Int, 2)]
#[case(opcodes::IRET, Opcode::Iret, 1)]
fn test_decode_known_opcodes(#[case] byte: u8, #[case] expected: Opcode, #[case] len: usize) {
    let inst = Instruction::decode(byte, 1, 2).unwrap();
    assert_eq!(inst.opcode, expected);
    assert_eq!(inst.len(), len);
    assert_eq!(u8::from(expected), byte);
}

#[test]
fn test_reference_encodings() {
    assert_eq!(opcodes::LDI, 0b1001_1001);
    assert_eq!(opcodes::PRN, 0b0100_0011);
    assert_eq!(opcodes::HLT, 0b0000_0001);
    assert_eq!(opcodes::MUL, 0b1010_1010);
    assert_eq!(opcodes::CMP, 0b1010_0000);
    assert_eq!(opcodes::IRET, 0b0000_1011);
}

#[test]
fn test_unknown_byte_is_returned_as_error() {
    assert_eq!(Instruction::decode(0xFF, 0, 0), Err(0xFF));
    assert_eq!(Opcode::try_from(0x00), Err(0x00));
}

#[test]
fn test_operand_kinds() {
    assert_eq!(
        Opcode::Ldi.operands(),
        &[OperandKind::Register, OperandKind::Immediate]
    );
    assert_eq!(
        Opcode::Add.operands(),
        &[OperandKind::Register, OperandKind::Register]
    );
    assert!(Opcode::Hlt.operands().is_empty());
}

#[test]
fn test_classes() {
    assert_eq!(Opcode::Ldi.class(), InstructionClass::Load);
    assert_eq!(Opcode::Prn.class(), InstructionClass::Io);
    assert_eq!(Opcode::Cmp.class(), InstructionClass::Alu);
    assert_eq!(Opcode::Call.class(), InstructionClass::Branch);
    assert_eq!(Opcode::Iret.class(), InstructionClass::Interrupt);
    assert_eq!(Opcode::Hlt.class(), InstructionClass::System);
}

#[test]
fn test_mnemonic_lookup_ignores_case() {
    assert_eq!(Opcode::from_mnemonic("ldi"), Some(Opcode::Ldi));
    assert_eq!(Opcode::from_mnemonic("IRET"), Some(Opcode::Iret));
    assert_eq!(Opcode::from_mnemonic("NOP"), None);
    for op in Opcode::ALL {
        assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(op));
    }
}

#[test]
fn test_encode_drops_unused_operands() {
    let hlt = Instruction::decode(opcodes::HLT, 7, 7).unwrap();
    assert_eq!(hlt.encode(), vec![opcodes::HLT]);

    let prn = Instruction::decode(opcodes::PRN, 3, 7).unwrap();
    assert_eq!(prn.encode(), vec![opcodes::PRN, 3]);

    let ldi = Instruction::decode(opcodes::LDI, 0, 8).unwrap();
    assert_eq!(ldi.encode(), vec![opcodes::LDI, 0, 8]);
}

proptest! {
    #[test]
    fn prop_length_is_high_bits_plus_one(byte: u8) {
        prop_assert_eq!(byte.instruction_len(), usize::from(byte >> 6) + 1);
        if let Some(op) = Opcode::from_byte(byte) {
            prop_assert_eq!(op.len(), byte.instruction_len());
        }
    }

    #[test]
    fn prop_decode_accepts_only_table_bytes(byte: u8, a: u8, b: u8) {
        let in_table = Opcode::ALL.iter().any(|op| op.byte() == byte);
        prop_assert_eq!(Instruction::decode(byte, a, b).is_ok(), in_table);
    }
}
