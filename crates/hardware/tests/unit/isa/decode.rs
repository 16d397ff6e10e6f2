//! # Decoder Tests
//!
//! Layout selection per opcode, field extraction, and sign extension.

use mipsim_core::isa::decode::{Format, decode};
use mipsim_core::isa::instruction::{InstructionBits, sign_extend_8, sign_extend_16};
use mipsim_core::isa::mips32::{funct, opcodes};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder as IB;

#[test]
fn test_decode_addi_uses_immediate_layout() {
    let d = decode(0x2003_0007);
    assert_eq!(d.opcode, opcodes::OP_ADDI);
    assert_eq!(
        d.format,
        Format::Immediate {
            rs: 0,
            rt: 3,
            imm: 7
        }
    );
}

#[test]
fn test_decode_and_uses_register_layout() {
    let d = decode(0x0060_2024);
    assert_eq!(
        d.format,
        Format::Register {
            rs: 3,
            rt: 0,
            rd: 4,
            shamt: 0,
            funct: funct::AND
        }
    );
    assert!(d.is_rtype(funct::AND));
}

#[test]
fn test_decode_sll_extracts_shamt() {
    let d = decode(0x0003_2880);
    assert_eq!(d.shamt(), 2);
    assert_eq!(d.rd(), 5);
    assert_eq!(d.rt(), 3);
    assert_eq!(d.funct(), Some(funct::SLL));
}

#[test]
fn test_decode_special2_mul_uses_register_layout() {
    let d = decode(0x7041_1002);
    assert_eq!(d.opcode, opcodes::OP_SPECIAL2);
    assert_eq!(
        d.format,
        Format::Register {
            rs: 2,
            rt: 1,
            rd: 2,
            shamt: 0,
            funct: funct::MUL
        }
    );
}

#[rstest]
#[case(opcodes::OP_J)]
#[case(opcodes::OP_JAL)]
fn test_decode_jumps_use_jump_layout(#[case] op: u32) {
    let d = decode(IB::j_type(op, 0x0C05));
    assert_eq!(d.format, Format::Jump { target: 0x0C05 });
    assert_eq!(d.funct(), None);
}

#[test]
fn test_decode_undefined_opcode_still_decodes() {
    let d = decode(0x7435_d082);
    assert_eq!(d.opcode, 0x1D);
    assert!(matches!(d.format, Format::Immediate { .. }));
}

#[test]
fn test_simm_sign_extends() {
    assert_eq!(IB::addi(1, 0, 0x7fff).simm(), 0x0000_7fff);
    assert_eq!(IB::addi(1, 0, -1).simm(), 0xFFFF_FFFF);
    assert_eq!(IB::addi(1, 0, -32768).simm(), 0xFFFF_8000);
}

#[test]
fn test_sign_extend_helpers() {
    assert_eq!(sign_extend_8(0x7F), 0x7F);
    assert_eq!(sign_extend_8(0x80), 0xFFFF_FF80);
    assert_eq!(sign_extend_16(0x8000), 0xFFFF_8000);
    assert_eq!(sign_extend_16(0x1234), 0x1234);
}

proptest! {
    #[test]
    fn prop_every_word_decodes_with_consistent_opcode(raw in any::<u32>()) {
        let d = decode(raw);
        prop_assert_eq!(d.opcode, raw >> 26);
        prop_assert_eq!(d.raw, raw);
        let register_layout = matches!(d.format, Format::Register { .. });
        prop_assert_eq!(
            register_layout,
            d.opcode == opcodes::OP_RTYPE || d.opcode == opcodes::OP_SPECIAL2
        );
    }

    #[test]
    fn prop_builder_fields_round_trip(rs in 0u32..32, rt in 0u32..32, imm in any::<i16>()) {
        let raw = IB::i_type(opcodes::OP_ORI, rt, rs, imm as i32);
        prop_assert_eq!(raw.rs(), rs as usize);
        prop_assert_eq!(raw.rt(), rt as usize);
        prop_assert_eq!(raw.imm16(), imm as u16);
        prop_assert_eq!(raw.simm() as i32, imm as i32);
    }
}
