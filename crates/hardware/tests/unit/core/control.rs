//! # Control Unit Tests
//!
//! Verifies the signal table for every instruction class, including the
//! reset values carried by opcodes that do not override them.

use mipsim_core::core::control::{AluOp, ControlSignals, MemWidth, OpBSrc, generate};
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::mips32::{funct, opcodes::*};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder as IB;

fn signals(raw: u32) -> ControlSignals {
    generate(&decode(raw))
}

#[test]
fn test_rtype_add_defaults() {
    let c = signals(IB::r_type(funct::ADD, 3, 1, 2));
    assert_eq!(
        c,
        ControlSignals {
            alu: AluOp::Add,
            ..ControlSignals::default()
        }
    );
    assert!(c.reg_dst_rd);
    assert!(c.reg_write);
    assert_eq!(c.b_src, OpBSrc::Reg);
}

#[rstest]
#[case(funct::SYSCALL)]
#[case(funct::BREAK)]
#[case(funct::MTHI)]
#[case(funct::MTLO)]
#[case(funct::MULT)]
#[case(funct::MULTU)]
#[case(funct::DIV)]
#[case(funct::DIVU)]
fn test_rtype_without_writeback(#[case] f: u32) {
    let c = signals(IB::r_type(f, 3, 1, 2));
    assert!(!c.reg_write);
    assert!(!c.jump_register);
}

#[test]
fn test_jr_and_jalr() {
    let jr = signals(IB::r_type(funct::JR, 0, 5, 0));
    assert!(jr.jump_register);
    assert!(!jr.jump_and_link);
    assert!(!jr.reg_write);

    let jalr = signals(IB::r_type(funct::JALR, 31, 5, 0));
    assert!(jalr.jump_register);
    assert!(jalr.jump_and_link);
    assert!(jalr.reg_write);
}

#[test]
fn test_unknown_funct_keeps_writeback() {
    let c = signals(IB::r_type(0x01, 5, 0, 0));
    assert_eq!(c.alu, AluOp::Other(0x01));
    assert!(c.reg_write);
    assert!(c.reg_dst_rd);
}

#[test]
fn test_jumps() {
    let j = signals(IB::j_type(OP_J, 0x100));
    assert!(j.jump);
    assert!(!j.jump_and_link);
    assert!(!j.reg_write);
    assert!(!j.reg_dst_rd);

    let jal = signals(IB::j_type(OP_JAL, 0x100));
    assert!(jal.jump);
    assert!(jal.jump_and_link);
    assert!(jal.reg_write);
}

#[rstest]
#[case(OP_BEQ)]
#[case(OP_BNE)]
fn test_beq_bne_compare_registers(#[case] op: u32) {
    let c = signals(IB::i_type(op, 2, 1, 4));
    assert!(c.branch);
    assert!(!c.reg_write);
    assert_eq!(c.b_src, OpBSrc::Reg);
    assert_eq!(c.alu, AluOp::Sub);
}

#[rstest]
#[case(OP_BLEZ)]
#[case(OP_BGTZ)]
fn test_blez_bgtz_keep_immediate_defaults(#[case] op: u32) {
    let c = signals(IB::i_type(op, 0, 1, 4));
    assert!(c.branch);
    assert!(!c.reg_write);
    assert_eq!(c.b_src, OpBSrc::Imm);
    assert_eq!(c.alu, AluOp::Sll);
}

#[rstest]
#[case(OP_ADDI, AluOp::Add)]
#[case(OP_ADDIU, AluOp::Addu)]
#[case(OP_SLTI, AluOp::Slt)]
#[case(OP_SLTIU, AluOp::Sltu)]
#[case(OP_ANDI, AluOp::Sll)]
#[case(OP_ORI, AluOp::Sll)]
#[case(OP_XORI, AluOp::Sll)]
#[case(OP_LUI, AluOp::Sll)]
fn test_immediate_arithmetic(#[case] op: u32, #[case] alu: AluOp) {
    let c = signals(IB::i_type(op, 2, 1, 4));
    assert_eq!(c.alu, alu);
    assert_eq!(c.b_src, OpBSrc::Imm);
    assert!(!c.reg_dst_rd);
    assert!(c.reg_write);
    assert!(!c.mem_read && !c.mem_write);
}

#[rstest]
#[case(OP_LB, MemWidth::Byte, true)]
#[case(OP_LBU, MemWidth::Byte, false)]
#[case(OP_LH, MemWidth::Half, true)]
#[case(OP_LHU, MemWidth::Half, false)]
#[case(OP_LW, MemWidth::Word, false)]
fn test_loads(#[case] op: u32, #[case] width: MemWidth, #[case] signed: bool) {
    let c = signals(IB::i_type(op, 2, 1, 8));
    assert!(c.mem_read);
    assert!(c.mem_to_reg);
    assert!(c.reg_write);
    assert!(!c.reg_dst_rd);
    assert_eq!(c.alu, AluOp::Add);
    assert_eq!(c.width, width);
    assert_eq!(c.signed_load, signed);
}

#[rstest]
#[case(OP_SB, MemWidth::Byte)]
#[case(OP_SH, MemWidth::Half)]
#[case(OP_SW, MemWidth::Word)]
fn test_stores(#[case] op: u32, #[case] width: MemWidth) {
    let c = signals(IB::i_type(op, 2, 1, 8));
    assert!(c.mem_write);
    assert!(!c.reg_write);
    assert!(!c.mem_read);
    assert_eq!(c.alu, AluOp::Add);
    assert_eq!(c.width, width);
}

#[test]
fn test_special2_mul_writes_rd_from_registers() {
    let c = signals(0x7041_1002);
    assert!(c.reg_dst_rd);
    assert!(c.reg_write);
    assert_eq!(c.b_src, OpBSrc::Reg);
}

#[test]
fn test_special2_other_funct_keeps_immediate_defaults() {
    let raw = IB::new().opcode(OP_SPECIAL2).rs(1).rt(2).rd(3).funct(0x00).build();
    let c = signals(raw);
    assert!(!c.reg_dst_rd);
    assert!(c.reg_write);
    assert_eq!(c.b_src, OpBSrc::Imm);
}

#[test]
fn test_unsupported_opcode_disables_writeback() {
    let c = signals(0x7435_d082);
    assert!(!c.reg_write);
    assert!(!c.mem_write && !c.mem_read);
    assert!(!c.branch && !c.jump && !c.jump_register);
}
