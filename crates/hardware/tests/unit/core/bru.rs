//! # Branch Resolver Tests

use mipsim_core::core::units::bru::{BranchOutcome, resolve};
use mipsim_core::isa::decode::decode;
use mipsim_core::isa::mips32::{funct, opcodes::*};
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder as IB;

#[rstest]
#[case(OP_BEQ, 0, 0, BranchOutcome::Taken)]
#[case(OP_BEQ, 1, 0, BranchOutcome::NotTaken)]
#[case(OP_BNE, 1, 0, BranchOutcome::Taken)]
#[case(OP_BNE, 0, 0, BranchOutcome::NotTaken)]
#[case(OP_BLEZ, 99, 0, BranchOutcome::Taken)]
#[case(OP_BLEZ, 0, 0xFFFF_FFFF, BranchOutcome::Taken)]
#[case(OP_BLEZ, 0, 1, BranchOutcome::NotTaken)]
#[case(OP_BGTZ, 0, 1, BranchOutcome::Taken)]
#[case(OP_BGTZ, 0, 0, BranchOutcome::NotTaken)]
#[case(OP_BGTZ, 0, 0x8000_0000, BranchOutcome::NotTaken)]
fn test_resolve(
    #[case] op: u32,
    #[case] alu_result: u32,
    #[case] rs_val: u32,
    #[case] expected: BranchOutcome,
) {
    let inst = decode(IB::i_type(op, 0, 1, 2));
    assert_eq!(resolve(&inst, alu_result, rs_val), expected);
}

#[test]
fn test_non_branches() {
    for raw in [IB::addi(1, 0, 1), IB::r_type(funct::ADD, 1, 2, 3), IB::j_type(OP_J, 0)] {
        let outcome = resolve(&decode(raw), 0, 0);
        assert_eq!(outcome, BranchOutcome::NotBranch);
        assert!(!outcome.is_taken());
    }
}
