//! Branch Resolution Unit (BRU).
//!
//! Decides whether a conditional branch redirects control flow. There is no
//! prediction and no delay slot: the outcome is known in the same step the
//! branch executes.
//!
//! 1. **`BEQ`/`BNE`:** compare the ALU's `rs - rt` difference against zero.
//! 2. **`BLEZ`/`BGTZ`:** test the sign of `rs` directly.

use crate::isa::decode::Decoded;
use crate::isa::mips32::opcodes;

/// Outcome of resolving one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchOutcome {
    /// The instruction is not a conditional branch.
    NotBranch,
    /// The branch condition holds.
    Taken,
    /// The branch condition does not hold.
    NotTaken,
}

impl BranchOutcome {
    const fn from_condition(cond: bool) -> Self {
        if cond { Self::Taken } else { Self::NotTaken }
    }

    /// Returns `true` if the branch redirects the program counter.
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

/// Resolves a branch-class instruction.
///
/// # Arguments
///
/// * `inst`       - The decoded instruction.
/// * `alu_result` - The ALU output for this step (`rs - rt` for `BEQ`/`BNE`).
/// * `rs_val`     - The value of register `rs`.
///
/// # Returns
///
/// [`BranchOutcome::NotBranch`] for every opcode other than the four
/// conditional branches.
pub const fn resolve(inst: &Decoded, alu_result: u32, rs_val: u32) -> BranchOutcome {
    match inst.opcode {
        opcodes::OP_BEQ => BranchOutcome::from_condition(alu_result == 0),
        opcodes::OP_BNE => BranchOutcome::from_condition(alu_result != 0),
        opcodes::OP_BLEZ => BranchOutcome::from_condition(rs_val as i32 <= 0),
        opcodes::OP_BGTZ => BranchOutcome::from_condition(rs_val as i32 > 0),
        _ => BranchOutcome::NotBranch,
    }
}
