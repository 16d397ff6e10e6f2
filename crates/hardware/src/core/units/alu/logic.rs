//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR and set-less-than (signed and
//! unsigned) over 32-bit operands, plus the immediate forms whose second
//! operand is the zero-extended low halfword.

use crate::core::control::AluOp;
use crate::isa::instruction::IMM_MASK;
use crate::isa::mips32::opcodes;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The result (0 or 1 for comparisons), or `None` for non-logic operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
    match op {
        AluOp::And => Some(a & b),
        AluOp::Or => Some(a | b),
        AluOp::Xor => Some(a ^ b),
        AluOp::Nor => Some(!(a | b)),
        AluOp::Slt => Some(((a as i32) < (b as i32)) as u32),
        AluOp::Sltu => Some((a < b) as u32),
        _ => None,
    }
}

/// Executes `ANDI`, `ORI`, `XORI` or `LUI`, selected by opcode.
///
/// `b` is the sign-extended immediate; only its low halfword is used.
pub const fn execute_immediate(opcode: u32, a: u32, b: u32) -> Option<u32> {
    let imm = b & IMM_MASK;
    match opcode {
        opcodes::OP_ANDI => Some(a & imm),
        opcodes::OP_ORI => Some(a | imm),
        opcodes::OP_XORI => Some(a ^ imm),
        opcodes::OP_LUI => Some(imm << 16),
        _ => None,
    }
}
