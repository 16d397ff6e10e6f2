//! ALU shift operations.
//!
//! Implements shift-left logical, shift-right logical and shift-right
//! arithmetic, each in a fixed form (amount from `shamt`) and a variable
//! form (amount from the low 5 bits of the first operand).
//!
//! The value being shifted is always the second operand (`rt`).

use crate::core::control::AluOp;

/// Bit mask for a variable shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be a shift variant).
/// * `a`     - First operand; supplies the amount for the variable forms.
/// * `b`     - The value to shift.
/// * `shamt` - Shift amount for the fixed forms.
///
/// # Returns
///
/// The shifted value, or `None` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32, shamt: u32) -> Option<u32> {
    let var = a & SHAMT_MASK;
    let fixed = shamt & SHAMT_MASK;
    match op {
        AluOp::Sll => Some(b << fixed),
        AluOp::Srl => Some(b >> fixed),
        AluOp::Sra => Some(((b as i32) >> fixed) as u32),
        AluOp::Sllv => Some(b << var),
        AluOp::Srlv => Some(b >> var),
        AluOp::Srav => Some(((b as i32) >> var) as u32),
        _ => None,
    }
}
