//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction along with the multiply/divide
//! family that targets the HI/LO accumulator pair.
//!
//! Addition and subtraction wrap on overflow; no instruction in this subset
//! traps. Division truncates toward zero, and `i32::MIN / -1` wraps to
//! `i32::MIN` with a zero remainder.

use crate::core::control::AluOp;

/// Number of bits in a word (used to split a 64-bit product into HI:LO).
const WORD_BITS: u32 = 32;

/// Executes an add or subtract.
///
/// # Arguments
///
/// * `op` - The ALU operation (`Add`, `Addu`, `Sub` or `Subu`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result, or `None` for any other operation.
pub const fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
    match op {
        AluOp::Add | AluOp::Addu => Some(a.wrapping_add(b)),
        AluOp::Sub | AluOp::Subu => Some(a.wrapping_sub(b)),
        _ => None,
    }
}

/// Low 32 bits of the signed product, as computed by `SPECIAL2`.
pub const fn mul_low(a: u32, b: u32) -> u32 {
    (a as i32).wrapping_mul(b as i32) as u32
}

/// Computes a full 64-bit product.
///
/// # Arguments
///
/// * `op` - `Mult` (signed) or `Multu` (unsigned). Any other value is treated as unsigned.
/// * `a`  - Multiplicand.
/// * `b`  - Multiplier.
///
/// # Returns
///
/// `(hi, lo)`: the high and low words of the product.
pub const fn multiply(op: AluOp, a: u32, b: u32) -> (u32, u32) {
    let product = match op {
        AluOp::Mult => (a as i32 as i64).wrapping_mul(b as i32 as i64) as u64,
        _ => (a as u64) * (b as u64),
    };
    ((product >> WORD_BITS) as u32, product as u32)
}

/// Computes a quotient and remainder.
///
/// # Arguments
///
/// * `op` - `Div` (signed) or `Divu` (unsigned). Any other value is treated as unsigned.
/// * `a`  - Dividend.
/// * `b`  - Divisor.
///
/// # Returns
///
/// `Some((hi, lo))` with the remainder in `hi` and the quotient in `lo`, or
/// `None` when the divisor is zero.
pub const fn divide(op: AluOp, a: u32, b: u32) -> Option<(u32, u32)> {
    if b == 0 {
        return None;
    }
    match op {
        AluOp::Div => {
            let (n, d) = (a as i32, b as i32);
            Some((n.wrapping_rem(d) as u32, n.wrapping_div(d) as u32))
        }
        _ => Some((a % b, a / b)),
    }
}
