//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by every instruction class:
//! it produces register results, the comparison value for `BEQ`/`BNE`, and
//! effective addresses for loads and stores. It also owns the HI/LO
//! accumulator updates of the multiply/divide family.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mult, Multu, Div, Divu
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu and the immediate logic forms
//! - [`shifts`]:     Sll, Srl, Sra and their variable forms

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra and variable forms).
pub mod shifts;

use tracing::warn;

use crate::common::RegisterFile;
use crate::core::control::AluOp;
use crate::isa::decode::Decoded;
use crate::isa::mips32::opcodes;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes one ALU operation.
    ///
    /// `ANDI`/`ORI`/`XORI`/`LUI` and `SPECIAL2` are recognised by opcode
    /// before `op` is consulted. Every other instruction dispatches on `op`.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction (supplies the opcode and `shamt`).
    /// * `op`   - The ALU operation from the control unit.
    /// * `a`    - First operand (`rs` value).
    /// * `b`    - Second operand (`rt` value or sign-extended immediate).
    /// * `regs` - Register file whose HI/LO pair is read and updated.
    ///
    /// # Returns
    ///
    /// The 32-bit result, or `None` when the operation produces none
    /// (`MTHI`/`MTLO`, multiply/divide, unrecognised codes). The caller keeps
    /// its previous result in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::RegisterFile;
    /// use mipsim_core::core::control::AluOp;
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::decode::decode;
    ///
    /// let mut regs = RegisterFile::new();
    /// let add = decode(0x0000_0020);
    /// assert_eq!(Alu::execute(&add, AluOp::Add, 40, 2, &mut regs), Some(42));
    ///
    /// let mult = decode(0x0000_0018);
    /// assert_eq!(Alu::execute(&mult, AluOp::Mult, u32::MAX, u32::MAX, &mut regs), None);
    /// assert_eq!((regs.hi, regs.lo), (0, 1));
    /// ```
    pub fn execute(
        inst: &Decoded,
        op: AluOp,
        a: u32,
        b: u32,
        regs: &mut RegisterFile,
    ) -> Option<u32> {
        match inst.opcode {
            opcodes::OP_ANDI | opcodes::OP_ORI | opcodes::OP_XORI | opcodes::OP_LUI => {
                return logic::execute_immediate(inst.opcode, a, b);
            }
            opcodes::OP_SPECIAL2 => return Some(arithmetic::mul_low(a, b)),
            _ => {}
        }

        match op {
            AluOp::Add | AluOp::Addu | AluOp::Sub | AluOp::Subu => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sltu => {
                logic::execute(op, a, b)
            }

            AluOp::Sll | AluOp::Srl | AluOp::Sra | AluOp::Sllv | AluOp::Srlv | AluOp::Srav => {
                shifts::execute(op, a, b, inst.shamt())
            }

            AluOp::Mfhi => Some(regs.hi),
            AluOp::Mflo => Some(regs.lo),
            AluOp::Mthi => {
                regs.hi = a;
                None
            }
            AluOp::Mtlo => {
                regs.lo = a;
                None
            }

            AluOp::Mult | AluOp::Multu => {
                (regs.hi, regs.lo) = arithmetic::multiply(op, a, b);
                None
            }

            AluOp::Div | AluOp::Divu => {
                match arithmetic::divide(op, a, b) {
                    Some((hi, lo)) => (regs.hi, regs.lo) = (hi, lo),
                    None => warn!(dividend = a, "divide by zero; HI/LO left unchanged"),
                }
                None
            }

            AluOp::Other(_) => None,
        }
    }
}
