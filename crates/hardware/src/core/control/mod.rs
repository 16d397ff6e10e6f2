//! Control Signal Generator.
//!
//! Maps a decoded instruction to the [`ControlSignals`] that steer it through
//! the datapath. Generation is a pure function of the opcode and, for R-type
//! and `SPECIAL2` instructions, the function code.
//!
//! 1. **R-type:** the function code selects the ALU operation; `JR`/`JALR`,
//!    `SYSCALL`/`BREAK` and the HI/LO writers adjust register write-back.
//! 2. **Everything else:** the immediate is the second operand and `rt` is the
//!    destination, then each opcode applies its own overrides.

/// Control signal and operation type definitions.
pub mod signals;

use crate::isa::decode::Decoded;
use crate::isa::mips32::{funct, opcodes};

pub use self::signals::{AluOp, ControlSignals, MemWidth, OpBSrc};

/// Generates control signals for a decoded instruction.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
///
/// # Returns
///
/// A fresh [`ControlSignals`] value. Unsupported opcodes disable register
/// write-back and carry no other effect.
pub fn generate(inst: &Decoded) -> ControlSignals {
    let mut c = ControlSignals::default();

    if inst.opcode == opcodes::OP_RTYPE {
        let code = inst.funct().unwrap_or_default();
        c.alu = AluOp::from_funct(code);
        match code {
            funct::JR => {
                c.jump_register = true;
                c.reg_write = false;
            }
            funct::JALR => {
                c.jump_register = true;
                c.jump_and_link = true;
            }
            funct::SYSCALL
            | funct::BREAK
            | funct::MTHI
            | funct::MTLO
            | funct::MULT
            | funct::MULTU
            | funct::DIV
            | funct::DIVU => c.reg_write = false,
            _ => {}
        }
        return c;
    }

    c.reg_dst_rd = false;
    c.b_src = OpBSrc::Imm;

    match inst.opcode {
        opcodes::OP_J => {
            c.jump = true;
            c.reg_write = false;
        }
        opcodes::OP_JAL => {
            c.jump = true;
            c.jump_and_link = true;
        }
        opcodes::OP_BEQ | opcodes::OP_BNE => {
            c.branch = true;
            c.reg_write = false;
            c.b_src = OpBSrc::Reg;
            c.alu = AluOp::Sub;
        }
        opcodes::OP_BLEZ | opcodes::OP_BGTZ => {
            c.branch = true;
            c.reg_write = false;
        }
        opcodes::OP_ADDI => c.alu = AluOp::Add,
        opcodes::OP_ADDIU => c.alu = AluOp::Addu,
        opcodes::OP_SLTI => c.alu = AluOp::Slt,
        opcodes::OP_SLTIU => c.alu = AluOp::Sltu,
        // The ALU recognises these by opcode, ahead of the operation code.
        opcodes::OP_ANDI | opcodes::OP_ORI | opcodes::OP_XORI | opcodes::OP_LUI => {}
        opcodes::OP_LB | opcodes::OP_LH | opcodes::OP_LW | opcodes::OP_LBU | opcodes::OP_LHU => {
            c.alu = AluOp::Add;
            c.mem_read = true;
            c.mem_to_reg = true;
            (c.width, c.signed_load) = match inst.opcode {
                opcodes::OP_LB => (MemWidth::Byte, true),
                opcodes::OP_LBU => (MemWidth::Byte, false),
                opcodes::OP_LH => (MemWidth::Half, true),
                opcodes::OP_LHU => (MemWidth::Half, false),
                _ => (MemWidth::Word, false),
            };
        }
        opcodes::OP_SB | opcodes::OP_SH | opcodes::OP_SW => {
            c.alu = AluOp::Add;
            c.reg_write = false;
            c.mem_write = true;
            c.width = match inst.opcode {
                opcodes::OP_SB => MemWidth::Byte,
                opcodes::OP_SH => MemWidth::Half,
                _ => MemWidth::Word,
            };
        }
        opcodes::OP_SPECIAL2 => {
            if inst.funct() == Some(funct::MUL) {
                c.reg_dst_rd = true;
                c.b_src = OpBSrc::Reg;
            }
        }
        _ => c.reg_write = false,
    }

    c
}
