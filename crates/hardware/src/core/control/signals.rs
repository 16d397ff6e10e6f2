//! Datapath control signals and operation types.
//!
//! This module defines the signals that steer one instruction through the
//! single-cycle datapath. It performs:
//! 1. **Operation Classification:** Names every ALU operation selected by a function code.
//! 2. **Operand Selection:** Chooses the ALU's second operand (register or immediate).
//! 3. **Memory Control:** Specifies access widths and sign-extension for loads/stores.
//! 4. **Flow Control:** Marks jumps, jump-registers, links, and branch-class instructions.

use crate::isa::mips32::funct;

/// ALU operation selected by the control unit.
///
/// R-type instructions use their function code directly; I-type instructions
/// borrow the code of the equivalent R-type operation. Codes the ALU does not
/// implement are preserved in [`AluOp::Other`] and leave the previous ALU
/// result in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Shift left logical by `shamt`. Also the reset value of the signal.
    #[default]
    Sll,
    /// Shift right logical by `shamt`.
    Srl,
    /// Shift right arithmetic by `shamt`.
    Sra,
    /// Shift left logical by operand 1.
    Sllv,
    /// Shift right logical by operand 1.
    Srlv,
    /// Shift right arithmetic by operand 1.
    Srav,
    /// Read HI.
    Mfhi,
    /// Write HI.
    Mthi,
    /// Read LO.
    Mflo,
    /// Write LO.
    Mtlo,
    /// Signed 32x32 multiply into HI:LO.
    Mult,
    /// Unsigned 32x32 multiply into HI:LO.
    Multu,
    /// Signed divide into LO (quotient) and HI (remainder).
    Div,
    /// Unsigned divide into LO (quotient) and HI (remainder).
    Divu,
    /// Signed add.
    Add,
    /// Unsigned add.
    Addu,
    /// Signed subtract.
    Sub,
    /// Unsigned subtract.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on less than (signed).
    Slt,
    /// Set on less than (unsigned).
    Sltu,
    /// A function code with no ALU behavior (jumps, syscalls, undefined codes).
    Other(u32),
}

impl AluOp {
    /// Maps a 6-bit function code to its ALU operation.
    pub const fn from_funct(code: u32) -> Self {
        match code {
            funct::SLL => Self::Sll,
            funct::SRL => Self::Srl,
            funct::SRA => Self::Sra,
            funct::SLLV => Self::Sllv,
            funct::SRLV => Self::Srlv,
            funct::SRAV => Self::Srav,
            funct::MFHI => Self::Mfhi,
            funct::MTHI => Self::Mthi,
            funct::MFLO => Self::Mflo,
            funct::MTLO => Self::Mtlo,
            funct::MULT => Self::Mult,
            funct::MULTU => Self::Multu,
            funct::DIV => Self::Div,
            funct::DIVU => Self::Divu,
            funct::ADD => Self::Add,
            funct::ADDU => Self::Addu,
            funct::SUB => Self::Sub,
            funct::SUBU => Self::Subu,
            funct::AND => Self::And,
            funct::OR => Self::Or,
            funct::XOR => Self::Xor,
            funct::NOR => Self::Nor,
            funct::SLT => Self::Slt,
            funct::SLTU => Self::Sltu,
            other => Self::Other(other),
        }
    }
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the `rt` register value.
    #[default]
    Reg,

    /// Use the sign-extended 16-bit immediate.
    Imm,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit halfword access.
    Half,

    /// 32-bit word access.
    Word,
}

/// Control signals for one instruction.
///
/// Produced fresh by [`crate::core::control::generate`] every step and never
/// stored between steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSignals {
    /// Instruction is one of `BEQ`/`BNE`/`BLEZ`/`BGTZ`; the branch resolver decides if it is taken.
    pub branch: bool,
    /// Instruction is `J` or `JAL`.
    pub jump: bool,
    /// Instruction is `JR` or `JALR`.
    pub jump_register: bool,
    /// Instruction saves the return address in `$ra` (`JAL`/`JALR`).
    pub jump_and_link: bool,
    /// Destination register comes from `rd` (otherwise `rt`).
    pub reg_dst_rd: bool,
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Register writeback value comes from memory (otherwise the ALU).
    pub mem_to_reg: bool,
    /// Width of memory access.
    pub width: MemWidth,
    /// Load should be sign-extended.
    pub signed_load: bool,
}

impl Default for ControlSignals {
    /// Reset values: write the ALU result to `rd`, take operand B from `rt`.
    fn default() -> Self {
        Self {
            branch: false,
            jump: false,
            jump_register: false,
            jump_and_link: false,
            reg_dst_rd: true,
            reg_write: true,
            b_src: OpBSrc::Reg,
            alu: AluOp::Sll,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            width: MemWidth::Nop,
            signed_load: false,
        }
    }
}
