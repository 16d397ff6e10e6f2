//! MIPS Instruction Decoder.
//!
//! This module turns a raw 32-bit word into a [`Decoded`] instruction. The
//! opcode is always read through the common view; it then selects which of
//! the three specific layouts carries meaningful fields:
//! - `RTYPE` and `SPECIAL2` use the register-register layout.
//! - `J` and `JAL` use the jump layout.
//! - Everything else, including undefined opcodes, uses the immediate layout.
//!
//! Decoding never fails. Undefined encodings are diagnosed later by the step loop.

use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::opcodes;

/// Field layout selected by an opcode, carrying only the fields that layout defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Register-register layout (`opcode | rs | rt | rd | shamt | funct`).
    Register {
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
        /// Destination register.
        rd: usize,
        /// Shift amount.
        shamt: u32,
        /// Function code.
        funct: u32,
    },
    /// Register-immediate layout (`opcode | rs | rt | immediate`).
    Immediate {
        /// Source / base register.
        rs: usize,
        /// Destination register, or store source.
        rt: usize,
        /// Raw 16-bit immediate.
        imm: u16,
    },
    /// Jump layout (`opcode | target`).
    Jump {
        /// 26-bit word target within the current 256 MiB region.
        target: u32,
    },
}

/// A decoded instruction: the raw word, its opcode, and its selected layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Primary opcode, read through the common view.
    pub opcode: u32,
    /// Layout-specific fields.
    pub format: Format,
}

impl Decoded {
    /// Returns the function code for register-layout instructions, `None` otherwise.
    pub const fn funct(&self) -> Option<u32> {
        match self.format {
            Format::Register { funct, .. } => Some(funct),
            _ => None,
        }
    }

    /// Returns the shift amount for register-layout instructions, 0 otherwise.
    pub const fn shamt(&self) -> u32 {
        match self.format {
            Format::Register { shamt, .. } => shamt,
            _ => 0,
        }
    }

    /// Returns `true` if this is the R-type instruction with the given function code.
    pub fn is_rtype(&self, funct: u32) -> bool {
        self.opcode == opcodes::OP_RTYPE && self.funct() == Some(funct)
    }

    /// First source register index. Shared by the register and immediate layouts.
    pub fn rs(&self) -> usize {
        self.raw.rs()
    }

    /// Second source register index. Shared by the register and immediate layouts.
    pub fn rt(&self) -> usize {
        self.raw.rt()
    }

    /// Destination register index of the register layout.
    pub fn rd(&self) -> usize {
        self.raw.rd()
    }

    /// Immediate sign-extended to 32 bits.
    pub fn simm(&self) -> u32 {
        self.raw.simm()
    }

    /// 26-bit jump target.
    pub fn target(&self) -> u32 {
        self.raw.target()
    }
}

/// Decodes a MIPS instruction into its opcode and layout.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A [`Decoded`] structure. Every bit pattern decodes.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let format = match opcode {
        opcodes::OP_RTYPE | opcodes::OP_SPECIAL2 => Format::Register {
            rs: inst.rs(),
            rt: inst.rt(),
            rd: inst.rd(),
            shamt: inst.shamt(),
            funct: inst.funct(),
        },
        opcodes::OP_J | opcodes::OP_JAL => Format::Jump {
            target: inst.target(),
        },
        _ => Format::Immediate {
            rs: inst.rs(),
            rt: inst.rt(),
            imm: inst.imm16(),
        },
    };

    Decoded {
        raw: inst,
        opcode,
        format,
    }
}
