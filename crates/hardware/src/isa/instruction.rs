//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the four overlapping MIPS field layouts.
//! Every layout is a view over the same 32-bit word:
//!
//! ```text
//! R-type:  opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)
//! I-type:  opcode(6) | rs(5) | rt(5) | immediate(16)
//! J-type:  opcode(6) | target(26)
//! common:  opcode(6) | unused(26)
//! ```

/// Bit shift for the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the `shamt` field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the `funct` field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Extraction never fails: every field exists in every word, whether or not
/// the opcode gives it a meaning.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31) through the common view.
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-type destination register field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the function code field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15).
    fn imm16(&self) -> u16;

    /// Extracts the 16-bit immediate sign-extended to 32 bits.
    fn simm(&self) -> u32;

    /// Extracts the 26-bit jump target (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    /// Reinterprets the low halfword as `i16` and widens it, replicating bit 15.
    #[inline(always)]
    fn simm(&self) -> u32 {
        sign_extend_16(self.imm16())
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Sign-extends a 16-bit value to 32 bits.
#[inline(always)]
pub const fn sign_extend_16(val: u16) -> u32 {
    val as i16 as i32 as u32
}

/// Sign-extends an 8-bit value to 32 bits.
#[inline(always)]
pub const fn sign_extend_8(val: u8) -> u32 {
    val as i8 as i32 as u32
}
