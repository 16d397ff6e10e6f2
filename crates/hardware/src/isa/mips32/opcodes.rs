//! MIPS32 Primary Opcodes.
//!
//! Defines the 6-bit primary opcodes (bits 31-26) supported by the simulator.
//! Pseudo-instructions (`move`, `li`, `la`, `blt`, ...) never reach the simulator;
//! the assembler expands them into the real instructions below.

/// All R-type instructions; the operation is selected by `funct`.
pub const OP_RTYPE: u32 = 0x00;
/// Jump (`j target`).
pub const OP_J: u32 = 0x02;
/// Jump and link (`jal target`).
pub const OP_JAL: u32 = 0x03;
/// Branch if equal (`beq $s, $t, label`).
pub const OP_BEQ: u32 = 0x04;
/// Branch if not equal (`bne $s, $t, label`).
pub const OP_BNE: u32 = 0x05;
/// Branch if less than or equal to zero (`blez $s, label`).
pub const OP_BLEZ: u32 = 0x06;
/// Branch if greater than zero (`bgtz $s, label`).
pub const OP_BGTZ: u32 = 0x07;
/// Add immediate (`addi $t, $s, i`).
pub const OP_ADDI: u32 = 0x08;
/// Add immediate unsigned (`addiu $t, $s, i`); the immediate is still sign-extended.
pub const OP_ADDIU: u32 = 0x09;
/// Set on less than immediate (`slti $t, $s, i`).
pub const OP_SLTI: u32 = 0x0A;
/// Set on less than immediate unsigned (`sltiu $t, $s, i`).
pub const OP_SLTIU: u32 = 0x0B;
/// AND with zero-extended immediate (`andi $t, $s, i`).
pub const OP_ANDI: u32 = 0x0C;
/// OR with zero-extended immediate (`ori $t, $s, i`).
pub const OP_ORI: u32 = 0x0D;
/// XOR with zero-extended immediate (`xori $t, $s, i`).
pub const OP_XORI: u32 = 0x0E;
/// Load upper immediate (`lui $t, i`).
pub const OP_LUI: u32 = 0x0F;
/// `SPECIAL2` opcode space; only `mul` is implemented.
pub const OP_SPECIAL2: u32 = 0x1C;
/// Load byte, sign-extended (`lb $t, i($s)`).
pub const OP_LB: u32 = 0x20;
/// Load halfword, sign-extended (`lh $t, i($s)`).
pub const OP_LH: u32 = 0x21;
/// Load word (`lw $t, i($s)`).
pub const OP_LW: u32 = 0x23;
/// Load byte, zero-extended (`lbu $t, i($s)`).
pub const OP_LBU: u32 = 0x24;
/// Load halfword, zero-extended (`lhu $t, i($s)`).
pub const OP_LHU: u32 = 0x25;
/// Store byte (`sb $t, i($s)`).
pub const OP_SB: u32 = 0x28;
/// Store halfword (`sh $t, i($s)`).
pub const OP_SH: u32 = 0x29;
/// Store word (`sw $t, i($s)`).
pub const OP_SW: u32 = 0x2B;
