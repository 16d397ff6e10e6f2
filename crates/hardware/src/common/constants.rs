//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Default capacities of the program and data word arrays.
//! 2. **Instruction Constants:** Instruction width and jump-region masks.
//! 3. **Display Constants:** Default address of the virtual screen.

/// Default capacity of data memory, in 32-bit words.
pub const DATA_MEM_WORDS: usize = 1024;

/// Default capacity of program memory, in 32-bit words.
pub const PROG_MEM_WORDS: usize = 1024;

/// Program counter value after reset.
///
/// Matches the `.text` base of the "Compact, Data at Address 0" memory layout,
/// so assembled programs address data memory from byte 0.
pub const RESET_ADDR: u32 = 0x3000;

/// Size of an instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Bytes per data/program memory word.
pub const WORD_BYTES: usize = 4;

/// Halfwords per data/program memory word.
pub const WORD_HALVES: usize = 2;

/// Mask selecting the region bits `(pc + 4)[31:28]` kept by `J`/`JAL`.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Default UDP address of the virtual screen.
pub const DISPLAY_ADDR: &str = "127.0.0.1:9999";
