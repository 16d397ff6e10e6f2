//! MIPS Application Binary Interface (ABI) register name constants.
//!
//! Defines the register indices used by the datapath (`$zero`, `$ra`) and by the
//! syscall convention (`$v0` selects the service, `$a0` and `$t0`-`$t4` carry
//! arguments). Assembled programs depend on these exact indices.

/// Register `$0` (always zero).
pub const REG_ZERO: usize = 0;
/// Register `$2` (`$v0`): syscall code on entry, `read_int` result on return.
pub const REG_V0: usize = 2;
/// Register `$4` (`$a0`): argument for the printing, sleep and string syscalls.
pub const REG_A0: usize = 4;
/// Register `$8` (`$t0`): draw color, or bitmap offset for `draw_bitmap`.
pub const REG_T0: usize = 8;
/// Register `$9` (`$t1`): draw x coordinate.
pub const REG_T1: usize = 9;
/// Register `$10` (`$t2`): draw y coordinate.
pub const REG_T2: usize = 10;
/// Register `$11` (`$t3`): draw width.
pub const REG_T3: usize = 11;
/// Register `$12` (`$t4`): draw height.
pub const REG_T4: usize = 12;
/// Register `$31` (`$ra`): link register for `JAL`/`JALR`, and jump source for `JR`/`JALR`.
pub const REG_RA: usize = 31;

/// ABI names for `$0`-`$31`.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name (without the `$` sigil) for a register index.
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
