//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the MIPS architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$zero` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use crate::isa::abi;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers. Register `$zero` is hardwired to zero
/// and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// Indices are taken modulo 32, so any 5-bit field value is accepted.
    pub fn read(&self, idx: usize) -> u32 {
        let idx = idx & 0x1F;
        if idx == abi::REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register. Writes to `$zero` are ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & 0x1F;
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Returns the raw register array.
    pub fn as_array(&self) -> &[u32; 32] {
        &self.regs
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting and ABI names.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "${:<4}={:#010x} ${:<4}={:#010x}",
                abi::name(i),
                self.regs[i],
                abi::name(i + 1),
                self.regs[i + 1]
            );
        }
    }
}
