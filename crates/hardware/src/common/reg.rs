//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which acts as a unified interface for
//! accessing the General Purpose Registers (GPRs) and the HI/LO accumulator pair.
//! It provides:
//! 1. **Unified Storage:** Combined storage for all MIPS architectural registers.
//! 2. **Abstraction:** A single set of methods for reading and writing register values.
//! 3. **Observability:** Debugging utilities for dumping register state during simulation.

use crate::core::arch::gpr::Gpr;

/// Unified register file containing the GPRs and the multiply/divide accumulators.
///
/// HI and LO are not addressable through the 5-bit register fields; only
/// `MFHI`/`MFLO`/`MTHI`/`MTLO` and the multiply/divide family touch them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    /// High word of a multiply result, or a divide remainder.
    pub hi: u32,
    /// Low word of a multiply result, or a divide quotient.
    pub lo: u32,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a value from a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$zero` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are discarded.
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Returns all 32 general-purpose registers.
    pub fn gprs(&self) -> &[u32; 32] {
        self.gpr.as_array()
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        self.gpr.dump();
        println!("hi={:#010x} lo={:#010x}", self.hi, self.lo);
    }
}
