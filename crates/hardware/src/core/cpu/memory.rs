//! Memory Access Helpers.
//!
//! This module connects the step loop to data memory. It performs:
//! 1. **Loads:** Byte, halfword and word reads with sign or zero extension.
//! 2. **Stores:** Byte, halfword and word writes of the low bits of a register.
//!
//! Addresses are never faulted; the memory wraps them.

use super::Cpu;
use crate::core::control::MemWidth;
use crate::isa::instruction::{sign_extend_8, sign_extend_16};

impl Cpu {
    /// Loads a value from data memory.
    ///
    /// # Arguments
    ///
    /// * `addr`   - Byte address; wrapped per access width.
    /// * `width`  - Access width (`Nop` reads as a word).
    /// * `signed` - Sign-extend byte and halfword loads.
    ///
    /// # Returns
    ///
    /// The loaded value extended to 32 bits.
    pub fn load(&self, addr: u32, width: MemWidth, signed: bool) -> u32 {
        match width {
            MemWidth::Byte => {
                let v = self.data_mem.read_u8(addr);
                if signed { sign_extend_8(v) } else { v as u32 }
            }
            MemWidth::Half => {
                let v = self.data_mem.read_u16(addr);
                if signed { sign_extend_16(v) } else { v as u32 }
            }
            MemWidth::Word | MemWidth::Nop => self.data_mem.read_u32(addr),
        }
    }

    /// Stores the low bits of `val` into data memory, leaving neighbouring bytes untouched.
    ///
    /// # Arguments
    ///
    /// * `addr`  - Byte address; wrapped per access width.
    /// * `width` - Access width (`Nop` writes a word).
    /// * `val`   - Register value to store.
    pub fn store(&mut self, addr: u32, width: MemWidth, val: u32) {
        match width {
            MemWidth::Byte => self.data_mem.write_u8(addr, val as u8),
            MemWidth::Half => self.data_mem.write_u16(addr, val as u16),
            MemWidth::Word | MemWidth::Nop => self.data_mem.write_u32(addr, val),
        }
    }
}
