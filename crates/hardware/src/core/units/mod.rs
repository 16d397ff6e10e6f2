//! Execution units.
//!
//! This module contains the integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for integer and HI/LO operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches.
pub mod bru;
