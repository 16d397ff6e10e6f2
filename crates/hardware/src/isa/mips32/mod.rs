//! MIPS32 base instruction set encodings.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Function codes (bits 5-0) selecting R-type and `SPECIAL2` operations.

/// Function codes for R-type and `SPECIAL2` instructions.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
