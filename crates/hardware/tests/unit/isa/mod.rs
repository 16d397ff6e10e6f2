//! # ISA Tests
//!
//! This module aggregates tests for:
//! - Instruction field extraction and sign extension.
//! - Layout-tagged decoding.
//! - Disassembler mnemonic generation.

/// Decoder layout selection and field extraction.
pub mod decode;

/// Disassembler output.
pub mod disasm;
