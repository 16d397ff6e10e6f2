//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, syscall services, and
//! decoding logic for the supported MIPS32 subset.

/// Application Binary Interface (ABI) register indices and names.
pub mod abi;

/// Instruction decoding into layout-tagged fields.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and sign-extension utilities.
pub mod instruction;

/// MIPS32 base instruction set (opcodes and function codes).
pub mod mips32;

/// Syscall service codes selected through `$v0`.
pub mod syscall;
