//! MIPS instruction-set simulator library.
//!
//! This crate implements a single-cycle simulator for a MIPS32 integer subset with the following:
//! 1. **ISA:** Field extraction, layout-tagged decoding, and a disassembler.
//! 2. **Core:** Control signal generation, ALU with HI/LO, branch resolution, and the step loop.
//! 3. **Memory:** Fixed word arrays with wrapping byte, halfword, and word views.
//! 4. **Devices:** Syscall console I/O and a UDP virtual screen for draw syscalls.
//! 5. **Simulation:** Image loader, configuration, and statistics collection.

/// Common types and constants (memory sizes, register file, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable sections).
pub mod config;
/// CPU core (control, units, architectural state, step).
pub mod core;
/// Instruction set (field extraction, decode, disassembly, opcodes, syscalls).
pub mod isa;
/// Image loader and simulator driver.
pub mod sim;
/// Host-facing devices and memories (console, display, word memory).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memories, and the program counter.
pub use crate::core::Cpu;
/// Top-level driver; owns the CPU, console, and display.
pub use crate::sim::Simulator;
