//! Core processor implementation.
//!
//! This module contains the CPU state and step, the control signal
//! generator, the architectural register storage, and the execution units.

/// Architectural register storage.
pub mod arch;

/// Control signal generation from decoded instructions.
pub mod control;

/// CPU state, step orchestration, and syscall dispatch.
pub mod cpu;

/// Execution units (ALU, branch resolver).
pub mod units;

pub use self::cpu::Cpu;
