//! MIPS architectural state components.
//!
//! Holds the architectural register file. HI/LO live alongside it in
//! [`crate::common::RegisterFile`].

/// General-Purpose Register file implementation.
pub mod gpr;
