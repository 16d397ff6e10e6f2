//! System Components.
//!
//! This module organizes the parts of the simulated machine that sit around
//! the CPU core: the word-array memories and the host devices reached through
//! syscalls.

/// Host devices (console, virtual screen).
pub mod devices;

/// Fixed-size word-array memory with byte and halfword views.
pub mod memory;

/// Device trait definitions for the syscall collaborators.
pub mod traits;

pub use memory::WordMemory;
pub use traits::{Console, DrawTarget};
