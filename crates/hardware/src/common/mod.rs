//! Common utilities and types used throughout the MIPS simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Memory capacities, the reset address, and instruction sizes.
//! 2. **Error Handling:** Image loading and configuration error types.
//! 3. **Register Management:** The architectural register file (GPRs plus HI/LO).

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for image loading and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{DATA_MEM_WORDS, PROG_MEM_WORDS, RESET_ADDR};
pub use error::{ConfigError, LoadError};
pub use reg::RegisterFile;
