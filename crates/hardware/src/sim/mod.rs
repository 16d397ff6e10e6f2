//! Simulation driver and image loading.
//!
//! Provides the loader for textual memory images and the `Simulator` that
//! steps a CPU until its program exits.

/// Hex memory image loading.
pub mod loader;

/// CPU plus host collaborators, stepped until exit.
pub mod simulator;

pub use loader::{MemoryImage, load_image, parse_image};
pub use simulator::{RunState, Simulator};
