//! Mock host devices.

/// Scripted in-memory console.
pub mod console;
