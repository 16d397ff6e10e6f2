//! Loader and Configuration Errors.
//!
//! Runtime conditions inside the core (unsupported instructions, unknown syscall
//! codes, out-of-range addresses) are diagnostics, not errors: the step loop logs
//! them and keeps running. The only fallible operations are the ones that touch
//! the host before simulation starts:
//! 1. **Image loading:** Reading a hex memory image from disk.
//! 2. **Configuration:** Parsing a JSON configuration document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a program or data memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read image '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The image holds more words than the target memory can store.
    #[error("image has {lines} words but memory holds only {capacity}")]
    ImageTooLarge {
        /// Number of words in the image.
        lines: usize,
        /// Capacity of the target memory, in words.
        capacity: usize,
    },
}

/// Failure while parsing a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A memory section requested a zero-sized array.
    #[error("memory.{0} must be at least 1 word")]
    EmptyMemory(&'static str),
}
