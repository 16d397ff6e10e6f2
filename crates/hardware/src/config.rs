//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (reset address, memory sizes, display address).
//! 2. **Structures:** Hierarchical config for general, memory, and display settings.
//! 3. **Validation:** JSON parsing with a check that both memories are non-empty.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or taken from `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{DATA_MEM_WORDS, DISPLAY_ADDR, PROG_MEM_WORDS, RESET_ADDR};
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    use super::{DATA_MEM_WORDS, DISPLAY_ADDR, PROG_MEM_WORDS, RESET_ADDR};

    /// Program counter after reset.
    pub const START_PC: u32 = RESET_ADDR;

    /// Data memory capacity in 32-bit words.
    pub const DATA_WORDS: usize = DATA_MEM_WORDS;

    /// Program memory capacity in 32-bit words.
    pub const PROGRAM_WORDS: usize = PROG_MEM_WORDS;

    /// UDP address of the virtual screen.
    pub const DISPLAY: &str = DISPLAY_ADDR;
}

/// Root configuration structure for the simulator.
///
/// Every section and field is optional in JSON; missing values take their defaults.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "data_words": 256 },
///     "display": { "enabled": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x3000);
/// assert_eq!(config.memory.data_words, 256);
/// assert_eq!(config.memory.program_words, 1024);
/// assert!(!config.display.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory sizes
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Virtual screen settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields,
    /// and [`ConfigError::EmptyMemory`] if either memory is configured with zero words.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that deserialization alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyMemory`] naming the memory that has no words.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.memory.data_words == 0 {
            return Err(ConfigError::EmptyMemory("data"));
        }
        if self.memory.program_words == 0 {
            return Err(ConfigError::EmptyMemory("program"));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `trace!` record for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value (defaults to the reset address 0x3000)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Memory capacities.
///
/// Both memories are fixed word arrays; addresses wrap modulo their size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Data memory size in 32-bit words
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,

    /// Program memory size in 32-bit words
    #[serde(default = "MemoryConfig::default_program_words")]
    pub program_words: usize,
}

impl MemoryConfig {
    const fn default_data_words() -> usize {
        defaults::DATA_WORDS
    }

    const fn default_program_words() -> usize {
        defaults::PROGRAM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_words: defaults::DATA_WORDS,
            program_words: defaults::PROGRAM_WORDS,
        }
    }
}

/// Virtual screen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Send draw syscalls to the remote display
    #[serde(default = "DisplayConfig::default_enabled")]
    pub enabled: bool,

    /// `host:port` of the remote display
    #[serde(default = "DisplayConfig::default_address")]
    pub address: String,
}

impl DisplayConfig {
    const fn default_enabled() -> bool {
        true
    }

    fn default_address() -> String {
        defaults::DISPLAY.to_owned()
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            address: defaults::DISPLAY.to_owned(),
        }
    }
}
