//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! architectural state of the simulated machine. It coordinates the following:
//! 1. **State Management:** Registers, HI/LO, program counter, and the last ALU result.
//! 2. **Memories:** Separate program and data word arrays.
//! 3. **Execution:** The per-instruction step, the syscall dispatcher, and load/store helpers.

/// Instruction execution (fetch, decode, execute, writeback).
pub mod execution;

/// Load and store helpers over data memory.
pub mod memory;

/// Syscall dispatch through `$v0`.
pub mod syscall;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::memory::WordMemory;

pub use self::execution::{Effect, StepReport};
pub use self::syscall::SyscallOutcome;

/// Main CPU structure containing all architectural state.
///
/// One instance is owned by one simulator; nothing is shared between instances.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers and HI/LO.
    pub regs: RegisterFile,
    /// Program counter, in bytes.
    pub pc: u32,
    /// Program memory; fetched by word index `pc / 4`.
    pub prog_mem: WordMemory,
    /// Data memory; addressed by loads, stores and syscalls.
    pub data_mem: WordMemory,
    /// Number of instruction words loaded into program memory.
    pub prog_size: usize,
    /// Most recent ALU result. Operations that produce no result leave it unchanged.
    pub alu_result: u32,
    /// Emit a `trace!` record for every executed instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU from a configuration and two memory images.
    ///
    /// # Arguments
    ///
    /// * `config`  - Supplies the memory capacities, reset PC, and trace flag.
    /// * `data`    - Initial data memory words, from word 0.
    /// * `program` - Initial program memory words, from word 0.
    ///
    /// # Returns
    ///
    /// A CPU with zeroed registers, `pc = config.general.start_pc`, and
    /// `prog_size` equal to the number of program words supplied. Words
    /// beyond a memory's capacity are ignored.
    pub fn new(config: &Config, data: &[u32], program: &[u32]) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            prog_mem: WordMemory::from_words(config.memory.program_words, program),
            data_mem: WordMemory::from_words(config.memory.data_words, data),
            prog_size: program.len().min(config.memory.program_words),
            alu_result: 0,
            trace: config.general.trace_instructions,
        }
    }

    /// Returns the instruction word at the current program counter.
    pub fn fetch(&self) -> u32 {
        self.prog_mem.read_word_index((self.pc >> 2) as usize)
    }

    /// Dumps the register state and program counter to stdout.
    pub fn dump_state(&self) {
        println!("pc={:#010x}", self.pc);
        self.regs.dump();
    }
}
