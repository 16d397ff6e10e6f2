//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the MIPS simulator. It provides:
//! 1. **Throughput:** Retired instructions and host execution rate.
//! 2. **Instruction mix:** Counts of loads, stores, jumps, and syscalls.
//! 3. **Control flow:** Taken and not-taken conditional branches.
//! 4. **Diagnostics:** Unsupported instructions encountered.

use std::time::Instant;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed.
    pub instructions_retired: u64,
    /// Count of load instructions executed.
    pub inst_load: u64,
    /// Count of store instructions executed.
    pub inst_store: u64,
    /// Count of `J`/`JAL`/`JR`/`JALR` instructions executed.
    pub inst_jump: u64,
    /// Count of `SYSCALL` instructions executed.
    pub inst_syscall: u64,
    /// Conditional branches that redirected the program counter.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
    /// Instructions reported as unsupported.
    pub inst_unsupported: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_jump: 0,
            inst_syscall: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            inst_unsupported: 0,
        }
    }
}

impl SimStats {
    /// Total conditional branches resolved.
    pub const fn branches(&self) -> u64 {
        self.branches_taken + self.branches_not_taken
    }

    /// Prints a summary of the collected statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| {
            if self.instructions_retired == 0 {
                0.0
            } else {
                (n as f64 / self.instructions_retired as f64) * 100.0
            }
        };

        println!("\n==========================================================");
        println!("MIPS SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  load                   {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  store                  {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  jump                   {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!(
            "  syscall                {} ({:.2}%)",
            self.inst_syscall,
            pct(self.inst_syscall)
        );
        println!(
            "  unsupported            {} ({:.2}%)",
            self.inst_unsupported,
            pct(self.inst_unsupported)
        );
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        println!("  branch.total           {}", self.branches());
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.not_taken       {}", self.branches_not_taken);
        println!("==========================================================");
    }
}
