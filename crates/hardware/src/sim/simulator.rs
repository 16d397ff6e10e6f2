//! Simulator: owns the CPU together with its host collaborators.
//!
//! The CPU step borrows the console and draw target for the duration of one
//! instruction; keeping all three side-by-side here lets the step take them
//! as plain `&mut dyn` arguments.

use std::fmt;

use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::{Effect, StepReport};
use crate::sim::loader::MemoryImage;
use crate::soc::traits::{Console, DrawTarget};
use crate::stats::SimStats;

/// Run state of a simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// More instructions can be executed.
    #[default]
    Running,
    /// The program executed the exit syscall. Terminal.
    Finished,
}

/// Top-level simulator: CPU architectural state plus console and display.
pub struct Simulator {
    /// CPU architectural state (registers, memories, pc).
    pub cpu: Cpu,
    /// Execution statistics.
    pub stats: SimStats,
    console: Box<dyn Console>,
    display: Box<dyn DrawTarget>,
    state: RunState,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator around an initialised CPU.
    pub fn new(cpu: Cpu, console: Box<dyn Console>, display: Box<dyn DrawTarget>) -> Self {
        Self {
            cpu,
            stats: SimStats::default(),
            console,
            display,
            state: RunState::Running,
        }
    }

    /// Creates a simulator from a configuration and two loaded images.
    ///
    /// # Arguments
    ///
    /// * `config`  - Memory sizes, reset PC and trace flag.
    /// * `data`    - Data memory image.
    /// * `program` - Program memory image; its length becomes the program size.
    /// * `console` - Console for syscalls and diagnostics.
    /// * `display` - Draw target for the draw syscalls.
    pub fn from_images(
        config: &Config,
        data: &MemoryImage,
        program: &MemoryImage,
        console: Box<dyn Console>,
        display: Box<dyn DrawTarget>,
    ) -> Self {
        let cpu = Cpu::new(config, &data.words, &program.words);
        Self::new(cpu, console, display)
    }

    /// Current run state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Returns `true` once the program has exited.
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, RunState::Finished)
    }

    /// Executes one instruction.
    ///
    /// Once the simulation has finished this does nothing and keeps returning
    /// [`RunState::Finished`].
    pub fn step(&mut self) -> RunState {
        if self.is_finished() {
            return self.state;
        }
        let report = self
            .cpu
            .step(self.console.as_mut(), self.display.as_mut());
        self.record(&report);
        if report.is_exit() {
            self.state = RunState::Finished;
        }
        self.state
    }

    /// Steps until the program exits.
    ///
    /// # Returns
    ///
    /// The number of instructions executed, including the exit syscall.
    /// Zero if the simulation had already finished.
    pub fn run(&mut self) -> u64 {
        let mut steps = 0;
        while !self.is_finished() {
            let _ = self.step();
            steps += 1;
        }
        steps
    }

    /// Steps until the program exits or `max_steps` instructions have run.
    ///
    /// # Returns
    ///
    /// The number of instructions executed.
    pub fn run_for(&mut self, max_steps: u64) -> u64 {
        let mut steps = 0;
        while steps < max_steps && !self.is_finished() {
            let _ = self.step();
            steps += 1;
        }
        steps
    }

    fn record(&mut self, report: &StepReport) {
        let stats = &mut self.stats;
        stats.instructions_retired += 1;
        match report.effect {
            Effect::Load => stats.inst_load += 1,
            Effect::Store => stats.inst_store += 1,
            Effect::Jump => stats.inst_jump += 1,
            Effect::Syscall | Effect::Exit => stats.inst_syscall += 1,
            Effect::Branch { taken: true } => stats.branches_taken += 1,
            Effect::Branch { taken: false } => stats.branches_not_taken += 1,
            Effect::Unsupported => stats.inst_unsupported += 1,
            Effect::Writeback | Effect::Internal => {}
        }
    }
}
