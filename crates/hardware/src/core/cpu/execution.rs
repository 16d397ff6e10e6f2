//! Main Execution Step.
//!
//! This module implements the single-cycle execution of one instruction. It performs the following:
//! 1. **Fetch and Decode:** Reads the word at `pc`, decodes it, and generates control signals.
//! 2. **Execute:** Runs the ALU on `rs` and either `rt` or the sign-extended immediate.
//! 3. **Commit:** Writes a register, stores to memory, dispatches a syscall, or redirects control flow.
//! 4. **Observability:** Emits a `trace!` record per instruction when tracing is enabled.
//!
//! Commit follows a fixed priority: register write-back (unless the
//! instruction links), then memory store, then syscall, jump,
//! jump-register, and finally branch resolution. There is no delay slot.

use tracing::{trace, warn};

use super::{Cpu, SyscallOutcome};
use crate::common::constants::{INSTRUCTION_SIZE, JUMP_REGION_MASK};
use crate::core::control::{self, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::{self, BranchOutcome};
use crate::isa::abi::REG_RA;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::mips32::{funct, opcodes};
use crate::soc::traits::{Console, DrawTarget};

/// Architectural effect of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The ALU result was written to a register.
    Writeback,
    /// A load wrote a register.
    Load,
    /// A store wrote data memory.
    Store,
    /// A syscall ran and execution continues.
    Syscall,
    /// The exit syscall ran. The program counter was not advanced.
    Exit,
    /// `J`, `JAL`, `JR` or `JALR` redirected the program counter.
    Jump,
    /// A conditional branch was resolved.
    Branch {
        /// Whether the branch redirected the program counter.
        taken: bool,
    },
    /// The instruction changed at most HI/LO (`MTHI`, `MULT`, `BREAK`, ...).
    Internal,
    /// The opcode is not supported; a diagnostic was reported.
    Unsupported,
}

/// Record of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
    /// What the instruction did.
    pub effect: Effect,
}

impl StepReport {
    /// Returns `true` if this step terminated the program.
    pub const fn is_exit(&self) -> bool {
        matches!(self.effect, Effect::Exit)
    }
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Arguments
    ///
    /// * `console` - Console used by syscalls and diagnostics.
    /// * `display` - Draw target used by the draw syscalls.
    ///
    /// # Returns
    ///
    /// A [`StepReport`] describing the instruction. After an [`Effect::Exit`]
    /// the program counter still addresses the `SYSCALL`.
    pub fn step(&mut self, console: &mut dyn Console, display: &mut dyn DrawTarget) -> StepReport {
        let pc = self.pc;
        let raw = self.fetch();
        let inst = decode(raw);
        let ctrl = control::generate(&inst);

        if self.trace {
            trace!("{pc:#010x}: {raw:08x}  {}", disassemble(raw));
        }

        let op1 = self.regs.read(inst.rs());
        let op2 = match ctrl.b_src {
            OpBSrc::Reg => self.regs.read(inst.rt()),
            OpBSrc::Imm => inst.simm(),
        };
        if let Some(result) = Alu::execute(&inst, ctrl.alu, op1, op2, &mut self.regs) {
            self.alu_result = result;
        }

        let report = |effect| StepReport {
            pc,
            inst: raw,
            effect,
        };
        let next = pc.wrapping_add(INSTRUCTION_SIZE);

        let effect = if ctrl.reg_write && !ctrl.jump_and_link {
            if ctrl.mem_to_reg {
                let val = self.load(self.alu_result, ctrl.width, ctrl.signed_load);
                self.regs.write(inst.rt(), val);
                Effect::Load
            } else {
                let dst = if ctrl.reg_dst_rd { inst.rd() } else { inst.rt() };
                self.regs.write(dst, self.alu_result);
                Effect::Writeback
            }
        } else if ctrl.mem_write {
            self.store(self.alu_result, ctrl.width, self.regs.read(inst.rt()));
            Effect::Store
        } else if inst.is_rtype(funct::SYSCALL) {
            match self.syscall(console, display) {
                SyscallOutcome::Exit => return report(Effect::Exit),
                SyscallOutcome::Continue => Effect::Syscall,
            }
        } else if ctrl.jump {
            if ctrl.jump_and_link {
                self.regs.write(REG_RA, next);
            }
            self.pc = (next & JUMP_REGION_MASK) | (inst.target() << 2);
            return report(Effect::Jump);
        } else if ctrl.jump_register {
            // Both JR and JALR jump through $ra regardless of rs.
            let target = self.regs.read(REG_RA);
            if ctrl.jump_and_link {
                self.regs.write(REG_RA, next);
            }
            self.pc = target;
            return report(Effect::Jump);
        } else {
            match bru::resolve(&inst, self.alu_result, op1) {
                BranchOutcome::Taken => {
                    self.pc = self.pc.wrapping_add(inst.simm() << 2);
                    Effect::Branch { taken: true }
                }
                BranchOutcome::NotTaken => Effect::Branch { taken: false },
                BranchOutcome::NotBranch if inst.opcode != opcodes::OP_RTYPE => {
                    warn!(pc, inst = raw, "unsupported instruction");
                    console.write_str(&format!("Unsupported instruction: {raw:x}\n"));
                    Effect::Unsupported
                }
                BranchOutcome::NotBranch => Effect::Internal,
            }
        };

        self.pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
        report(effect)
    }
}
