//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x2003_0007); // addi $v1, $zero, 7
//! assert_eq!(text, "addi $v1, $zero, 7");
//! ```

use crate::isa::abi;
use crate::isa::instruction::InstructionBits;
use crate::isa::mips32::{funct, opcodes as op};

/// Returns `$name` for a register index.
fn reg(idx: usize) -> String {
    format!("${}", abi::name(idx))
}

/// Disassembles a 32-bit MIPS instruction into a human-readable string.
///
/// Returns a mnemonic like `"add $t0, $t1, $t2"` or `"unknown"` for
/// unrecognised encodings. Branch offsets are printed in instructions,
/// relative to the following instruction; jump targets as byte addresses
/// within the current region.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }

    let rs = reg(inst.rs());
    let rt = reg(inst.rt());
    let rd = reg(inst.rd());
    let shamt = inst.shamt();
    let simm = inst.imm16() as i16;
    let uimm = inst.imm16();

    match inst.opcode() {
        op::OP_RTYPE => {
            let name = match inst.funct() {
                funct::SLL => return format!("sll {rd}, {rt}, {shamt}"),
                funct::SRL => return format!("srl {rd}, {rt}, {shamt}"),
                funct::SRA => return format!("sra {rd}, {rt}, {shamt}"),
                funct::SLLV => return format!("sllv {rd}, {rt}, {rs}"),
                funct::SRLV => return format!("srlv {rd}, {rt}, {rs}"),
                funct::SRAV => return format!("srav {rd}, {rt}, {rs}"),
                funct::JR => return format!("jr {rs}"),
                funct::JALR => return format!("jalr {rs}"),
                funct::SYSCALL => return "syscall".to_string(),
                funct::BREAK => return "break".to_string(),
                funct::MFHI => return format!("mfhi {rd}"),
                funct::MTHI => return format!("mthi {rs}"),
                funct::MFLO => return format!("mflo {rd}"),
                funct::MTLO => return format!("mtlo {rs}"),
                funct::MULT => return format!("mult {rs}, {rt}"),
                funct::MULTU => return format!("multu {rs}, {rt}"),
                funct::DIV => return format!("div {rs}, {rt}"),
                funct::DIVU => return format!("divu {rs}, {rt}"),
                funct::ADD => "add",
                funct::ADDU => "addu",
                funct::SUB => "sub",
                funct::SUBU => "subu",
                funct::AND => "and",
                funct::OR => "or",
                funct::XOR => "xor",
                funct::NOR => "nor",
                funct::SLT => "slt",
                funct::SLTU => "sltu",
                _ => return "unknown".to_string(),
            };
            format!("{name} {rd}, {rs}, {rt}")
        }
        op::OP_SPECIAL2 if inst.funct() == funct::MUL => format!("mul {rd}, {rs}, {rt}"),
        op::OP_J => format!("j {:#x}", inst.target() << 2),
        op::OP_JAL => format!("jal {:#x}", inst.target() << 2),
        op::OP_BEQ => format!("beq {rs}, {rt}, {simm}"),
        op::OP_BNE => format!("bne {rs}, {rt}, {simm}"),
        op::OP_BLEZ => format!("blez {rs}, {simm}"),
        op::OP_BGTZ => format!("bgtz {rs}, {simm}"),
        op::OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        op::OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        op::OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        op::OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        op::OP_ANDI => format!("andi {rt}, {rs}, {uimm:#x}"),
        op::OP_ORI => format!("ori {rt}, {rs}, {uimm:#x}"),
        op::OP_XORI => format!("xori {rt}, {rs}, {uimm:#x}"),
        op::OP_LUI => format!("lui {rt}, {uimm:#x}"),
        op::OP_LB => format!("lb {rt}, {simm}({rs})"),
        op::OP_LH => format!("lh {rt}, {simm}({rs})"),
        op::OP_LW => format!("lw {rt}, {simm}({rs})"),
        op::OP_LBU => format!("lbu {rt}, {simm}({rs})"),
        op::OP_LHU => format!("lhu {rt}, {simm}({rs})"),
        op::OP_SB => format!("sb {rt}, {simm}({rs})"),
        op::OP_SH => format!("sh {rt}, {simm}({rs})"),
        op::OP_SW => format!("sw {rt}, {simm}({rs})"),
        _ => "unknown".to_string(),
    }
}
