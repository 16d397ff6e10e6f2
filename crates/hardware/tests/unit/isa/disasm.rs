//! # Disassembler Tests

use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

#[rstest]
#[case(0x0000_0000, "nop")]
#[case(0x2003_0007, "addi $v1, $zero, 7")]
#[case(0x0060_2024, "and $a0, $v1, $zero")]
#[case(0x0003_2880, "sll $a1, $v1, 2")]
#[case(0x8d21_0008, "lw $at, 8($t1)")]
#[case(0xad22_0004, "sw $v0, 4($t1)")]
#[case(0x7041_1002, "mul $v0, $v0, $at")]
#[case(0x0022_0019, "multu $at, $v0")]
#[case(0x0000_000c, "syscall")]
#[case(0x0800_0c05, "j 0x3014")]
#[case(0x1000_0002, "beq $zero, $zero, 2")]
#[case(0x3c01_8000, "lui $at, 0x8000")]
#[case(0x7435_d082, "unknown")]
fn test_disassemble(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(disassemble(raw), expected);
}
