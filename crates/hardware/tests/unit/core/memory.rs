//! # CPU Load/Store Tests
//!
//! Width selection and extension rules of the CPU's data-memory helpers.

use mipsim_core::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::control::MemWidth;
use rstest::rstest;

fn cpu_with_data(words: &[u32]) -> Cpu {
    Cpu::new(&Config::default(), words, &[])
}

#[rstest]
#[case(0, MemWidth::Byte, true, 0xFFFF_FFF0)]
#[case(0, MemWidth::Byte, false, 0x0000_00F0)]
#[case(1, MemWidth::Byte, true, 0x0000_0012)]
#[case(2, MemWidth::Half, true, 0xFFFF_8034)]
#[case(2, MemWidth::Half, false, 0x0000_8034)]
#[case(0, MemWidth::Word, false, 0x8034_12F0)]
#[case(3, MemWidth::Word, false, 0x8034_12F0)]
fn test_load_extension(
    #[case] addr: u32,
    #[case] width: MemWidth,
    #[case] signed: bool,
    #[case] expected: u32,
) {
    let cpu = cpu_with_data(&[0x8034_12F0]);
    assert_eq!(cpu.load(addr, width, signed), expected);
}

#[test]
fn test_store_byte_leaves_neighbours() {
    let mut cpu = cpu_with_data(&[0x1122_3344]);
    cpu.store(1, MemWidth::Byte, 0xFFFF_FFAA);
    assert_eq!(cpu.data_mem.read_u32(0), 0x1122_AA44);
}

#[test]
fn test_store_half_leaves_other_half() {
    let mut cpu = cpu_with_data(&[0x1122_3344]);
    cpu.store(2, MemWidth::Half, 0xDEAD_BEEF);
    assert_eq!(cpu.data_mem.read_u32(0), 0xBEEF_3344);
}

#[test]
fn test_store_word_wraps() {
    let mut cpu = cpu_with_data(&[]);
    let wrap = (cpu.data_mem.capacity() * 4) as u32;
    cpu.store(wrap + 8, MemWidth::Word, 0xCAFE_F00D);
    assert_eq!(cpu.data_mem.read_u32(8), 0xCAFE_F00D);
}

#[test]
fn test_new_cpu_state() {
    let cpu = Cpu::new(&Config::default(), &[1, 2], &[0x2003_0007, 0x0000_000c]);
    assert_eq!(cpu.pc, 0x3000);
    assert_eq!(cpu.prog_size, 2);
    assert_eq!(cpu.fetch(), 0x2003_0007);
    assert_eq!(cpu.data_mem.read_u32(4), 2);
    assert_eq!(cpu.alu_result, 0);
}
