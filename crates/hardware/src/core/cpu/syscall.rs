//! Syscall Dispatcher.
//!
//! This module interprets the `SYSCALL` instruction. The service code is read
//! from `$v0`, the argument from `$a0`, and draw parameters from `$t0..$t4`.
//! It provides:
//! 1. **Console I/O:** Integer, string, character, hex and binary printing and integer input.
//! 2. **Control:** Program termination and sleeping.
//! 3. **Drawing:** Pixel, rectangle and bitmap calls forwarded to a [`DrawTarget`].
//!
//! Unknown service codes are reported and execution continues. Printed
//! strings and characters are passed to the console as raw bytes; integer
//! input is consumed one whitespace-delimited token at a time.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::Cpu;
use crate::isa::abi::{REG_A0, REG_T0, REG_T1, REG_T2, REG_T3, REG_T4, REG_V0};
use crate::isa::syscall;
use crate::soc::traits::{Console, DrawTarget};

/// Text printed by the exit service.
pub const EXIT_MESSAGE: &str = "\n-- program is finished running --\n";

/// Result of dispatching one syscall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyscallOutcome {
    /// Execution continues with the next instruction.
    Continue,
    /// The program requested termination.
    Exit,
}

/// Formats a value in binary without leading zeros; zero formats as `"0"`.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::cpu::syscall::format_binary;
///
/// assert_eq!(format_binary(0), "0");
/// assert_eq!(format_binary(5), "101");
/// assert_eq!(format_binary(0x8000_0000).len(), 32);
/// ```
pub fn format_binary(val: u32) -> String {
    if val == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::with_capacity(32);
    let mut n = val;
    while n != 0 {
        digits.push(if n & 1 == 1 { '1' } else { '0' });
        n >>= 1;
    }
    digits.iter().rev().collect()
}

/// Parses the leading decimal integer of `line`, as `scanf("%d")` would.
///
/// Leading whitespace and one optional sign are accepted; parsing stops at
/// the first non-digit. Returns `None` if no digits are present or the value
/// does not fit in 32 bits.
pub fn parse_leading_int(line: &str) -> Option<i32> {
    let s = line.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

impl Cpu {
    /// Executes the syscall selected by `$v0`.
    ///
    /// # Arguments
    ///
    /// * `console` - Receives printed text and supplies integer input.
    /// * `display` - Receives draw calls.
    ///
    /// # Returns
    ///
    /// [`SyscallOutcome::Exit`] for the exit service, otherwise
    /// [`SyscallOutcome::Continue`].
    pub fn syscall(
        &mut self,
        console: &mut dyn Console,
        display: &mut dyn DrawTarget,
    ) -> SyscallOutcome {
        let code = self.regs.read(REG_V0);
        let arg = self.regs.read(REG_A0);

        match code {
            syscall::PRINT_INT => console.write_str(&(arg as i32).to_string()),
            syscall::PRINT_STRING => {
                console.write_bytes(self.data_mem.c_str_at(arg));
            }
            syscall::READ_INT => {
                console.flush();
                let val = match console.read_token() {
                    Some(token) => parse_leading_int(&token).unwrap_or_else(|| {
                        warn!(input = %token, "read_int: not an integer, storing 0");
                        0
                    }),
                    None => {
                        warn!("read_int: end of input, storing 0");
                        0
                    }
                };
                self.regs.write(REG_V0, val as u32);
            }
            syscall::EXIT => {
                console.write_str(EXIT_MESSAGE);
                console.flush();
                return SyscallOutcome::Exit;
            }
            syscall::PRINT_CHAR => console.write_bytes(&[arg as u8]),
            syscall::DRAW_PIXEL | syscall::DRAW_RECTANGLE | syscall::DRAW_BITMAP => {
                self.draw(code, display);
            }
            syscall::SLEEP => {
                console.flush();
                thread::sleep(Duration::from_millis(u64::from(arg)));
            }
            syscall::PRINT_INT_HEX => console.write_str(&format!("{arg:x}")),
            syscall::PRINT_INT_BIN => console.write_str(&format_binary(arg)),
            syscall::PRINT_UINT => console.write_str(&arg.to_string()),
            _ => {
                warn!(code = code as i32, pc = self.pc, "unknown syscall code");
                console.write_str(&format!("Unknown syscall code {}\n", code as i32));
            }
        }

        SyscallOutcome::Continue
    }

    /// Forwards a draw service to the display with byte-truncated arguments.
    fn draw(&self, code: u32, display: &mut dyn DrawTarget) {
        let first = self.regs.read(REG_T0);
        let color = first as u8;
        let x = self.regs.read(REG_T1) as u8;
        let y = self.regs.read(REG_T2) as u8;
        let width = self.regs.read(REG_T3) as u8;
        let height = self.regs.read(REG_T4) as u8;

        debug!(code, color, x, y, width, height, "draw syscall");
        match code {
            syscall::DRAW_PIXEL => display.draw_pixel(color, x, y),
            syscall::DRAW_RECTANGLE => display.draw_rectangle(color, x, y, width, height),
            _ => {
                let bitmap = self.data_mem.tail_from(first);
                display.draw_bitmap(bitmap, x, y, width, height);
            }
        }
    }
}
