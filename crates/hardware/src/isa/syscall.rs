//! Syscall service codes.
//!
//! The service is selected by the value in `$v0` when `SYSCALL` executes.
//! Codes 18-20 are simulator extensions that drive the virtual screen.

/// Print `$a0` as a signed decimal integer.
pub const PRINT_INT: u32 = 1;
/// Print the NUL-terminated string at data address `$a0`.
pub const PRINT_STRING: u32 = 4;
/// Read a decimal integer into `$v0`.
pub const READ_INT: u32 = 5;
/// Terminate the program.
pub const EXIT: u32 = 10;
/// Print the low byte of `$a0` as a character.
pub const PRINT_CHAR: u32 = 11;
/// Draw a pixel: `$t0` = color, `$t1` = x, `$t2` = y.
pub const DRAW_PIXEL: u32 = 18;
/// Draw a rectangle: `$t0` = color, `$t1` = x, `$t2` = y, `$t3` = width, `$t4` = height.
pub const DRAW_RECTANGLE: u32 = 19;
/// Draw a bitmap: `$t0` = data byte offset, `$t1` = x, `$t2` = y, `$t3` = width, `$t4` = height.
pub const DRAW_BITMAP: u32 = 20;
/// Sleep for `$a0` milliseconds.
pub const SLEEP: u32 = 32;
/// Print `$a0` in lowercase hexadecimal.
pub const PRINT_INT_HEX: u32 = 34;
/// Print `$a0` in binary.
pub const PRINT_INT_BIN: u32 = 35;
/// Print `$a0` as an unsigned decimal integer.
pub const PRINT_UINT: u32 = 36;
