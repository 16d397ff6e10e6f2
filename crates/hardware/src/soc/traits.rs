//! Host-facing device traits.
//!
//! This module defines the two collaborators the syscall dispatcher talks to:
//! 1. **`DrawTarget`:** receives draw calls for the virtual screen.
//! 2. **`Console`:** carries program output bytes and tokenized integer input.
//!
//! Both are called synchronously from within a step. Implementations must
//! not fail the step; transport and I/O errors are absorbed by the device.

/// Receiver of draw syscalls.
///
/// Every geometry and color parameter is a single byte; the syscall
/// dispatcher truncates the register values before calling in.
pub trait DrawTarget {
    /// Draws one pixel of `color` at (`x`, `y`).
    fn draw_pixel(&mut self, color: u8, x: u8, y: u8);

    /// Fills a `width` by `height` rectangle whose top-left corner is (`x`, `y`).
    fn draw_rectangle(&mut self, color: u8, x: u8, y: u8, width: u8, height: u8);

    /// Draws a `width` by `height` bitmap of row-major color bytes at (`x`, `y`).
    ///
    /// `bitmap` is a read-only view into data memory that runs to its end;
    /// only the first `width * height` bytes belong to the image, and a
    /// shorter slice clips it.
    fn draw_bitmap(&mut self, bitmap: &[u8], x: u8, y: u8, width: u8, height: u8);
}

/// Byte console used by the print and read syscalls.
pub trait Console {
    /// Writes raw bytes, unmodified, without a trailing newline.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Writes text without a trailing newline.
    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Flushes buffered output.
    fn flush(&mut self);

    /// Reads the next whitespace-delimited input token.
    ///
    /// Blank lines and line breaks are skipped, and the rest of a line stays
    /// buffered for the next call. Returns `None` at end of input or on a
    /// read error.
    fn read_token(&mut self) -> Option<String>;
}
