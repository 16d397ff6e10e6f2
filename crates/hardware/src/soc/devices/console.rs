//! Standard-stream console.
//!
//! Binds the [`Console`] trait to the host's stdout and stdin. It provides:
//! 1. **Output:** Bytes are written unmodified, so characters above `0x7F`
//!    reach the terminal as single bytes.
//! 2. **Input:** Stdin is read a line at a time and split into tokens by a
//!    [`TokenBuffer`], matching how `scanf("%d")` consumes its input.
//!
//! The caller flushes before blocking on input or sleeping.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::soc::traits::Console;

/// Whitespace-delimited tokens left over from previously read lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    pending: VecDeque<String>,
}

impl TokenBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, pulling lines from `next_line` while the buffer is empty.
    ///
    /// # Arguments
    ///
    /// * `next_line` - Supplies one input line per call, `None` at end of input.
    ///
    /// # Returns
    ///
    /// The next token, or `None` once `next_line` is exhausted. Lines holding
    /// only whitespace are skipped.
    pub fn next_token(&mut self, mut next_line: impl FnMut() -> Option<String>) -> Option<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            let line = next_line()?;
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Number of buffered tokens.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no tokens are buffered.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Console backed by the process's standard output and standard input.
#[derive(Debug, Default)]
pub struct StdConsole {
    tokens: TokenBuffer,
}

impl StdConsole {
    /// Creates a new standard-stream console.
    pub const fn new() -> Self {
        Self {
            tokens: TokenBuffer::new(),
        }
    }
}

fn read_stdin_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            debug!(error = %e, "console read failed");
            None
        }
    }
}

impl Console for StdConsole {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Err(e) = io::stdout().write_all(bytes) {
            debug!(error = %e, "console write failed");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = io::stdout().flush() {
            debug!(error = %e, "console flush failed");
        }
    }

    fn read_token(&mut self) -> Option<String> {
        self.tokens.next_token(read_stdin_line)
    }
}
