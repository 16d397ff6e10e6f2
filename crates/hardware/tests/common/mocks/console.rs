use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use mipsim_core::soc::devices::TokenBuffer;
use mipsim_core::soc::traits::Console;

#[derive(Default)]
struct ConsoleState {
    output: Vec<u8>,
    lines: VecDeque<String>,
    tokens: TokenBuffer,
    flushes: usize,
}

/// In-memory console. Clones share the same buffers, so a test keeps one
/// handle while the simulator owns another.
#[derive(Clone, Default)]
pub struct MockConsole {
    state: Rc<RefCell<ConsoleState>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one line of input.
    pub fn push_input(&self, line: &str) {
        self.state.borrow_mut().lines.push_back(line.to_owned());
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.state.borrow().output).into_owned()
    }

    /// Everything written so far, byte for byte.
    pub fn output_bytes(&self) -> Vec<u8> {
        self.state.borrow().output.clone()
    }

    pub fn flushes(&self) -> usize {
        self.state.borrow().flushes
    }
}

impl Console for MockConsole {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.state.borrow_mut().output.extend_from_slice(bytes);
    }

    fn flush(&mut self) {
        self.state.borrow_mut().flushes += 1;
    }

    fn read_token(&mut self) -> Option<String> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let lines = &mut state.lines;
        state.tokens.next_token(|| lines.pop_front())
    }
}
