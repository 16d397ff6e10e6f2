//! Word-Array Memory.
//!
//! This module implements the fixed-size memories of the simulated machine.
//! It provides:
//! 1. **Storage:** A word array held as little-endian bytes, so the byte and
//!    halfword views are plain slices of the same storage.
//! 2. **Access:** Byte, halfword and word loads and stores in which every
//!    address wraps modulo the capacity of the view being used.
//! 3. **Views:** Read-only byte slices for NUL-terminated strings and bitmaps.
//!
//! Wraparound is per view: a byte address wraps modulo `capacity * 4`, a
//! halfword index `addr >> 1` modulo `capacity * 2`, and a word index
//! `addr >> 2` modulo `capacity`. Narrow accesses are therefore always
//! naturally aligned; the low address bits are dropped. A zero-capacity
//! memory reads as zero and ignores stores.

use crate::common::constants::{WORD_BYTES, WORD_HALVES};

/// Fixed-capacity word-addressable memory with little-endian byte views.
#[derive(Clone, PartialEq, Eq)]
pub struct WordMemory {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for WordMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordMemory")
            .field("words", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl WordMemory {
    /// Creates a zero-filled memory of `words` 32-bit words.
    pub fn new(words: usize) -> Self {
        Self {
            bytes: vec![0; words * WORD_BYTES],
        }
    }

    /// Creates a memory of `words` words whose leading words are `image`.
    ///
    /// Words of `image` beyond the capacity are ignored.
    pub fn from_words(words: usize, image: &[u32]) -> Self {
        let mut mem = Self::new(words);
        for (i, &w) in image.iter().take(words).enumerate() {
            mem.write_word_index(i, w);
        }
        mem
    }

    /// Capacity in 32-bit words.
    pub const fn capacity(&self) -> usize {
        self.bytes.len() / WORD_BYTES
    }

    /// Capacity in bytes.
    pub const fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory holds no words.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the whole memory as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Wraps a byte address into the byte view.
    fn byte_index(&self, addr: u32) -> Option<usize> {
        let len = self.bytes.len();
        (len != 0).then(|| addr as usize % len)
    }

    /// Wraps a byte address into the halfword view, returning the byte offset.
    fn half_offset(&self, addr: u32) -> Option<usize> {
        let halves = self.capacity() * WORD_HALVES;
        (halves != 0).then(|| ((addr >> 1) as usize % halves) * 2)
    }

    /// Wraps a byte address into the word view, returning the byte offset.
    fn word_offset(&self, addr: u32) -> Option<usize> {
        let words = self.capacity();
        (words != 0).then(|| ((addr >> 2) as usize % words) * WORD_BYTES)
    }

    /// Reads the byte at `addr`.
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.byte_index(addr).map_or(0, |i| self.bytes[i])
    }

    /// Reads the halfword containing `addr`.
    pub fn read_u16(&self, addr: u32) -> u16 {
        self.half_offset(addr)
            .map_or(0, |i| u16::from_le_bytes([self.bytes[i], self.bytes[i + 1]]))
    }

    /// Reads the word containing `addr`.
    pub fn read_u32(&self, addr: u32) -> u32 {
        self.word_offset(addr).map_or(0, |i| self.word_at(i))
    }

    /// Reads word `index`, wrapping modulo the capacity.
    pub fn read_word_index(&self, index: usize) -> u32 {
        let words = self.capacity();
        if words == 0 {
            return 0;
        }
        self.word_at((index % words) * WORD_BYTES)
    }

    fn word_at(&self, i: usize) -> u32 {
        let mut buf = [0u8; WORD_BYTES];
        buf.copy_from_slice(&self.bytes[i..i + WORD_BYTES]);
        u32::from_le_bytes(buf)
    }

    /// Writes the byte at `addr`.
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        if let Some(i) = self.byte_index(addr) {
            self.bytes[i] = val;
        }
    }

    /// Writes the halfword containing `addr`, leaving the other half of the word untouched.
    pub fn write_u16(&mut self, addr: u32, val: u16) {
        if let Some(i) = self.half_offset(addr) {
            self.bytes[i..i + 2].copy_from_slice(&val.to_le_bytes());
        }
    }

    /// Writes the word containing `addr`.
    pub fn write_u32(&mut self, addr: u32, val: u32) {
        if let Some(i) = self.word_offset(addr) {
            self.bytes[i..i + WORD_BYTES].copy_from_slice(&val.to_le_bytes());
        }
    }

    /// Writes word `index`, wrapping modulo the capacity.
    pub fn write_word_index(&mut self, index: usize, val: u32) {
        let words = self.capacity();
        if words != 0 {
            let i = (index % words) * WORD_BYTES;
            self.bytes[i..i + WORD_BYTES].copy_from_slice(&val.to_le_bytes());
        }
    }

    /// Returns the bytes from the wrapped `addr` to the end of memory.
    pub fn tail_from(&self, addr: u32) -> &[u8] {
        self.byte_index(addr).map_or(&[], |i| &self.bytes[i..])
    }

    /// Returns the NUL-terminated string starting at `addr`, without its terminator.
    ///
    /// The scan stops at the end of memory if no NUL byte is found.
    pub fn c_str_at(&self, addr: u32) -> &[u8] {
        let tail = self.tail_from(addr);
        let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        &tail[..end]
    }
}
