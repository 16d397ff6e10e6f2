//! Memory Image Loader.
//!
//! This module reads the textual memory images consumed by the simulator. It performs:
//! 1. **File reading:** Loads an image from disk, reporting I/O failures as [`LoadError`].
//! 2. **Parsing:** Converts one hexadecimal word per line, so line `i` becomes word `i`.
//! 3. **Validation:** Rejects images larger than the target memory.
//!
//! A line that is not clean hex loads its longest valid hex prefix (0 if there
//! is none) and logs a warning, the way `strtoul` treats its input.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::error::LoadError;

/// Words parsed from one memory image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryImage {
    /// Word `i` came from line `i`.
    pub words: Vec<u32>,
}

impl MemoryImage {
    /// Number of lines (and therefore words) in the image.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the image has no lines.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parses one line the way `strtoul(line, NULL, 16)` does.
///
/// Returns the value and whether the whole (trimmed) line was consumed.
/// Values beyond 32 bits saturate at `u32::MAX`; a leading `-` negates.
pub fn parse_hex_word(line: &str) -> (u32, bool) {
    let s = line.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let has_prefix = rest.len() > 2
        && (rest.starts_with("0x") || rest.starts_with("0X"))
        && rest.as_bytes()[2].is_ascii_hexdigit();
    let digits = if has_prefix { &rest[2..] } else { rest };

    let mut value: u32 = 0;
    let mut saturated = false;
    let mut used = 0;
    for c in digits.chars() {
        let Some(d) = c.to_digit(16) else { break };
        used += 1;
        match value.checked_mul(16).and_then(|v| v.checked_add(d)) {
            Some(v) => value = v,
            None => saturated = true,
        }
    }

    if used == 0 {
        return (0, s.is_empty());
    }
    let value = if saturated {
        u32::MAX
    } else if negative {
        value.wrapping_neg()
    } else {
        value
    };
    (value, used == digits.len())
}

/// Parses a memory image from text.
///
/// # Arguments
///
/// * `text`     - Image contents, one hexadecimal word per line.
/// * `capacity` - Capacity of the target memory, in words.
///
/// # Errors
///
/// Returns [`LoadError::ImageTooLarge`] if the image has more lines than `capacity`.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_image;
///
/// let image = parse_image("20030007\n2402000a\n0000000c\n", 1024).unwrap();
/// assert_eq!(image.words, vec![0x2003_0007, 0x2402_000a, 0x0000_000c]);
/// ```
pub fn parse_image(text: &str, capacity: usize) -> Result<MemoryImage, LoadError> {
    let lines = text.lines().count();
    if lines > capacity {
        return Err(LoadError::ImageTooLarge { lines, capacity });
    }

    let words = text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let (word, clean) = parse_hex_word(line);
            if !clean {
                warn!(line = i + 1, text = line.trim(), word, "malformed image line");
            }
            word
        })
        .collect();

    Ok(MemoryImage { words })
}

/// Reads and parses a memory image file.
///
/// # Arguments
///
/// * `path`     - Path to the image file.
/// * `capacity` - Capacity of the target memory, in words.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::ImageTooLarge`] if it has more lines than `capacity`.
pub fn load_image(path: impl AsRef<Path>, capacity: usize) -> Result<MemoryImage, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_image(&text, capacity)?;
    debug!(path = %path.display(), words = image.len(), capacity, "loaded memory image");
    Ok(image)
}
