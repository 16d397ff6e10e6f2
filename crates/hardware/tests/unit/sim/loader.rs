//! # Image Loader Tests
//!
//! Line-to-word mapping, lenient hex parsing, and file errors.

use std::io::Write;

use mipsim_core::common::error::LoadError;
use mipsim_core::sim::loader::{load_image, parse_hex_word, parse_image};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

// ─── Single words ────────────────────────────────────────────

#[rstest]
#[case("2402000a", 0x2402_000a, true)]
#[case("  0000000C \t", 0xC, true)]
#[case("0x10", 0x10, true)]
#[case("0XfF", 0xFF, true)]
#[case("-1", 0xFFFF_FFFF, true)]
#[case("+7", 7, true)]
#[case("1FFFFFFFF", u32::MAX, true)]
#[case("12zz", 0x12, false)]
#[case("zz", 0, false)]
#[case("0x", 0, false)]
#[case("", 0, true)]
fn test_parse_hex_word(#[case] line: &str, #[case] value: u32, #[case] clean: bool) {
    assert_eq!(parse_hex_word(line), (value, clean));
}

// ─── Whole images ────────────────────────────────────────────

#[test]
fn test_line_i_is_word_i() {
    let image = parse_image("1\n\n3\n", 8).unwrap();
    assert_eq!(image.words, vec![1, 0, 3]);
    assert_eq!(image.len(), 3);
}

#[test]
fn test_crlf_line_endings() {
    let image = parse_image("20030007\r\n0000000c\r\n", 8).unwrap();
    assert_eq!(image.words, vec![0x2003_0007, 0xC]);
}

#[test]
fn test_empty_text_is_empty_image() {
    let image = parse_image("", 8).unwrap();
    assert!(image.is_empty());
}

#[test]
fn test_malformed_line_loads_prefix() {
    let image = parse_image("ab\nnot hex\n", 4).unwrap();
    assert_eq!(image.words, vec![0xAB, 0]);
}

#[test]
fn test_image_exactly_at_capacity() {
    let image = parse_image("1\n2\n", 2).unwrap();
    assert_eq!(image.words, vec![1, 2]);
}

#[test]
fn test_image_too_large() {
    let err = parse_image("1\n2\n3\n", 2).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ImageTooLarge {
            lines: 3,
            capacity: 2
        }
    ));
}

// ─── Files ───────────────────────────────────────────────────

#[test]
fn test_load_image_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "20030007").unwrap();
    writeln!(file, "2402000a").unwrap();
    writeln!(file, "0000000c").unwrap();

    let image = load_image(file.path(), 1024).unwrap();
    assert_eq!(image.words, vec![0x2003_0007, 0x2402_000a, 0x0000_000c]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = load_image(&path, 1024).unwrap_err();
    match err {
        LoadError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
