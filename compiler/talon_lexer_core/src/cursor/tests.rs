use crate::SourceBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), 'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
}

#[test]
fn advance_at_eof_is_noop() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert!(cursor.is_eof());
}

// === Multi-byte characters ===

#[test]
fn current_decodes_multibyte() {
    let buf = SourceBuffer::new("\u{e9}\u{1F600}z");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), '\u{e9}');
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), '\u{1F600}');
    cursor.advance();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), 'z');
}

#[test]
fn utf8_char_width_by_lead_byte() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(super::Cursor::utf8_char_width(0x80), 1);
}

// === EOF Detection ===

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), '\0');
    assert!(!cursor.is_eof());
}

#[test]
fn empty_source_starts_at_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), '\0');
}

// === Positioning & Slicing ===

#[test]
fn set_pos_clamps_to_source_len() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.set_pos(100);
    assert_eq!(cursor.pos(), 3);
    cursor.set_pos(1);
    assert_eq!(cursor.current(), 'b');
}

#[test]
fn slice_extracts_source_text() {
    let buf = SourceBuffer::new("say \"hi\"");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(4, 8), "\"hi\"");
    assert_eq!(cursor.slice(0, 0), "");
}

#[test]
fn slice_off_boundary_is_empty() {
    let buf = SourceBuffer::new("\u{e9}");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 1), "");
}

// === Property tests ===

mod proptest_cursor {
    use crate::SourceBuffer;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn walking_yields_source_chars(source in "\\PC{0,64}") {
            let buf = SourceBuffer::new(&source);
            let mut cursor = buf.cursor();
            let mut walked = String::new();
            while !cursor.is_eof() {
                walked.push(cursor.current());
                cursor.advance();
            }
            prop_assert_eq!(walked, source);
        }
    }
}
