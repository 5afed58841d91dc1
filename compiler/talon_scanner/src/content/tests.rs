use super::*;
use pretty_assertions::assert_eq;
use talon_lexer_core::{SourceBuffer, SourceLexer};

fn open_string(quote: char) -> (ScannerState, Delimiter) {
    let mut state = ScannerState::new();
    let delimiter = Delimiter::for_opener(quote).unwrap_or_default();
    assert!(state.push_delimiter(delimiter));
    (state, delimiter)
}

/// Scan string content of `source` inside an open `quote` string.
fn string_scan(source: &str, quote: char) -> (ContentOutcome, String, ScannerState) {
    let buf = SourceBuffer::new(source);
    let mut lexer = SourceLexer::new(&buf);
    let (mut state, delimiter) = open_string(quote);
    let outcome = scan_string(&mut lexer, &mut state, delimiter);
    (outcome, lexer.token_text().to_owned(), state)
}

fn regex_scan(source: &str) -> (ContentOutcome, String) {
    let buf = SourceBuffer::new(source);
    let mut lexer = SourceLexer::new(&buf);
    let outcome = scan_regex(&mut lexer);
    (outcome, lexer.token_text().to_owned())
}

// === Strings ===

#[test]
fn content_stops_before_interpolation() {
    let (outcome, text, state) = string_scan("abc{x}def\"", '"');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringContent));
    assert_eq!(text, "abc");
    assert_eq!(state.depth(), 1);
}

#[test]
fn closing_brace_is_also_a_boundary() {
    let (outcome, text, _) = string_scan("ab}", '"');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringContent));
    assert_eq!(text, "ab");
}

#[test]
fn boundary_with_no_content_rejects() {
    let (outcome, _, _) = string_scan("{x}", '"');
    assert_eq!(outcome, ContentOutcome::Reject);
    let (outcome, _, _) = string_scan("\\n", '"');
    assert_eq!(outcome, ContentOutcome::Reject);
}

#[test]
fn content_stops_before_escape() {
    let (outcome, text, _) = string_scan("ab\\tc\"", '\'');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringContent));
    assert_eq!(text, "ab");
}

#[test]
fn content_leaves_closing_quote_for_next_call() {
    let (outcome, text, state) = string_scan("def\"", '"');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringContent));
    assert_eq!(text, "def");
    assert_eq!(state.depth(), 1);
}

#[test]
fn bare_closing_quote_ends_string_and_pops() {
    let (outcome, text, state) = string_scan("\" rest", '"');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringEnd));
    assert_eq!(text, "\"");
    assert_eq!(state.depth(), 0);
}

#[test]
fn other_quotes_are_plain_content() {
    let (outcome, text, _) = string_scan("it's `ok`\"", '"');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringContent));
    assert_eq!(text, "it's `ok`");
}

#[test]
fn newline_after_content_rejects() {
    let (outcome, _, state) = string_scan("abc\nnext", '"');
    assert_eq!(outcome, ContentOutcome::Reject);
    assert_eq!(state.depth(), 1);
}

#[test]
fn leading_newline_is_content() {
    let (outcome, text, _) = string_scan("\nabc\"", '"');
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::StringContent));
    assert_eq!(text, "\nabc");
}

#[test]
fn end_of_input_after_content_rejects() {
    let (outcome, _, _) = string_scan("abc", '`');
    assert_eq!(outcome, ContentOutcome::Reject);
}

#[test]
fn end_of_input_without_content_is_exhausted() {
    let (outcome, _, _) = string_scan("", '"');
    assert_eq!(outcome, ContentOutcome::Exhausted);
}

#[test]
fn unknown_delimiter_never_closes() {
    let buf = SourceBuffer::new("a\"'`\nb");
    let mut lexer = SourceLexer::new(&buf);
    let mut state = ScannerState::new();
    let delimiter = Delimiter::from_byte(0x40);
    assert!(state.push_delimiter(delimiter));
    assert_eq!(
        scan_string(&mut lexer, &mut state, delimiter),
        ContentOutcome::Reject
    );
    assert_eq!(state.depth(), 1);
}

// === Regexes ===

#[test]
fn regex_content_stops_before_escape() {
    let (outcome, text) = regex_scan("a\\/b/");
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::RegexContent));
    assert_eq!(text, "a");
}

#[test]
fn regex_content_leaves_closing_slash() {
    let (outcome, text) = regex_scan("b+/");
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::RegexContent));
    assert_eq!(text, "b+");
}

#[test]
fn regex_bare_slash_ends_regex() {
    let (outcome, text) = regex_scan("/i");
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::RegexEnd));
    assert_eq!(text, "/");
}

#[test]
fn regex_braces_are_content() {
    let (outcome, text) = regex_scan("a{2}/");
    assert_eq!(outcome, ContentOutcome::Emit(TokenKind::RegexContent));
    assert_eq!(text, "a{2}");
}

#[test]
fn regex_newline_after_content_rejects() {
    let (outcome, _) = regex_scan("abc\n/");
    assert_eq!(outcome, ContentOutcome::Reject);
}

#[test]
fn regex_end_of_input() {
    assert_eq!(regex_scan("").0, ContentOutcome::Exhausted);
    assert_eq!(regex_scan("ab").0, ContentOutcome::Reject);
}
