//! The host boundary seen by the scanner.
//!
//! A parsing host hands the scanner a [`Lexer`] positioned where the next
//! token may begin. The scanner peeks at [`Lexer::lookahead`], consumes
//! characters as token content ([`Lexer::advance`]) or as trivia
//! ([`Lexer::skip`]), and calls [`Lexer::mark_end`] to fix the end of the
//! token it is about to commit. Characters consumed after the last mark are
//! returned to the host.

use crate::{Cursor, SourceBuffer};

/// Character stream with one character of lookahead.
pub trait Lexer {
    /// The next character, or `'\0'` at end of input.
    fn lookahead(&self) -> char;

    /// Consume the lookahead as part of the token.
    fn advance(&mut self);

    /// Consume the lookahead as trivia, moving the token start past it.
    fn skip(&mut self);

    /// Mark the current position as the end of the token being scanned.
    fn mark_end(&mut self);

    /// Returns `true` once every character has been consumed.
    fn is_eof(&self) -> bool;
}

/// Byte range of the token committed by the last scan attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub start: u32,
    pub end: u32,
}

impl TokenSpan {
    /// Length of the span in bytes.
    #[inline]
    pub fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for zero-width tokens (layout tokens are always empty).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Reference [`Lexer`] over a [`SourceBuffer`].
///
/// Follows the conventions of incremental parsing hosts:
/// - every [`skip`](Lexer::skip) moves the token start to the current position;
/// - the token ends at the last [`mark_end`](Lexer::mark_end), or at the
///   current position if the scanner never marked one;
/// - a token whose end precedes its start (marked, then trivia skipped)
///   collapses to an empty span at the mark.
#[derive(Clone, Debug)]
pub struct SourceLexer<'a> {
    cursor: Cursor<'a>,
    /// Offsets before this belong to a byte order mark.
    content_start: u32,
    token_start: u32,
    marked_end: Option<u32>,
}

impl<'a> SourceLexer<'a> {
    /// Create a lexer positioned at the first content byte of `buf`,
    /// past any byte order mark.
    pub fn new(buf: &'a SourceBuffer) -> Self {
        let mut lexer = Self {
            cursor: buf.cursor(),
            content_start: buf.content_start(),
            token_start: 0,
            marked_end: None,
        };
        lexer.begin(0);
        lexer
    }

    /// Begin a new scan attempt at byte offset `pos`.
    ///
    /// The host calls this before every scan, including after a negative
    /// result, so characters a failed attempt consumed are not lost.
    /// Offsets inside a byte order mark start at the content instead.
    pub fn begin(&mut self, pos: u32) {
        self.cursor.set_pos(pos.max(self.content_start));
        self.token_start = self.cursor.pos();
        self.marked_end = None;
    }

    /// Current byte offset of the lookahead.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Span of the token as the host would commit it now.
    pub fn token_span(&self) -> TokenSpan {
        let end = self.marked_end.unwrap_or(self.cursor.pos());
        TokenSpan {
            start: self.token_start.min(end),
            end,
        }
    }

    /// Source text covered by [`token_span`](Self::token_span).
    pub fn token_text(&self) -> &'a str {
        let span = self.token_span();
        self.cursor.slice(span.start, span.end)
    }

    /// Source text between two offsets.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }
}

impl Lexer for SourceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.cursor.current()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance();
    }

    #[inline]
    fn skip(&mut self) {
        self.cursor.advance();
        self.token_start = self.cursor.pos();
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.cursor.pos());
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }
}
