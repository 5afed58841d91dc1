//! Line layout: NEWLINE, INDENT, DEDENT, and literal openers.
//!
//! Runs whenever no literal body is being scanned. First it consumes
//! layout trivia (whitespace, comments, escaped line breaks) while
//! measuring the indentation of the line it lands on; then it decides
//! which layout token, if any, that position produces. Layout tokens are
//! zero-width: the end is marked before any trivia is consumed.
//!
//! Only a scalar baseline is kept. The host holds one state snapshot per
//! parse-stack position, which gives each nested block its own baseline.

use talon_lexer_core::Lexer;
use tracing::{debug, trace};

use crate::{Delimiter, ScannerState, TokenKind, TokenSet};

/// Columns a tab advances, regardless of the column it starts at.
pub const TAB_WIDTH: u32 = 8;

/// What the trivia run in front of the next token looked like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LineLayout {
    /// Indentation of the line the run ended on, in columns.
    pub indent_length: u32,
    /// A line break or the end of input was crossed.
    pub found_end_of_line: bool,
    /// Column of the first comment in the run.
    pub first_comment_indent: Option<u32>,
}

/// Consume layout trivia and measure it.
///
/// Returns `None` for a `\` that is not followed by a line break: an
/// invalid continuation the host reports as a lexical error.
pub(crate) fn measure<L: Lexer + ?Sized>(lexer: &mut L) -> Option<LineLayout> {
    let mut layout = LineLayout::default();
    loop {
        match lexer.lookahead() {
            '\n' => {
                layout.found_end_of_line = true;
                layout.indent_length = 0;
                lexer.skip();
            }
            ' ' => {
                layout.indent_length = layout.indent_length.saturating_add(1);
                lexer.skip();
            }
            '\t' => {
                layout.indent_length = layout.indent_length.saturating_add(TAB_WIDTH);
                lexer.skip();
            }
            '\r' | '\x0C' => {
                layout.indent_length = 0;
                lexer.skip();
            }
            '#' => {
                if layout.first_comment_indent.is_none() {
                    layout.first_comment_indent = Some(layout.indent_length);
                }
                while !matches!(lexer.lookahead(), '\0' | '\n') {
                    lexer.skip();
                }
                // The comment's own line break is trivia, not an end of line:
                // the next scan starts past it and measures the next line.
                lexer.skip();
                layout.indent_length = 0;
            }
            '\\' => {
                lexer.skip();
                if lexer.lookahead() == '\r' {
                    lexer.skip();
                }
                if lexer.lookahead() != '\n' {
                    debug!("backslash not followed by a line break");
                    return None;
                }
                lexer.skip();
            }
            '\0' => {
                layout.indent_length = 0;
                layout.found_end_of_line = true;
                return Some(layout);
            }
            _ => return Some(layout),
        }
    }
}

/// Measure the upcoming trivia and pick a layout token or literal opener.
pub(crate) fn scan_layout<L: Lexer + ?Sized>(
    lexer: &mut L,
    state: &mut ScannerState,
    requested: TokenSet,
) -> Option<TokenKind> {
    lexer.mark_end();

    let layout = measure(lexer)?;
    trace!(
        indent = layout.indent_length,
        end_of_line = layout.found_end_of_line,
        comment = ?layout.first_comment_indent,
        baseline = state.indent_baseline(),
        "measured layout"
    );

    if layout.found_end_of_line {
        if let Some(kind) = layout_token(layout, state, requested) {
            return Some(kind);
        }
    }

    // A comment and a literal opener are never one decision.
    if layout.first_comment_indent.is_none() {
        return open_literal(lexer, state, requested);
    }
    None
}

fn layout_token(
    layout: LineLayout,
    state: &mut ScannerState,
    requested: TokenSet,
) -> Option<TokenKind> {
    let baseline = u32::from(state.indent_baseline());

    if requested.allows(TokenKind::Indent) && baseline == 0 && layout.indent_length > 0 {
        state.enter_block(layout.indent_length);
        return Some(TokenKind::Indent);
    }

    let dedent_wanted = requested.allows(TokenKind::Dedent)
        || (!requested.allows(TokenKind::Newline) && !requested.within_brackets());
    // Comments indented to the block's body are consumed before the block
    // is closed.
    let comments_settled = layout
        .first_comment_indent
        .is_none_or(|column| column < baseline);
    if dedent_wanted && baseline > 0 && layout.indent_length == 0 && comments_settled {
        state.leave_block();
        return Some(TokenKind::Dedent);
    }

    if requested.allows(TokenKind::Newline) && !requested.is_error_recovery() {
        return Some(TokenKind::Newline);
    }
    None
}

fn open_literal<L: Lexer + ?Sized>(
    lexer: &mut L,
    state: &mut ScannerState,
    requested: TokenSet,
) -> Option<TokenKind> {
    if requested.allows(TokenKind::StringStart) {
        if let Some(delimiter) = Delimiter::for_opener(lexer.lookahead()) {
            if !state.push_delimiter(delimiter) {
                debug!(depth = state.depth(), "string nesting limit reached");
                return None;
            }
            lexer.advance();
            lexer.mark_end();
            return Some(TokenKind::StringStart);
        }
    }

    if requested.allows(TokenKind::RegexStart) && lexer.lookahead() == '/' {
        lexer.advance();
        lexer.mark_end();
        return Some(TokenKind::RegexStart);
    }
    None
}
