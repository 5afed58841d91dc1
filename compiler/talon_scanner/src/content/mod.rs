//! Literal body scanning for open strings and regexes.
//!
//! Both literals share one loop: consume plain characters until something
//! the host must handle itself (an escape, an interpolation brace) or the
//! closing character. Content already consumed is committed as a token on
//! its own so the stopping character starts the next token.

use talon_lexer_core::Lexer;
use tracing::debug;

use crate::{Delimiter, ScannerState, TokenKind};

/// Result of one content scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContentOutcome {
    /// Commit this token.
    Emit(TokenKind),
    /// No token here; the host's own rules take over.
    Reject,
    /// End of input reached before any character was consumed.
    Exhausted,
}

/// What ends a run of literal content.
#[derive(Clone, Copy, Debug)]
struct LiteralRules {
    /// `None` for a string restored with an unknown delimiter byte.
    closing: Option<char>,
    /// `{` and `}` hand control to the host's interpolation grammar.
    interpolates: bool,
    content: TokenKind,
}

/// How the body loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stop {
    /// Content committed, stopping character left for the host.
    Content,
    /// The closing character was consumed with nothing before it.
    Closed,
    Reject,
    Exhausted,
}

/// Scan inside the innermost open string.
///
/// Closing the string pops `delimiter` off `state`.
pub(crate) fn scan_string<L: Lexer + ?Sized>(
    lexer: &mut L,
    state: &mut ScannerState,
    delimiter: Delimiter,
) -> ContentOutcome {
    let rules = LiteralRules {
        closing: delimiter.end_character(),
        interpolates: true,
        content: TokenKind::StringContent,
    };
    match scan_body(lexer, rules) {
        Stop::Content => ContentOutcome::Emit(TokenKind::StringContent),
        Stop::Closed => {
            state.pop_delimiter();
            ContentOutcome::Emit(TokenKind::StringEnd)
        }
        Stop::Reject => ContentOutcome::Reject,
        Stop::Exhausted => ContentOutcome::Exhausted,
    }
}

/// Scan inside an open regex literal.
///
/// Regexes do not nest, so no state is touched.
pub(crate) fn scan_regex<L: Lexer + ?Sized>(lexer: &mut L) -> ContentOutcome {
    let rules = LiteralRules {
        closing: Some('/'),
        interpolates: false,
        content: TokenKind::RegexContent,
    };
    match scan_body(lexer, rules) {
        Stop::Content => ContentOutcome::Emit(TokenKind::RegexContent),
        Stop::Closed => ContentOutcome::Emit(TokenKind::RegexEnd),
        Stop::Reject => ContentOutcome::Reject,
        Stop::Exhausted => ContentOutcome::Exhausted,
    }
}

fn scan_body<L: Lexer + ?Sized>(lexer: &mut L, rules: LiteralRules) -> Stop {
    let mut has_content = false;
    loop {
        let c = lexer.lookahead();
        if c == '\0' {
            break;
        }

        if c == '\\' || (rules.interpolates && matches!(c, '{' | '}')) {
            lexer.mark_end();
            return if has_content {
                Stop::Content
            } else {
                Stop::Reject
            };
        }

        if Some(c) == rules.closing {
            if !has_content {
                lexer.advance();
            }
            lexer.mark_end();
            return if has_content {
                Stop::Content
            } else {
                Stop::Closed
            };
        }

        // A leading newline is content; one after content means the
        // literal was never closed on its line.
        if c == '\n' && has_content {
            debug!(kind = %rules.content, "unterminated literal at end of line");
            return Stop::Reject;
        }

        lexer.advance();
        has_content = true;
    }

    if has_content {
        debug!(kind = %rules.content, "unterminated literal at end of input");
        Stop::Reject
    } else {
        Stop::Exhausted
    }
}

#[cfg(test)]
mod tests;
