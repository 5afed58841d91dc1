//! Host-side character stream for the Talon external scanner.
//!
//! The scanner never owns the source text. It sees the input through the
//! [`Lexer`] trait: one character of lookahead, an advance that is either
//! significant or trivia, and a way to mark where the committed token ends.
//!
//! [`SourceLexer`] is the reference implementation of that boundary over a
//! sentinel-terminated [`SourceBuffer`]. It models the parsing host closely
//! enough to drive the scanner in tests and tools.

mod cursor;
mod lexer;
mod source_buffer;

pub use cursor::Cursor;
pub use lexer::{Lexer, SourceLexer, TokenSpan};
pub use source_buffer::SourceBuffer;
